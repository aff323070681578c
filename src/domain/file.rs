//! Uploaded files domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::FileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilePurpose {
    DisputeEvidence,
    IdentityDocument,
}

/// Metadata of an uploaded file (evidence, verification documents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: FileId,
    pub purpose: FilePurpose,
    pub filename: String,
    pub size: u64,
    pub created: DateTime<Utc>,
}
