//! Account documents domain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::DocumentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    VatInvoice,
    Statement,
}

/// A downloadable account document (invoice, statement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub document_id: DocumentId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub period_from: NaiveDate,
    pub period_to: NaiveDate,
}

/// Pagination and filters for the documents list and summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentsQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_is: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_after: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_before: Option<NaiveDate>,
}

impl Default for DocumentsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            type_is: None,
            date_after: None,
            date_before: None,
        }
    }
}

/// One page of documents plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentsList {
    pub documents: Vec<Document>,
    pub total_count: usize,
}

/// Aggregate figures for the current filter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentsSummary {
    pub count: usize,
}
