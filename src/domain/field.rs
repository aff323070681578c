//! Tagged per-field draft/baseline state.
//!
//! Every mutable settings field carries its own sync tag so the hydration
//! path can mechanically decide whether a server value may land: a `Synced`
//! field follows the server, a `Dirty` field holds the user's unsaved edit
//! and ignores hydration until the edit is saved or reverted.

/// One settings field's state relative to the last-saved baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState<V> {
    /// The field matches the baseline; server refreshes may overwrite it.
    Synced(V),
    /// The field holds an unsaved local edit on top of `base`.
    Dirty { value: V, base: V },
}

impl<V: Clone + PartialEq> FieldState<V> {
    /// The current (draft) value.
    #[must_use]
    pub fn value(&self) -> &V {
        match self {
            FieldState::Synced(v) => v,
            FieldState::Dirty { value, .. } => value,
        }
    }

    /// The last-saved baseline value.
    #[must_use]
    pub fn base(&self) -> &V {
        match self {
            FieldState::Synced(v) => v,
            FieldState::Dirty { base, .. } => base,
        }
    }

    /// True when the draft differs from the baseline.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        matches!(self, FieldState::Dirty { .. })
    }

    /// Apply a server-provided value.
    ///
    /// Only a `Synced` field accepts it; a pending local edit wins over
    /// hydration until it is saved or reverted.
    pub fn hydrate(&mut self, incoming: V) {
        if let FieldState::Synced(_) = self {
            *self = FieldState::Synced(incoming);
        }
    }

    /// Apply a local edit.
    ///
    /// Editing a field back to its baseline value returns it to `Synced`,
    /// so dirtiness is always derivable from (draft, baseline) alone.
    pub fn edit(&mut self, next: V) {
        let base = self.base().clone();
        *self = if next == base {
            FieldState::Synced(base)
        } else {
            FieldState::Dirty { value: next, base }
        };
    }

    /// Advance the baseline to a server-accepted value.
    ///
    /// Called after a successful save. A field edited *after* the saved
    /// snapshot was taken stays dirty relative to the new baseline, so an
    /// in-flight save never swallows a newer edit.
    pub fn rebase(&mut self, accepted: V) {
        *self = match self {
            FieldState::Synced(_) => FieldState::Synced(accepted),
            FieldState::Dirty { value, .. } => {
                if *value == accepted {
                    FieldState::Synced(accepted)
                } else {
                    FieldState::Dirty {
                        value: value.clone(),
                        base: accepted,
                    }
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_marks_dirty_and_revert_clears() {
        let mut field = FieldState::Synced(vec!["card".to_string()]);
        assert!(!field.is_dirty());

        field.edit(vec!["card".to_string(), "bancontact".to_string()]);
        assert!(field.is_dirty());
        assert_eq!(field.base(), &vec!["card".to_string()]);

        field.edit(vec!["card".to_string()]);
        assert!(!field.is_dirty());
    }

    #[test]
    fn hydration_skips_dirty_fields() {
        let mut field = FieldState::Synced("OLD".to_string());
        field.edit("MYSTORE".to_string());

        field.hydrate("SERVER".to_string());
        assert_eq!(field.value(), "MYSTORE");
        assert_eq!(field.base(), "OLD");
    }

    #[test]
    fn hydration_refreshes_synced_fields() {
        let mut field = FieldState::Synced("OLD".to_string());
        field.hydrate("SERVER".to_string());
        assert_eq!(field.value(), "SERVER");
    }

    #[test]
    fn rebase_promotes_saved_draft_to_baseline() {
        let mut field = FieldState::Synced("OLD".to_string());
        field.edit("MYSTORE".to_string());
        field.rebase("MYSTORE".to_string());
        assert!(!field.is_dirty());
        assert_eq!(field.base(), "MYSTORE");
    }

    #[test]
    fn rebase_keeps_newer_edit_dirty() {
        // Edit lands while a save of the previous draft is in flight.
        let mut field = FieldState::Synced("OLD".to_string());
        field.edit("FIRST".to_string());
        field.edit("SECOND".to_string());
        field.rebase("FIRST".to_string());
        assert!(field.is_dirty());
        assert_eq!(field.value(), "SECOND");
        assert_eq!(field.base(), "FIRST");
    }

    #[test]
    fn dirty_edit_keeps_original_base() {
        let mut field = FieldState::Synced(1);
        field.edit(2);
        field.edit(3);
        assert_eq!(field.base(), &1);
        field.edit(1);
        assert!(!field.is_dirty());
    }
}
