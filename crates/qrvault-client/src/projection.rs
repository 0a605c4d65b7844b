//! Search and sort applied to fetched listings. Nothing here touches the
//! network; the server always returns full, newest-first lists.

use std::cmp::Ordering;

use qrvault_domain::code::{GeneratedCode, ScannedCode};
use qrvault_domain::sort::VaultSort;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultFilter {
    pub search: String,
    pub sort: VaultSort,
}

impl VaultFilter {
    pub fn generated(&self, codes: &[GeneratedCode]) -> Vec<GeneratedCode> {
        let needle = self.search.to_lowercase();
        let mut visible: Vec<GeneratedCode> = codes
            .iter()
            .filter(|c| matches(&needle, c.label.as_deref(), &c.data))
            .cloned()
            .collect();
        match self.sort {
            VaultSort::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            VaultSort::Oldest => visible.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            VaultSort::LabelAsc => visible.sort_by(|a, b| compare_labels(a, b)),
            VaultSort::LabelDesc => visible.sort_by(|a, b| compare_labels(b, a)),
        }
        visible
    }

    /// Scanned codes have no label, so the label orders keep fetched order.
    pub fn scanned(&self, codes: &[ScannedCode]) -> Vec<ScannedCode> {
        let needle = self.search.to_lowercase();
        let mut visible: Vec<ScannedCode> = codes
            .iter()
            .filter(|c| matches(&needle, c.note.as_deref(), &c.data))
            .cloned()
            .collect();
        match self.sort {
            VaultSort::Newest => visible.sort_by(|a, b| b.scanned_at.cmp(&a.scanned_at)),
            VaultSort::Oldest => visible.sort_by(|a, b| a.scanned_at.cmp(&b.scanned_at)),
            VaultSort::LabelAsc | VaultSort::LabelDesc => {}
        }
        visible
    }
}

/// `needle` is already lowercased.
fn matches(needle: &str, text: Option<&str>, data: &str) -> bool {
    needle.is_empty()
        || text.is_some_and(|t| t.to_lowercase().contains(needle))
        || data.to_lowercase().contains(needle)
}

fn compare_labels(a: &GeneratedCode, b: &GeneratedCode) -> Ordering {
    let a = a.label.as_deref().unwrap_or("").to_lowercase();
    let b = b.label.as_deref().unwrap_or("").to_lowercase();
    a.cmp(&b)
}
