use qrvault_domain::color::HexColor;

/// Raw create-generated submission. Every field is optional at this stage so
/// that missing input surfaces as a field error rather than a parse failure.
#[derive(Debug, Clone, Default)]
pub struct CreateGeneratedSubmission {
    pub data: Option<String>,
    pub label: Option<String>,
    pub foreground_color: Option<String>,
    pub background_color: Option<String>,
}

/// Raw create-scanned submission.
#[derive(Debug, Clone, Default)]
pub struct CreateScannedSubmission {
    pub data: Option<String>,
    pub note: Option<String>,
}

/// A validated generated code ready for insertion. `data` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGeneratedCode {
    pub data: String,
    pub label: Option<String>,
    pub foreground_color: HexColor,
    pub background_color: HexColor,
}

/// A validated scanned code ready for insertion. `data` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScannedCode {
    pub data: String,
    pub note: Option<String>,
}

/// Outcome of a listing cache read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedListing<T> {
    Fresh(Vec<T>),
    /// Nothing usable is cached. A listing read from the store may be stored
    /// back only under this generation.
    Stale { generation: u64 },
}

/// Trim optional free text; blank text becomes absent.
pub fn normalize_text(text: Option<String>) -> Option<String> {
    let text = text?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_owned())
    }
}
