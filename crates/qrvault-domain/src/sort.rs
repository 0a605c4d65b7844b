//! Client-side sort orders for the vault.

use serde::{Deserialize, Serialize};

/// Sort order applied to vault listings after they are fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VaultSort {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    /// Label A–Z; missing labels compare as the empty string.
    #[serde(rename = "az")]
    LabelAsc,
    /// Label Z–A.
    #[serde(rename = "za")]
    LabelDesc,
}

impl VaultSort {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "az" => Some(Self::LabelAsc),
            "za" => Some(Self::LabelDesc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::LabelAsc => "az",
            Self::LabelDesc => "za",
        }
    }
}
