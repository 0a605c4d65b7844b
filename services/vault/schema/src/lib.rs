//! SeaORM entities for the vault's two collections.

pub mod generated_codes;
pub mod scanned_codes;
