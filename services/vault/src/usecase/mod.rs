pub mod generated;
pub mod scanned;
