pub mod action;
pub mod generated;
pub mod health;
pub mod preview;
pub mod scanned;
