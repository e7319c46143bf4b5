pub mod common;
pub mod operation;
