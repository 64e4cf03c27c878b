//! Persistence layer

pub mod file_io;
pub mod journal;

pub use file_io::{read_json, write_json_atomic};
pub use journal::JsonLedger;
