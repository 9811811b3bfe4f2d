//! Storage layer for pocket-ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The ledger file itself is handled by [`ledger_file`].

pub mod file_io;
pub mod ledger_file;

pub use file_io::{read_json_value, write_json_atomic};
