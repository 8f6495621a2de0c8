// Store module for on-disk application data.
// Resolves data/config locations and reads or writes JSON documents.

pub mod json;
pub mod paths;

pub use json::{read_json, write_json};
