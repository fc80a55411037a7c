//! JSON output formats.

use serde::Serialize;

#[derive(Serialize)]
pub struct HashJson<'a> {
    pub status: &'a str,
    pub command: &'a str,
    pub input: String,
    pub algorithm: &'a str,
    pub store: &'a str,
    pub salt_len: usize,
    pub stored: String,
}

#[derive(Serialize)]
pub struct VerifyJson<'a> {
    pub status: &'a str,
    pub command: &'a str,
    pub input: String,
    pub algorithm: &'a str,
    pub matched: bool,
}

#[derive(Serialize)]
pub struct ErrorJson<'a> {
    pub status: &'a str,
    pub error: String,
    pub causes: Vec<String>,
}
