//! # Store
//!
//! Top-level store handle. Currently only identifies itself.

pub const STORE_VERSION: &str = "0.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub version: &'static str,
}

impl Store {
    pub fn new() -> Self {
        Store {
            version: STORE_VERSION,
        }
    }

    pub fn hello_world(&self) -> &'static str {
        "Hello world"
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
