pub mod document;
pub mod kv;
