//! Validation helpers shared by every resource
//!
//! Request bodies are kept as raw JSON until they have passed the
//! validation chain, so the checks here work on `serde_json::Value` and
//! follow loose truthiness: a field counts as absent when it is missing,
//! `null`, `false`, `0` or `""`.

pub mod validators;

pub use validators::{
    conflicting_id, display_value, is_truthy, loose_number, require_fields, text_field,
    whole_number,
};
