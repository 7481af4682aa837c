//! Record id generation

use uuid::Uuid;

/// Allocate a fresh record id
///
/// Ids are 32 lowercase hex characters carrying 128 random bits.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}
