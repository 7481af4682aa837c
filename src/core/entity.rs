//! Entity trait defining the core abstraction for stored records

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base trait for every record kept in a collection.
///
/// A record carries an opaque text id that is unique within its collection
/// and never changes after creation. The associated names drive routing
/// (`resource_name`), guard lookups (`path_param`) and error messages
/// (`display_name`).
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The plural resource name used in URLs (e.g., "dishes", "orders")
    fn resource_name() -> &'static str;

    /// Capitalized name used in messages (e.g., "Dish", "Order")
    fn display_name() -> &'static str;

    /// Name of the path parameter that carries the record id (e.g., "dishId")
    fn path_param() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;
}
