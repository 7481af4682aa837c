//! Storage implementations and seed data loading

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryDataService;
pub use seed::SeedData;
