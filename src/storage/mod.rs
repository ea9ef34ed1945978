//! Storage implementations

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryGroupService;
pub use seed::seed_demo_data;
