pub mod memory;
pub mod repo;
