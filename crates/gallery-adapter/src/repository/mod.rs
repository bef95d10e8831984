//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from gallery-domain.

pub mod in_memory;
pub mod mysql;
