//! Adapters - concrete implementations of the repository ports.
//!
//! - `mongo` - production MongoDB adapters
//! - `memory` - in-memory adapters for tests and local development

pub mod memory;
pub mod mongo;
