//! Session revocation implementations.

mod memory;

pub use memory::InMemoryRevocationStore;
