//! In-memory collaborators for tests, benchmarks and demos.
//!
//! [`MemoryBank`] implements [`NativeBank`](crate::traits::NativeBank) and
//! [`MemoryCollection`] implements
//! [`ItemCollection`](crate::traits::ItemCollection), optionally with
//! enumeration.

mod bank;
mod collection;

pub use bank::MemoryBank;
pub use collection::MemoryCollection;
