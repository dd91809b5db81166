//! Immutable snapshot facades over fetched pool and position accounts.
//!
//! Snapshots hold decoded account data only; refreshing means decoding a new one.

pub mod pool;
pub mod position;

pub use pool::*;
pub use position::*;
