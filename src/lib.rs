#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod trace;

pub mod fib_hash;

/// A Robin Hood hash table keyed by `u64`.
///
/// This module provides [`HashTable`], an open-addressing table with a
/// bounded probe distance and backward-shift deletion.
pub mod hash_table;

pub use error::TryReserveError;
pub use hash_table::Handle;
pub use hash_table::HashTable;
