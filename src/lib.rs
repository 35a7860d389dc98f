#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;

pub mod hash_table;

/// A hash set of integer-like keys.
///
/// This module provides a `HashSet` that wraps the `HashTable` with unit
/// values.
pub mod hash_set;

/// Keys the table can store.
///
/// This module provides the `Key` trait and its implementations for
/// integers, `char`, and pointers.
pub mod key;

mod mix;

pub use error::TryReserveError;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
pub use key::Key;
