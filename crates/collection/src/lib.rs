//! # Ordered Collection
//!
//! An ordered, mutable container with PHP array semantics and a fluent,
//! chainable API.
//!
//! Entries are stored under a [`Key`] (integer index or string name) in
//! insertion order. Appending assigns the next free integer index. Transforms
//! such as `map`, `filter` and `sort` never touch the receiver; they return a
//! new container of the receiver's own kind, built through
//! [`Enumerable::spawn`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ordered_collection::*;
//!
//! let mut numbers = Collection::from(vec![3, 1, 2]);
//! numbers.add(5).push(4);
//!
//! let doubled = numbers.sort().map(|n| n * 2);
//! assert_eq!(doubled.to_json().unwrap(), "[2,4,6,8,10]");
//! assert_eq!(numbers.sum(), Number::Int(15));
//!
//! // Dotted paths reach into nested values.
//! let orders: Collection<Value> = serde_json::from_str(
//!     r#"[{"total": {"net": 10}}, {"total": {"net": 5}}]"#,
//! )
//! .unwrap();
//! assert_eq!(orders.sum_path("total.net"), Number::Int(15));
//! ```

pub mod collection;
pub mod config;
pub mod data_path;
pub mod enumerable;
pub mod error;
pub mod key;
pub mod number;
pub mod serialization;
pub mod value;

pub use collection::Collection;
pub use config::PathConfig;
pub use data_path::{resolve_path, Path};
pub use enumerable::Enumerable;
pub use error::{CollectionError, CollectionResult};
pub use key::{IntoKeys, Key};
pub use number::{AsNumber, Number};
pub use value::{Value, ValueKind};
