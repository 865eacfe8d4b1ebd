//! # Ordered Collections
//!
//! Ordered, PHP-array style collections with a fluent functional API.
//!
//! This crate re-exports the workspace members under one roof:
//!
//! - [`collection`] - the `Collection` container, the `Enumerable` operation
//!   set, dotted path resolution and the `Value` type it walks
//!
//! ## Quick Start
//!
//! ```rust
//! use ordered_collections::prelude::*;
//!
//! let mut scores = Collection::from(vec![40, 10, 30]);
//! scores.push(20);
//!
//! let top = scores.sort_by(|a, b| b.cmp(a)).take(2);
//! assert_eq!(top.to_json().unwrap(), "[40,30]");
//! assert!(scores.has([0usize, 3]));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use ordered_collection as collection;

/// Common imports for collection users
pub mod prelude {
    pub use crate::collection::{
        resolve_path, AsNumber, Collection, CollectionError, CollectionResult, Enumerable, IntoKeys,
        Key, Number, Path, PathConfig, Value, ValueKind,
    };
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
