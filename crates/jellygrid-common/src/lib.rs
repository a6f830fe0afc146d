//! Jellygrid-Common: Shared types, identifiers, and errors.
//!
//! This crate provides the pieces used by both the catalog client and the
//! presentation layer:
//!
//! - **Typed IDs**: String wrappers for item, server, and user identifiers
//! - **Core Types**: The closed set of item kinds and the `MediaItem` wire model
//! - **Error Handling**: The classified error type and result alias
//!
//! # Examples
//!
//! ```
//! use jellygrid_common::{Error, ItemKind, StatusHint};
//!
//! assert_eq!(ItemKind::BoxSet.as_str(), "BoxSet");
//!
//! let err = Error::from_status(401);
//! assert_eq!(err.hint(), Some(StatusHint::InvalidApiKey));
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result, StatusHint};
pub use ids::*;
pub use types::*;
