//! cove-util - Foundation Types for the Cove Configuration Language
//!
//! This crate provides the small set of types shared by every phase of the
//! Cove toolchain: source positions, position-tagged values, and the global
//! string interner used for section and atom names.
//!
//! # Overview
//!
//! - [`position`] - Source positions and the [`Located`] wrapper
//! - [`symbol`] - Interned strings ([`Symbol`])
//!
//! Everything here is value-typed and cheap to copy. The only shared state
//! in the crate is the global string table behind [`Symbol`], which is
//! thread-safe and append-only.
//!
//! # Example Usage
//!
//! ```
//! use cove_util::{Located, Position, Symbol};
//!
//! let name = Symbol::intern("server");
//! let tok = Located::new(Position::START, name);
//!
//! assert_eq!(tok.position.line, 1);
//! assert_eq!(tok.value.as_str(), "server");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod position;
pub mod symbol;

pub use position::{Located, Position};
pub use symbol::Symbol;

// Re-export commonly used hash types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
