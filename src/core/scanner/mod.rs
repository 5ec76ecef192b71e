//! Scan the content of Cool string literals for a grammar-driven parser.
//!
//! The host parser handles almost all of Cool's tokens declaratively. String
//! content is the exception: it must be read character by character with
//! escape tracking, so the grammar lists it as an external token and calls
//! into this module to produce it.
//!
//! This module provides the content scanner (`string_content`), the
//! external-scanner entry points the host calls (`external`), the cursor
//! abstraction the scanner reads through (`cursor`), token kinds and the
//! valid-token set (`tokens`), options (`config`), errors (`error`), and a
//! small driver that tokenizes a whole string literal the way the host
//! would (`literal`). Common items are re-exported so callers can import
//! from `cool_scanner::core::scanner::{CoolScanner, StringCursor, ...}`.
//!
//! A scan keeps no state between calls: it is a function of the cursor's
//! contents and the valid-token set.
//!
//! ## Examples
//! ```
//! # use cool_scanner::core::scanner::*;
//! let mut scanner = CoolScanner::create();
//! let mut cursor = StringCursor::at_offset("\"hello\"", 1);
//! let valid = ValidTokens::only(ExternalToken::StringContent);
//! assert!(scanner.scan(&mut cursor, valid));
//! assert_eq!(cursor.marked_end().map(|p| p.offset), Some(6));
//! ```
pub mod config;
pub mod cursor;
pub mod error;
pub mod external;
pub mod literal;
pub mod string_content;
pub mod tokens;

pub use config::*;
pub use cursor::*;
pub use error::*;
pub use external::*;
pub use literal::*;
pub use string_content::*;
pub use tokens::*;
