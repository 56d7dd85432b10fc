//! Expression evaluation over decoded BITS packet trees.
//!
//! A decoded transmission is an arithmetic/logic expression: literals are
//! values, operators combine the values of their sub-packets. This crate
//! provides the two read-only traversals over that tree, [`version_sum`]
//! and [`value`], leaving the tree itself untouched.
//!
//! ## Example
//!
//! ```
//! use bits_expression::{value, version_sum};
//! use bits_pack::BitsDecoder;
//!
//! let packet = BitsDecoder::new().decode("C200B40A82").unwrap();
//! assert_eq!(version_sum(&packet), 14);
//! assert_eq!(value(&packet).unwrap(), 3);
//! ```

pub mod error;
pub mod evaluate;

pub use error::EvalError;
pub use evaluate::{value, version_sum};
