//! Restro Forms Validation Core
//!
//! Pure, synchronous validators for the restaurant site's registration, login
//! and contact forms. Every check returns a [`ValidationOutcome`]; nothing in
//! here fails with an error or touches shared mutable state.
//!
//! - [`pattern`] holds the fixed field-kind → regex registry
//! - [`string`], [`date`] and [`password`] are the individual validators
//! - [`engine`] composes them per field in a fixed order
//! - [`message`] turns failure reasons into display text

pub mod date;
pub mod engine;
pub mod kind;
pub mod message;
pub mod outcome;
pub mod password;
pub mod pattern;
pub mod string;

pub use date::*;
pub use engine::*;
pub use kind::*;
pub use message::*;
pub use outcome::*;
pub use password::*;
pub use pattern::{lookup, patterns, Pattern};
pub use string::*;
