//!
//! minipy-std-core - Core Runtime Types
//!
//! This crate provides the fundamental types shared across the minipy runtime:
//!
//! - `Value` for the scalars a list slot can hold
//! - `TaggedList` for the two-phase (fill, then append) runtime list
//! - `RuntimeError` for every unrecoverable runtime condition
//!
//! Nothing here terminates the process. Operations return
//! `Result<_, RuntimeError>` and the C ABI layer in `minipy-runtime`
//! decides how a fatal error is reported.
//!

pub mod error;
pub mod list;
pub mod value;

pub use error::*;
pub use list::*;
pub use value::*;
