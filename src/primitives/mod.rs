//! `Primitive` in `pretzel` refers to the raw hashing algorithm underneath
//! the public API.
//!
//! There is exactly one: `bcrypt`, an adaptive, intentionally slow algorithm
//! whose work factor is set by a per-call cost parameter. The primitive
//! computes raw digests for a given password and salt; the surrounding
//! encoding into a storable hash string lives in the `hashing` module.

/// `Bcrypt` implementation
///
/// Backed by the `bcrypt` crate.
mod bcrypt;
pub use self::bcrypt::{Bcrypt, MAX_COST, MAX_PASSWORD_LEN, MIN_COST};
