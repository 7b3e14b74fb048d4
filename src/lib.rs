// Copyright (c) 2017, Sam Scott

// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.

// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES WITH
// REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF MERCHANTABILITY
// AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY SPECIAL, DIRECT,
// INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES WHATSOEVER RESULTING FROM
// LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION OF CONTRACT, NEGLIGENCE
// OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN CONNECTION WITH THE USE OR
// PERFORMANCE OF THIS SOFTWARE.

//! # Pretzel - Salted Password Hashing
//!
//! This is a small library for hashing and verifying passwords with a
//! salted, adaptive algorithm (`bcrypt`).
//!
//! Every hash is produced under a fresh random salt, so hashing the same
//! password twice gives two different strings, both of which verify. The
//! resulting string is self-describing: it carries the algorithm variant,
//! the cost factor and the salt, so it is the only artifact a caller needs
//! to store.
//!
//! ## Examples
//!
//! The basic functionality for computing password hashes is:
//!
//! ```
//! extern crate pretzel;
//! // We re-export the rpassword crate for CLI password input.
//! use pretzel::rpassword::*;
//!
//! fn main() {
//!     # if false {
//!     let password = prompt_password_stdout("Please enter your password:").unwrap();
//!     # }
//!     # let password = "hunter2".to_string();
//!     let password_hash = pretzel::hash_password(password).expect("failed to hash password");
//!     println!("The stored password is: '{}'", password_hash);
//! }
//! ```
//!
//! ## Supported formats
//!
//! New hashes are emitted in the `$2b$...` modular crypt format. Verification
//! additionally accepts the legacy `$2a$`, `$2x$` and `$2y$` variants.

#![allow(unknown_lints)]
#![deny(
    dead_code,
    deprecated,
    improper_ctypes,
    missing_docs,
    non_camel_case_types,
    non_shorthand_field_patterns,
    non_snake_case,
    non_upper_case_globals,
    overflowing_literals,
    path_statements,
    stable_features,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unreachable_code,
    unsafe_code,
    unstable_features,
    unused_allocation,
    unused_assignments,
    unused_attributes,
    unused_comparisons,
    unused_extern_crates,
    unused_features,
    unused_imports,
    unused_import_braces,
    unused_must_use,
    unused_mut,
    unused_parens,
    unused_unsafe,
    unused_variables,
    variant_size_differences,
    while_true,
)]

extern crate bcrypt;
extern crate data_encoding;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate ring;

/// Re-export rpassword for convenience.
pub mod rpassword {
    extern crate rpassword;
    pub use self::rpassword::*;
}

/// `pretzel` errors.
pub mod errors {
    use bcrypt;
    use ring;

    use primitives::{MAX_COST, MIN_COST};

    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain! {
        foreign_links {
            Bcrypt(bcrypt::BcryptError) #[doc = "Errors surfaced by the wrapped `bcrypt` primitive."] ;
            Ring(ring::error::Unspecified) #[doc = "Errors originating from `ring`"] ;
        }

        errors {
            /// Cost factor outside the range supported by the primitive.
            InvalidCost(cost: u32) {
                description("cost factor out of range")
                display("invalid cost factor {} (supported range: {}..={})", cost, MIN_COST, MAX_COST)
            }

            /// Password violates the primitive's input constraints.
            InvalidInput(reason: String) {
                description("invalid password input")
                display("invalid password input: {}", reason)
            }

            /// Hash string does not parse as a recognized encoding.
            MalformedHash(reason: String) {
                description("malformed hash string")
                display("malformed hash string: {}", reason)
            }
        }
    }
}

use errors::*;

pub mod config;
pub mod hashing;
use hashing::Output;

pub mod primitives;

/// Generates a hash for a given password, at the default cost factor.
///
/// This is the simplest way to use pretzel, and uses sane defaults.
pub fn hash_password<P: AsRef<[u8]>>(password: P) -> Result<String> {
    hash_password_with_cost(password, config::DEFAULT_COST)
}

/// Generates a hash for a given password, at the supplied cost factor.
///
/// Raising the cost by one roughly doubles the work per hash and verify
/// call, for attackers and legitimate callers alike.
pub fn hash_password_with_cost<P: AsRef<[u8]>>(password: P, cost: u32) -> Result<String> {
    let pwd_hash = primitives::Bcrypt::new(cost)?.hash(password.as_ref())?;
    Ok(pwd_hash.to_string())
}

/// Verifies the provided password matches the inputted hash string.
///
/// A wrong password yields `Ok(false)`. Errors are reserved for hash strings
/// that do not parse and for passwords over the primitive's input limit.
pub fn verify_password<P: AsRef<[u8]>>(hash: &str, password: P) -> Result<bool> {
    let pwd_hash: Output = hash.parse()?;
    pwd_hash.verify(password)
}
