//! # Configuration
//!
//! Included here are the fixed parameters of the library: the default cost
//! factor, the salt size, and the shared source of randomness used when
//! generating salts.
//!
//! There is deliberately nothing else to configure. The cost factor can be
//! chosen per call with `hash_password_with_cost`; everything else a hash
//! depends on is carried inside the hash string itself.

use ring::rand::{SecureRandom, SystemRandom};

use errors::*;

/// Default cost factor for new hashes.
///
/// Should be revisited periodically: the right value keeps a hash/verify
/// call slow enough to frustrate brute force while staying acceptable for
/// interactive logins.
pub const DEFAULT_COST: u32 = 10;

/// Number of random salt bytes generated per hash.
pub const SALT_LEN: usize = 16;

lazy_static! {
    /// Global source of randomness for generating salts
    pub static ref RANDOMNESS_SOURCE: SystemRandom = SystemRandom::new();
}

/// Generates a fresh salt from the shared randomness source.
pub(crate) fn gen_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0_u8; SALT_LEN];
    RANDOMNESS_SOURCE.fill(&mut salt)?;
    trace!("generated fresh {}-byte salt", SALT_LEN);
    Ok(salt)
}
