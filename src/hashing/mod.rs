//! Password hashing functionality
//!
//! While the `primitives` module handles the raw digest computation, this
//! module contains the parsed form of a password hash, `Output`, together
//! with its modular crypt format codec: `FromStr` parses a `$2b$...` string
//! into an `Output`, and `Display` writes it back out. An `Output` carries
//! everything verification needs, so stored hash strings are
//! self-describing.

use data_encoding::{Encoding, Specification};

use std::fmt;
use std::str::FromStr;

use config::SALT_LEN;
use errors::*;
use primitives::{Bcrypt, MAX_COST, MIN_COST};

/// Length of the base64-encoded salt within a hash string.
const SALT_B64_LEN: usize = 22;

/// Length of the base64-encoded digest within a hash string.
const HASH_B64_LEN: usize = 31;

lazy_static! {
    /// bcrypt's nonstandard base64 alphabet, unpadded.
    pub(crate) static ref BCRYPT_B64: Encoding = {
        let mut spec = Specification::new();
        spec.symbols
            .push_str("./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789");
        spec.encoding().expect("bcrypt base64 alphabet is well formed")
    };
}

/// The generation marker carried between the first two `$` signs of a hash.
///
/// New hashes are always produced as `2b`. The remaining variants are
/// accepted when parsing, so hashes produced by other implementations still
/// verify.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// The original OpenBSD `$2a$` marker.
    TwoA,
    /// The current OpenBSD `$2b$` marker, used for new hashes.
    TwoB,
    /// The `$2x$` marker, flagging hashes from buggy crypt_blowfish sign
    /// extension.
    TwoX,
    /// The `$2y$` marker, emitted by fixed crypt_blowfish.
    TwoY,
}

impl Variant {
    /// The marker as it appears in the hash string.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Variant::TwoA => "2a",
            Variant::TwoB => "2b",
            Variant::TwoX => "2x",
            Variant::TwoY => "2y",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Represents the parsed output of the password hashing algorithm.
pub struct Output {
    /// The variant tag the hash was produced under.
    pub variant: Variant,
    /// The cost factor.
    pub cost: u32,
    /// The salt.
    pub salt: [u8; SALT_LEN],
    /// The 23-byte hash output.
    pub hash: Vec<u8>,
}

impl Output {
    /// Verifies that the supplied password matches the hashed value.
    ///
    /// Re-derives the digest under the stored cost and salt, and compares it
    /// to the stored digest in constant time. A wrong password yields
    /// `Ok(false)`, never an error.
    pub fn verify<P: AsRef<[u8]>>(&self, password: P) -> Result<bool> {
        Bcrypt::new(self.cost)?.verify(password.as_ref(), &self.salt, &self.hash)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "${}${:02}${}{}",
               self.variant,
               self.cost,
               BCRYPT_B64.encode(&self.salt),
               BCRYPT_B64.encode(&self.hash))
    }
}

/// The reason never quotes the rejected string, which could be a misplaced
/// password.
fn malformed(reason: &str) -> Error {
    debug!("rejecting malformed hash: {}", reason);
    ErrorKind::MalformedHash(reason.to_string()).into()
}

impl FromStr for Output {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut fields = s.split('$');
        if fields.next() != Some("") {
            return Err(malformed("missing leading '$'"));
        }
        let variant = match fields.next() {
            Some("2a") => Variant::TwoA,
            Some("2b") => Variant::TwoB,
            Some("2x") => Variant::TwoX,
            Some("2y") => Variant::TwoY,
            _ => return Err(malformed("unrecognized variant tag")),
        };
        let cost = match fields.next() {
            Some(f) if f.len() == 2 && f.bytes().all(|b| b.is_ascii_digit()) => {
                f.parse::<u32>().map_err(|_| malformed("cost field is not a number"))?
            }
            _ => return Err(malformed("cost field is not two digits")),
        };
        if cost < MIN_COST || cost > MAX_COST {
            return Err(malformed("cost field outside the supported range"));
        }
        let payload = match fields.next() {
            Some(p) => p.as_bytes(),
            None => return Err(malformed("missing salt and digest field")),
        };
        if fields.next().is_some() {
            return Err(malformed("too many fields"));
        }
        if payload.len() != SALT_B64_LEN + HASH_B64_LEN {
            return Err(malformed("salt and digest field has the wrong length"));
        }
        let decoded_salt = BCRYPT_B64.decode(&payload[..SALT_B64_LEN])
            .map_err(|_| malformed("salt is not canonical bcrypt base64"))?;
        let hash = BCRYPT_B64.decode(&payload[SALT_B64_LEN..])
            .map_err(|_| malformed("digest is not canonical bcrypt base64"))?;
        let mut salt = [0_u8; SALT_LEN];
        salt.copy_from_slice(&decoded_salt);
        Ok(Output {
            variant: variant,
            cost: cost,
            salt: salt,
            hash: hash,
        })
    }
}
