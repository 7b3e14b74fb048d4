use bcrypt::hash_with_salt;
// `ring` deprecated this module without a drop-in replacement; we still rely
// on its constant-time comparison.
#[allow(deprecated)]
use ring::constant_time;

use config;
use config::SALT_LEN;
use errors::*;
use hashing::{Output, Variant, BCRYPT_B64};

use std::fmt;

/// Lowest cost factor the primitive accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost factor the primitive accepts.
pub const MAX_COST: u32 = 31;

/// Longest password, in bytes, the primitive operates on.
///
/// Longer inputs are rejected rather than silently truncated, in both hash
/// and verify. Callers who need to accept longer passwords should pre-hash
/// them down to at most this many bytes.
pub const MAX_PASSWORD_LEN: usize = 72;

/// `bcrypt` parameter set.
///
/// Holds the cost value.
/// This implementation is backed by the `bcrypt` crate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Bcrypt {
    cost: u32,
}

impl Bcrypt {
    /// Construct a new `Bcrypt` parameter set.
    ///
    /// Fails with `ErrorKind::InvalidCost` when the cost lies outside
    /// `MIN_COST..=MAX_COST`.
    pub fn new(cost: u32) -> Result<Self> {
        if cost < MIN_COST || cost > MAX_COST {
            return Err(ErrorKind::InvalidCost(cost).into());
        }
        Ok(Bcrypt { cost: cost })
    }

    /// The configured cost factor.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes `password` under a freshly generated salt.
    ///
    /// Two calls with the same password produce different outputs, both of
    /// which verify against it.
    pub fn hash(&self, password: &[u8]) -> Result<Output> {
        let salt = config::gen_salt()?;
        let hash = self.compute(password, &salt)?;
        Ok(Output {
            variant: Variant::TwoB,
            cost: self.cost,
            salt: salt,
            hash: hash,
        })
    }

    /// Computes the raw 23-byte digest of `password` under `salt`.
    pub fn compute(&self, password: &[u8], salt: &[u8; SALT_LEN]) -> Result<Vec<u8>> {
        if password.len() > MAX_PASSWORD_LEN {
            return Err(ErrorKind::InvalidInput(format!(
                "password is {} bytes, over the {}-byte limit",
                password.len(),
                MAX_PASSWORD_LEN
            )).into());
        }
        trace!("computing bcrypt digest at cost {}", self.cost);
        let parts = hash_with_salt(password, self.cost, *salt)?;
        // `HashParts` exposes no accessor for the hash on its own; the
        // formatted string always ends with the 31-character base64 digest.
        let formatted = parts.format_for_version(::bcrypt::Version::TwoB);
        let encoded = &formatted[formatted.len() - 31..];
        let digest = BCRYPT_B64.decode(encoded.as_bytes()).map_err(|e| {
            error!("bcrypt emitted an undecodable digest: {}", e);
            Error::from(format!("undecodable bcrypt digest: {}", e))
        })?;
        Ok(digest)
    }

    /// Verifies `password` under `salt` against a previously computed digest.
    ///
    /// The digest comparison is constant-time.
    pub fn verify(&self, password: &[u8], salt: &[u8; SALT_LEN], hash: &[u8]) -> Result<bool> {
        let computed = self.compute(password, salt)?;
        #[allow(deprecated)]
        Ok(constant_time::verify_slices_are_equal(&computed, hash).is_ok())
    }
}

impl Default for Bcrypt {
    fn default() -> Self {
        Bcrypt { cost: config::DEFAULT_COST }
    }
}

impl fmt::Debug for Bcrypt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bcrypt, cost: {:?}", self.cost)
    }
}

#[cfg(test)]
mod bcrypt_test {
    use super::*;

    #[test]
    fn sanity_check() {
        let password = "hunter2";
        let params = Bcrypt::new(5).unwrap();
        println!("{:?}", params);
        let salt = ::config::gen_salt().unwrap();
        let hash = params.compute(password.as_bytes(), &salt).unwrap();
        let hash2 = params.compute(password.as_bytes(), &salt).unwrap();
        assert_eq!(hash, hash2);
        let out = params.hash(password.as_bytes()).unwrap();
        println!("{}", out);
        assert!(out.verify(password).unwrap());
    }

    #[test]
    fn verifies_bcrypt_hashes() {
        let password = "hunter2";
        let hash = "$2a$10$ckjEeyTD6estWyoofn4EROM9Ik2PqVcfcrepX.uGp6.aqRdCMN/Oe";
        assert!(::verify_password(hash, password).unwrap());
    }

    fn openwall_test(hash: &str, password: &[u8]) {
        let pwd_hash: Output = hash.parse().unwrap();
        let params = Bcrypt::new(pwd_hash.cost).unwrap();
        let len = ::std::cmp::min(password.len(), MAX_PASSWORD_LEN);
        let computed = params.compute(&password[..len], &pwd_hash.salt).unwrap();
        assert_eq!(pwd_hash.hash, computed);
        // Inputs over the limit are rejected by the public surface.
        if password.len() > MAX_PASSWORD_LEN {
            assert!(pwd_hash.verify(password).is_err());
        }
    }

    // Test the wrapped bcrypt implementation against the openwall test vectors.
    // Note that we currently are non compatible with "2x" variant hashes.
    #[test]
    fn openwall_test_vectors() {
        openwall_test("$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW",
                      b"U*U");
        openwall_test("$2a$05$CCCCCCCCCCCCCCCCCCCCC.VGOzA784oUp/Z0DY336zx7pLYAy0lwK",
                      b"U*U*");
        openwall_test("$2a$05$XXXXXXXXXXXXXXXXXXXXXOAcXxm9kjPGEMsLznoKqmqw7tc8WCx4a",
                      b"U*U*U");
        openwall_test("$2a$05$CCCCCCCCCCCCCCCCCCCCC.7uG0VCzI2bS7j6ymqJi9CdcdxiRTWNy",
                      b"");
        openwall_test("$2a$05$abcdefghijklmnopqrstuu5s2v8.iXieOjg/.AySBTTZIIVFJeBui",
                      b"0123456789abcdefghijklmnopqrstuvwxyz\
             ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
             chars after 72 are ignored");
        // openwall_test("$2x$05$/OK.fbVrR/bpIqNJ5ianF.CE5elHaaO4EbggVDjb8P19RukzXSM3e", b"\xa3");
        openwall_test("$2y$05$/OK.fbVrR/bpIqNJ5ianF.Sa7shbm4.OzKpvFnX1pQLmQW96oUlCq",
                      b"\xa3");
        // openwall_test("$2x$05$6bNw2HLQYeqHYyBfLMsv/OiwqTymGIGzFsA4hOTWebfehXHNprcAS", b"\xd1\x91");
        // openwall_test("$2x$05$6bNw2HLQYeqHYyBfLMsv/O9LIGgn8OMzuDoHfof8AQimSGfcSWxnS", b"\xd0\xc1\xd2\xcf\xcc\xd8");
        openwall_test("$2a$05$/OK.fbVrR/bpIqNJ5ianF.swQOIzjOiJ9GHEPuhEkvqrUyvWhEMx6",
                      b"\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\
             \xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\
             \xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\
             \xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\
             \xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\
             \xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\
             chars after 72 are ignored as usual");
        openwall_test("$2a$05$/OK.fbVrR/bpIqNJ5ianF.R9xrDjiycxMbQE2bp.vgqlYpW5wx2yy",
                      b"\xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\
              \xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\
              \xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\
              \xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\
              \xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\
              \xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55\xaa\x55");
        openwall_test("$2a$05$CCCCCCCCCCCCCCCCCCCCC.7uG0VCzI2bS7j6ymqJi9CdcdxiRTWNy",
                      b"");
        openwall_test("$2a$05$/OK.fbVrR/bpIqNJ5ianF.9tQZzcJfm3uj2NvJ/n5xkhpqLrMpWCe",
                      b"\x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\
              \x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\
              \x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\
              \x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\
              \x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\
              \x55\xaa\xff\x55\xaa\xff\x55\xaa\xff\x55\xaa\xff");
    }
}
