//! The evolving digest state: a live hash function plus the current digest bytes.

use digest::DynDigest;

use crate::algorithm::DigestAlgorithm;
use crate::encoding::encode_text;
use crate::error::Result;

/// A digest that can be extended with salt material.
///
/// Holds the live hash function instance alongside the current digest bytes.
/// Each [`add_salt`](Self::add_salt) call re-chains the digest: the current
/// bytes followed by the salt are fed into the hash function and the result
/// replaces the held bytes. Call order is significant;
/// [`SaltOrder`](crate::SaltOrder) exists to pin it down when two salts are
/// involved.
///
/// Not safe for concurrent mutation; use one instance per verification
/// attempt.
pub struct SaltedHash {
    algorithm: DigestAlgorithm,
    hasher: Box<dyn DynDigest>,
    bytes: Vec<u8>,
}

impl SaltedHash {
    pub(crate) fn new(algorithm: DigestAlgorithm, hasher: Box<dyn DynDigest>, bytes: Vec<u8>) -> Self {
        SaltedHash {
            algorithm,
            hasher,
            bytes,
        }
    }

    /// The algorithm this digest was computed with.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Number of bytes in the current digest; constant for the life of the object.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Folds `salt` into the digest: feeds the current digest bytes followed by
    /// `salt` into the hash function and replaces the held bytes with the new
    /// digest. Returns `self` for chaining; repeatable, and order-sensitive
    /// across calls.
    pub fn add_salt(&mut self, salt: &[u8]) -> &mut Self {
        self.hasher.update(&self.bytes);
        self.hasher.update(salt);
        self.bytes = self.hasher.finalize_reset().into_vec();
        self
    }

    /// Encodes `text` with the encoding named by `encoding_label` and folds the
    /// resulting bytes in via [`add_salt`](Self::add_salt).
    ///
    /// Encoding resolution happens first; an unknown label leaves the digest
    /// untouched.
    pub fn add_salt_text(&mut self, text: &str, encoding_label: &str) -> Result<&mut Self> {
        let salt = encode_text(text, encoding_label)?;
        Ok(self.add_salt(&salt))
    }

    /// Returns a fresh copy of the current digest bytes.
    ///
    /// The returned buffer never aliases internal state; mutating it has no
    /// effect on this object or on later calls.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Plain element-wise comparison of `candidate` against the current digest
    /// bytes. No timing-safety guarantee.
    pub fn matches(&self, candidate: &[u8]) -> bool {
        self.bytes == candidate
    }
}

impl std::fmt::Debug for SaltedHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltedHash")
            .field("algorithm", &self.algorithm)
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
