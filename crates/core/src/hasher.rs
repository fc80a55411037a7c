//! Fluent façade wiring sources, salts, and the storage layout together.

use std::io::Read;

use rand::RngCore;

use crate::algorithm::DigestAlgorithm;
use crate::engine::{digest_bytes, digest_reader, digest_text};
use crate::error::Result;
use crate::layout::{combine, extract_hash, extract_salt, SaltStoreType};
use crate::order::SaltOrder;
use crate::salted::SaltedHash;

/// Default length of the randomly generated stored salt, in bytes.
pub const DEFAULT_STORED_SALT_LEN: usize = 16;

/// One-stop salted hashing and verification.
///
/// Bundles the knobs a hasher and its verifier must agree on: the digest
/// algorithm, the salt fold order, the storage layout, the fixed salt, and the
/// stored-salt length. `hash_*` produces the stored buffer; `verify_*` parses
/// one back and recomputes.
#[derive(Debug, Clone)]
pub struct SaltedHasher {
    algorithm: DigestAlgorithm,
    order: SaltOrder,
    store: SaltStoreType,
    fixed_salt: Vec<u8>,
    stored_salt_len: usize,
}

impl SaltedHasher {
    /// A hasher with a prepended random 16-byte stored salt, folded in before
    /// the (empty) fixed salt.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        SaltedHasher {
            algorithm,
            order: SaltOrder::StoredFirst,
            store: SaltStoreType::Prepend,
            fixed_salt: Vec::new(),
            stored_salt_len: DEFAULT_STORED_SALT_LEN,
        }
    }

    pub fn salt_order(mut self, order: SaltOrder) -> Self {
        self.order = order;
        self
    }

    pub fn store_type(mut self, store: SaltStoreType) -> Self {
        self.store = store;
        self
    }

    pub fn fixed_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.fixed_salt = salt.into();
        self
    }

    /// Length of the per-record random salt. Zero disables the stored salt.
    pub fn stored_salt_len(mut self, len: usize) -> Self {
        self.stored_salt_len = len;
        self
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Hash `input` and return the stored buffer (salt and hash combined per
    /// the configured layout).
    pub fn hash_bytes(&self, input: &[u8]) -> Vec<u8> {
        self.finish(digest_bytes(self.algorithm, input))
    }

    /// Hash `text` encoded with the encoding named by `encoding_label`.
    pub fn hash_text(&self, text: &str, encoding_label: &str) -> Result<Vec<u8>> {
        Ok(self.finish(digest_text(self.algorithm, text, encoding_label)?))
    }

    /// Hash everything `reader` yields.
    pub fn hash_reader<R: Read>(&self, reader: R) -> Result<Vec<u8>> {
        Ok(self.finish(digest_reader(self.algorithm, reader)?))
    }

    /// Check `input` against a stored buffer previously produced by one of the
    /// `hash_*` operations with the same configuration.
    pub fn verify_bytes(&self, input: &[u8], stored: &[u8]) -> Result<bool> {
        self.check(digest_bytes(self.algorithm, input), stored)
    }

    pub fn verify_text(&self, text: &str, encoding_label: &str, stored: &[u8]) -> Result<bool> {
        self.check(digest_text(self.algorithm, text, encoding_label)?, stored)
    }

    pub fn verify_reader<R: Read>(&self, reader: R, stored: &[u8]) -> Result<bool> {
        self.check(digest_reader(self.algorithm, reader)?, stored)
    }

    fn finish(&self, mut hash: SaltedHash) -> Vec<u8> {
        let stored_salt = self.generate_stored_salt();
        self.order.apply(&mut hash, &stored_salt, &self.fixed_salt);
        combine(&hash.bytes(), &stored_salt, self.store)
    }

    fn check(&self, mut hash: SaltedHash, stored: &[u8]) -> Result<bool> {
        let stored_salt = extract_salt(stored, self.store, self.stored_salt_len)?;
        let reference = extract_hash(stored, self.store, self.stored_salt_len)?;
        self.order.apply(&mut hash, &stored_salt, &self.fixed_salt);
        Ok(hash.matches(&reference))
    }

    // An unstored salt cannot be recovered at verification time, so DoNotStore
    // always hashes with an empty stored salt.
    fn generate_stored_salt(&self) -> Vec<u8> {
        if self.store == SaltStoreType::DoNotStore || self.stored_salt_len == 0 {
            return Vec::new();
        }
        let mut salt = vec![0u8; self.stored_salt_len];
        rand::thread_rng().fill_bytes(&mut salt);
        salt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn hash_then_verify_round_trip() {
        for store in [SaltStoreType::Prepend, SaltStoreType::Append] {
            for order in [SaltOrder::StoredFirst, SaltOrder::FixedFirst] {
                let hasher = SaltedHasher::new(DigestAlgorithm::Sha256)
                    .store_type(store)
                    .salt_order(order)
                    .fixed_salt(&b"site-pepper"[..]);
                let stored = hasher.hash_bytes(b"correct horse");
                assert_eq!(stored.len(), 32 + DEFAULT_STORED_SALT_LEN);
                assert!(hasher.verify_bytes(b"correct horse", &stored).unwrap());
                assert!(!hasher.verify_bytes(b"wrong horse", &stored).unwrap());
            }
        }
    }

    #[test]
    fn do_not_store_round_trip_uses_no_stored_salt() {
        let hasher = SaltedHasher::new(DigestAlgorithm::Sha1)
            .store_type(SaltStoreType::DoNotStore)
            .fixed_salt(&b"pepper"[..]);
        let stored = hasher.hash_bytes(b"input");
        assert_eq!(stored.len(), 20);
        assert!(hasher.verify_bytes(b"input", &stored).unwrap());
        assert!(!hasher.verify_bytes(b"other", &stored).unwrap());
    }

    #[test]
    fn zero_salt_len_hashes_deterministically() {
        let hasher = SaltedHasher::new(DigestAlgorithm::Md5).stored_salt_len(0);
        assert_eq!(hasher.hash_bytes(b"input"), hasher.hash_bytes(b"input"));
    }

    #[test]
    fn stored_salts_differ_between_records() {
        let hasher = SaltedHasher::new(DigestAlgorithm::Sha256);
        let a = hasher.hash_bytes(b"input");
        let b = hasher.hash_bytes(b"input");
        assert_ne!(a, b);
        assert!(hasher.verify_bytes(b"input", &a).unwrap());
        assert!(hasher.verify_bytes(b"input", &b).unwrap());
    }

    #[test]
    fn verifier_config_must_match_hasher() {
        let hasher = SaltedHasher::new(DigestAlgorithm::Sha256).fixed_salt(&b"a"[..]);
        let stored = hasher.hash_bytes(b"input");
        let other = hasher.clone().fixed_salt(&b"b"[..]);
        assert!(!other.verify_bytes(b"input", &stored).unwrap());
    }

    #[test]
    fn text_and_reader_sources_verify() {
        let hasher = SaltedHasher::new(DigestAlgorithm::Sha512);
        let stored = hasher.hash_text("pa55w0rd", "UTF-8").unwrap();
        assert!(hasher.verify_text("pa55w0rd", "UTF-8", &stored).unwrap());
        assert!(hasher
            .verify_reader(std::io::Cursor::new(b"pa55w0rd".to_vec()), &stored)
            .unwrap());
    }

    #[test]
    fn verify_rejects_truncated_stored_buffer() {
        let hasher = SaltedHasher::new(DigestAlgorithm::Sha256);
        let err = hasher.verify_bytes(b"input", &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
