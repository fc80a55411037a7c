//! Storage layout codec: where salt bytes sit relative to hash bytes in one buffer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Whether and where salt bytes are stored alongside hash bytes.
///
/// The combined layouts are bit-exact: `Prepend` is `salt ++ hash`, `Append`
/// is `hash ++ salt`, `DoNotStore` is the hash alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaltStoreType {
    /// The salt is not persisted; the stored buffer is the hash alone.
    DoNotStore,
    /// The salt precedes the hash in the stored buffer.
    Prepend,
    /// The salt follows the hash in the stored buffer.
    Append,
}

/// Combine `hash` and `salt` into a single stored buffer per `store`.
///
/// Under [`SaltStoreType::DoNotStore`] the salt is ignored entirely and a copy
/// of `hash` is returned.
pub fn combine(hash: &[u8], salt: &[u8], store: SaltStoreType) -> Vec<u8> {
    match store {
        SaltStoreType::DoNotStore => hash.to_vec(),
        SaltStoreType::Prepend => {
            let mut out = Vec::with_capacity(salt.len() + hash.len());
            out.extend_from_slice(salt);
            out.extend_from_slice(hash);
            out
        }
        SaltStoreType::Append => {
            let mut out = Vec::with_capacity(hash.len() + salt.len());
            out.extend_from_slice(hash);
            out.extend_from_slice(salt);
            out
        }
    }
}

/// Extract the hash sub-sequence from a stored buffer.
///
/// Under [`SaltStoreType::DoNotStore`], `salt_len` is ignored and the full
/// buffer is returned. For the other layouts `salt_len` must lie in
/// `[0; stored.len())`; out-of-range values are rejected rather than sliced.
pub fn extract_hash(stored: &[u8], store: SaltStoreType, salt_len: usize) -> Result<Vec<u8>> {
    match store {
        SaltStoreType::DoNotStore => Ok(stored.to_vec()),
        SaltStoreType::Prepend => {
            check_salt_len(stored, salt_len)?;
            Ok(stored[salt_len..].to_vec())
        }
        SaltStoreType::Append => {
            check_salt_len(stored, salt_len)?;
            Ok(stored[..stored.len() - salt_len].to_vec())
        }
    }
}

/// Extract the salt sub-sequence from a stored buffer; the complement of
/// [`extract_hash`].
///
/// Under [`SaltStoreType::DoNotStore`] the salt was never stored, so the
/// result is empty regardless of `salt_len`.
pub fn extract_salt(stored: &[u8], store: SaltStoreType, salt_len: usize) -> Result<Vec<u8>> {
    match store {
        SaltStoreType::DoNotStore => Ok(Vec::new()),
        SaltStoreType::Prepend => {
            check_salt_len(stored, salt_len)?;
            Ok(stored[..salt_len].to_vec())
        }
        SaltStoreType::Append => {
            check_salt_len(stored, salt_len)?;
            Ok(stored[stored.len() - salt_len..].to_vec())
        }
    }
}

// A salt_len equal to the buffer length would leave an empty hash, which no
// supported algorithm produces, so the upper bound is exclusive.
fn check_salt_len(stored: &[u8], salt_len: usize) -> Result<()> {
    if salt_len >= stored.len() {
        return Err(Error::invalid_argument(format!(
            "salt length {} out of range [0; {})",
            salt_len,
            stored.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_concrete_vector() {
        let stored = combine(&[1, 2, 3], &[10, 11, 12], SaltStoreType::Prepend);
        assert_eq!(stored, vec![10, 11, 12, 1, 2, 3]);
        assert_eq!(extract_hash(&stored, SaltStoreType::Prepend, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(extract_salt(&stored, SaltStoreType::Prepend, 3).unwrap(), vec![10, 11, 12]);
    }

    #[test]
    fn append_layout_is_hash_then_salt() {
        let stored = combine(&[1, 2, 3], &[10, 11, 12], SaltStoreType::Append);
        assert_eq!(stored, vec![1, 2, 3, 10, 11, 12]);
        assert_eq!(extract_hash(&stored, SaltStoreType::Append, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(extract_salt(&stored, SaltStoreType::Append, 3).unwrap(), vec![10, 11, 12]);
    }

    #[test]
    fn do_not_store_ignores_salt() {
        assert_eq!(combine(&[1, 2, 3], &[9, 9, 9, 9], SaltStoreType::DoNotStore), vec![1, 2, 3]);
        assert_eq!(combine(&[1, 2, 3], &[], SaltStoreType::DoNotStore), vec![1, 2, 3]);
    }

    #[test]
    fn do_not_store_extraction_ignores_salt_len() {
        let stored = [5u8, 6, 7];
        assert_eq!(
            extract_hash(&stored, SaltStoreType::DoNotStore, usize::MAX).unwrap(),
            vec![5, 6, 7]
        );
        assert_eq!(extract_salt(&stored, SaltStoreType::DoNotStore, 17).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn round_trip_law() {
        let hash = [0xAAu8; 32];
        let salt = [0x55u8; 7];
        for store in [SaltStoreType::Prepend, SaltStoreType::Append] {
            let stored = combine(&hash, &salt, store);
            assert_eq!(extract_hash(&stored, store, salt.len()).unwrap(), hash);
            assert_eq!(extract_salt(&stored, store, salt.len()).unwrap(), salt);
        }
    }

    #[test]
    fn zero_salt_len_returns_whole_buffer() {
        let stored = [1u8, 2, 3, 4];
        for store in [SaltStoreType::Prepend, SaltStoreType::Append] {
            assert_eq!(extract_hash(&stored, store, 0).unwrap(), stored.to_vec());
            assert_eq!(extract_salt(&stored, store, 0).unwrap(), Vec::<u8>::new());
        }
    }

    #[test]
    fn out_of_range_salt_len_names_the_range() {
        let stored = [1u8, 2, 3, 4];
        for store in [SaltStoreType::Prepend, SaltStoreType::Append] {
            for bad in [stored.len(), stored.len() + 1, usize::MAX] {
                let err = extract_hash(&stored, store, bad).unwrap_err();
                assert!(err.to_string().contains("[0; 4)"), "unexpected message: {err}");
                assert!(extract_salt(&stored, store, bad).is_err());
            }
        }
    }
}
