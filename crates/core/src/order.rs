//! Fixed orderings for folding a stored salt and a fixed salt into one digest.

use serde::{Deserialize, Serialize};

use crate::salted::SaltedHash;

/// The order in which a stored salt and a fixed salt are folded into a
/// [`SaltedHash`].
///
/// Salt application re-chains the digest, so the two possible orders produce
/// different results; hasher and verifier must agree on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaltOrder {
    /// Fold the stored salt in first, then the fixed salt.
    StoredFirst,
    /// Fold the fixed salt in first, then the stored salt.
    FixedFirst,
}

impl SaltOrder {
    /// Applies both salts to `hash` in this order.
    pub fn apply(&self, hash: &mut SaltedHash, stored_salt: &[u8], fixed_salt: &[u8]) {
        match self {
            SaltOrder::StoredFirst => {
                hash.add_salt(stored_salt).add_salt(fixed_salt);
            }
            SaltOrder::FixedFirst => {
                hash.add_salt(fixed_salt).add_salt(stored_salt);
            }
        }
    }
}
