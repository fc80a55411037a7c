//! Core salted-hash primitives: digest computation with algorithm agility,
//! salt re-chaining, fold-order policies, and the recoverable-salt storage
//! layout codec.
//!
//! A caller digests a source ([`digest_bytes`]/[`digest_text`]/[`digest_reader`]),
//! optionally folds salts into the result ([`SaltedHash::add_salt`], ordered by
//! [`SaltOrder`]), and turns the outcome into one storable buffer ([`combine`])
//! or parses such a buffer back apart ([`extract_hash`]/[`extract_salt`]) to
//! re-verify. [`SaltedHasher`] bundles the whole pipeline behind a fluent API.

pub mod algorithm;
pub mod encoding;
pub mod engine;
pub mod error;
pub mod hasher;
pub mod layout;
pub mod order;
pub mod salted;

pub use algorithm::DigestAlgorithm;
pub use encoding::encode_text;
pub use engine::{digest_bytes, digest_reader, digest_text};
pub use error::{Error, Result};
pub use hasher::{SaltedHasher, DEFAULT_STORED_SALT_LEN};
pub use layout::{combine, extract_hash, extract_salt, SaltStoreType};
pub use order::SaltOrder;
pub use salted::SaltedHash;
