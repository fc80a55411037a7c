//! Digest computation entry points over byte, text, and stream sources.

use std::io::Read;

use crate::algorithm::DigestAlgorithm;
use crate::encoding::encode_text;
use crate::error::Result;
use crate::salted::SaltedHash;

const STREAM_BUF_LEN: usize = 8 * 1024;

/// Compute the digest of `data` and return the live state as a [`SaltedHash`].
///
/// The hash function instance inside the returned value is reset and ready to
/// accept salt material.
#[tracing::instrument(skip(data), fields(data_len = data.len(), alg = ?algorithm))]
pub fn digest_bytes(algorithm: DigestAlgorithm, data: &[u8]) -> SaltedHash {
    let mut hasher = algorithm.hasher();
    hasher.update(data);
    let bytes = hasher.finalize_reset().into_vec();
    SaltedHash::new(algorithm, hasher, bytes)
}

/// Compute the digest of `text` encoded with the encoding named by
/// `encoding_label`.
#[tracing::instrument(skip(text), fields(text_len = text.len(), alg = ?algorithm))]
pub fn digest_text(algorithm: DigestAlgorithm, text: &str, encoding_label: &str) -> Result<SaltedHash> {
    let data = encode_text(text, encoding_label)?;
    Ok(digest_bytes(algorithm, &data))
}

/// Compute the digest of everything `reader` yields, feeding the hash function
/// incrementally.
///
/// The reader is taken by value and dropped before this function returns, on
/// success and on error alike. Read failures surface as [`Error::Io`](crate::Error::Io).
#[tracing::instrument(skip(reader), fields(alg = ?algorithm))]
pub fn digest_reader<R: Read>(algorithm: DigestAlgorithm, mut reader: R) -> Result<SaltedHash> {
    let mut hasher = algorithm.hasher();
    let mut buf = [0u8; STREAM_BUF_LEN];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let bytes = hasher.finalize_reset().into_vec();
    Ok(SaltedHash::new(algorithm, hasher, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{self, Cursor};

    #[test]
    fn digest_is_deterministic_across_algorithms() {
        for alg in [
            DigestAlgorithm::Md5,
            DigestAlgorithm::Sha1,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha512,
        ] {
            let a = digest_bytes(alg, b"same input");
            let b = digest_bytes(alg, b"same input");
            assert_eq!(a.bytes(), b.bytes());
            assert_eq!(a.len(), alg.output_len());
        }
    }

    #[test]
    fn reader_source_equals_byte_source() {
        let data = vec![7u8; 3 * STREAM_BUF_LEN + 11];
        let from_reader = digest_reader(DigestAlgorithm::Sha256, Cursor::new(data.clone())).unwrap();
        let from_bytes = digest_bytes(DigestAlgorithm::Sha256, &data);
        assert_eq!(from_reader.bytes(), from_bytes.bytes());
    }

    #[test]
    fn text_source_equals_encoded_bytes() {
        let from_text = digest_text(DigestAlgorithm::Sha1, "grüße", "UTF-8").unwrap();
        let from_bytes = digest_bytes(DigestAlgorithm::Sha1, "grüße".as_bytes());
        assert_eq!(from_text.bytes(), from_bytes.bytes());
    }

    #[test]
    fn unknown_encoding_fails_digest_text() {
        let err = digest_text(DigestAlgorithm::Sha1, "abc", "klingon").unwrap_err();
        assert!(matches!(err, Error::UnsupportedEncoding(_)));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream broke"))
        }
    }

    #[test]
    fn read_failure_surfaces_as_io_error() {
        let err = digest_reader(DigestAlgorithm::Md5, FailingReader).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
