//! One-way password digests for protected vault files.

use sha2::{Digest, Sha256};

/// Compute the digest of a plaintext file password.
///
/// SHA-256 over the UTF-8 bytes, rendered as 64 lowercase hex characters.
/// Verification is plain string equality against the stored digest, with no
/// salt and no iteration count, so the algorithm must stay byte-for-byte
/// stable across releases: changing it invalidates every digest already
/// stored. Integrators wanting a salted, iterated KDF need a migration path
/// for existing rows first.
pub fn password_digest(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_64_lowercase_hex() {
        for input in ["", "secret", "1234", "päßwörd", "a very long passphrase indeed"] {
            let digest = password_digest(input);
            assert_eq!(digest.len(), 64);
            assert!(digest
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(password_digest("secret"), password_digest("secret"));
    }

    #[test]
    fn test_distinct_inputs_give_distinct_digests() {
        assert_ne!(password_digest("secret"), password_digest("Secret"));
        assert_ne!(password_digest("1234"), password_digest("12345"));
        assert_ne!(password_digest(""), password_digest(" "));
    }

    #[test]
    fn test_known_vectors() {
        // Stored digests predate this implementation; pin the algorithm.
        assert_eq!(
            password_digest("1234"),
            "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"
        );
        assert_eq!(
            password_digest("secret"),
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
    }
}
