//! Short code generation.

use rand::Rng;

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// The 62-character alphanumeric alphabet codes are sampled from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random 6-character short code.
///
/// Each character is sampled uniformly (with replacement) from the
/// alphanumeric alphabet, giving a keyspace of 62^6. Uniqueness against
/// stored codes is the caller's concern — see
/// [`crate::application::services::LinkService`].
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 1000 draws from a 62^6 keyspace; a collision here means the
        // sampling is broken, not unlucky.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_full_alphabet_classes() {
        let mut has_lower = false;
        let mut has_upper = false;
        let mut has_digit = false;

        for _ in 0..500 {
            for c in generate_code().chars() {
                has_lower |= c.is_ascii_lowercase();
                has_upper |= c.is_ascii_uppercase();
                has_digit |= c.is_ascii_digit();
            }
        }

        assert!(has_lower);
        assert!(has_upper);
        assert!(has_digit);
    }
}
