//! Strong random password generation.

use rand::prelude::IndexedRandom;
use rand::rng;
use secrecy::SecretString;
use thiserror::Error;

/// Default generated password length.
pub const DEFAULT_LENGTH: usize = 16;

/// ASCII letters, digits and punctuation (94 symbols).
const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least 1")]
    ZeroLength,
}

/// Generates a password of `length` characters drawn uniformly from
/// [`ALPHABET`] with the thread-local CSPRNG.
pub fn generate_strong_password(length: usize) -> Result<SecretString, GeneratorError> {
    if length == 0 {
        return Err(GeneratorError::ZeroLength);
    }

    let mut rng = rng();
    let password: String = (0..length)
        .filter_map(|_| ALPHABET.choose(&mut rng).map(|&b| b as char))
        .collect();

    Ok(SecretString::new(password.into()))
}
