//! Random Password Generation.
//!
//! Generated passwords always contain at least one uppercase letter, one
//! lowercase letter, one digit and one special character; the remaining
//! positions are drawn from the union of all four classes and the result is
//! shuffled so the guaranteed characters do not sit at fixed positions.
//!
//! Because of that guarantee a password is never shorter than
//! [`MIN_PASSWORD_LENGTH`], whatever length is requested.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::PasswordConfig;

/// Length used when none is given.
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// One character from each class.
pub const MIN_PASSWORD_LENGTH: usize = 4;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

fn pick<R: Rng + ?Sized>(rng: &mut R, class: &[u8]) -> u8 {
    class[rng.gen_range(0..class.len())]
}

/// Generates passwords of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordGenerator {
    length: usize,
}

impl PasswordGenerator {
    /// Creates a generator for `length`-character passwords.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Creates a generator using the configured default length.
    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.default_length)
    }

    /// The length of the passwords this generator produces.
    pub fn length(&self) -> usize {
        self.length.max(MIN_PASSWORD_LENGTH)
    }

    /// Generates a password using the thread-local RNG.
    pub fn generate(&self) -> String {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generates a password from the given RNG, for reproducible output.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL].concat();

        let mut chars = Vec::with_capacity(self.length());
        chars.push(pick(rng, UPPERCASE));
        chars.push(pick(rng, LOWERCASE));
        chars.push(pick(rng, DIGITS));
        chars.push(pick(rng, SPECIAL));
        while chars.len() < self.length {
            chars.push(pick(rng, &all));
        }

        chars.shuffle(rng);
        chars.into_iter().map(char::from).collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_LENGTH)
    }
}

/// Generates a password of `length` characters (default 8).
///
/// # Examples
/// ```
/// use utilbelt_core::utils::password::generate_password;
///
/// let password = generate_password(Some(16));
/// assert_eq!(password.len(), 16);
/// assert!(password.chars().any(|c| c.is_ascii_digit()));
/// ```
pub fn generate_password(length: Option<usize>) -> String {
    PasswordGenerator::new(length.unwrap_or(DEFAULT_PASSWORD_LENGTH)).generate()
}
