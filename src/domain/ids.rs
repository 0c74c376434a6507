//! Run identifiers
//!
//! Short, human-legible identifiers used to tell concurrent runs apart.
//! They are drawn from `rand`'s thread-local generator and are NOT suitable
//! as security tokens.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default length of a generated run identifier
pub const DEFAULT_ID_LENGTH: usize = 6;

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// 36^12 fits in a u64
const MAX_CHUNK_DIGITS: usize = 12;

/// Generates a lowercase base-36 identifier of exactly `length` characters
///
/// Each chunk of up to twelve digits comes from a random value in
/// `0..36^digits`, base-36 encoded and left-padded with `0`.
///
/// # Examples
///
/// ```
/// use setup_vars::domain::ids::generate_id;
///
/// let id = generate_id(6);
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut id = String::with_capacity(length);

    while id.len() < length {
        let digits = (length - id.len()).min(MAX_CHUNK_DIGITS);
        let upper = 36u64.pow(digits as u32);
        let value = rng.gen_range(0..upper);
        id.push_str(&encode_base36(value, digits));
    }

    id
}

/// Encodes `value` in base 36, left-padded with `0` to `width` digits
fn encode_base36(mut value: u64, width: usize) -> String {
    let mut digits = vec![b'0'; width];
    for slot in digits.iter_mut().rev() {
        *slot = ID_ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    digits.into_iter().map(char::from).collect()
}

/// Run identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use setup_vars::domain::ids::RunId;
///
/// let supplied = RunId::from_optional(Some("nightly-42"), 6);
/// assert_eq!(supplied.as_str(), "nightly-42");
///
/// let generated = RunId::from_optional(Some(""), 6);
/// assert_eq!(generated.as_str().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Generates a fresh run identifier of the given length
    pub fn generate(length: usize) -> Self {
        Self(generate_id(length))
    }

    /// Uses the supplied identifier, or generates one when it is absent or empty
    pub fn from_optional(run_id: Option<&str>, length: usize) -> Self {
        match run_id {
            Some(id) if !id.is_empty() => Self(id.to_string()),
            _ => Self::generate(length),
        }
    }

    /// Returns the run ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RunId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
