//! Utilities for generating passwords.

use rand::{CryptoRng, Rng};

use crate::Secret;

static LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
static NUMBERS: &str = "0123456789";
static SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The set of characters a password is drawn from.
///
/// Characters are distinct, so each one is equally likely to be picked. An alphabet is never
/// empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// ASCII letters, digits and punctuation; the alphabet both front ends share.
    pub fn standard() -> Alphabet {
        Alphabet {
            chars: LETTERS
                .chars()
                .chain(NUMBERS.chars())
                .chain(SYMBOLS.chars())
                .collect(),
        }
    }

    /// Build an alphabet from arbitrary characters. Duplicates are dropped, keeping the first
    /// occurrence.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Alphabet, EmptyAlphabet> {
        let mut distinct = Vec::new();
        for ch in chars {
            if !distinct.contains(&ch) {
                distinct.push(ch);
            }
        }
        if distinct.is_empty() {
            return Err(EmptyAlphabet);
        }
        Ok(Alphabet { chars: distinct })
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Alphabet {
    fn default() -> Alphabet {
        Alphabet::standard()
    }
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("an alphabet needs at least one character")]
pub struct EmptyAlphabet;

/// Generate a simple, impossible-to-guess password by just randomly sampling the given alphabet.
///
/// Each character is drawn independently, with replacement. A `len` of zero gives an empty
/// password.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &Alphabet, len: usize) -> Secret
where
    R: Rng + CryptoRng,
{
    let mut secret = String::with_capacity(len);
    for _ in 0..len {
        // `Alphabet` is never empty, so the range is too.
        let idx = rng.gen_range(0..alphabet.chars.len());
        secret.push(alphabet.chars[idx]);
    }
    Secret::from(secret)
}

/// A password generator owning its source of randomness.
///
/// Pass in a seeded RNG (e.g. `StdRng::seed_from_u64`) for reproducible output.
pub struct PasswordSampler<R> {
    rng: R,
    alphabet: Alphabet,
}

impl<R: Rng + CryptoRng> PasswordSampler<R> {
    pub fn new(rng: R) -> PasswordSampler<R> {
        PasswordSampler::with_alphabet(rng, Alphabet::standard())
    }

    pub fn with_alphabet(rng: R, alphabet: Alphabet) -> PasswordSampler<R> {
        PasswordSampler { rng, alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn generate(&mut self, len: usize) -> Secret {
        generate_random_password(&mut self.rng, &self.alphabet, len)
    }
}
