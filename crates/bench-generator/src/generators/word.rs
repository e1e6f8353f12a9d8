//! Short pronounceable word generator.
//!
//! Words are built from one to three syllables. A syllable is a consonant
//! followed by a vowel, optionally closed by a second consonant, which keeps
//! every word between 2 and 9 lowercase ASCII letters.

use bench_core::Value;
use rand::Rng;

const CONSONANTS: &[u8] = b"bcdfghjklmnprstvwz";
const VOWELS: &[u8] = b"aeiou";

/// Fewest syllables in a generated word.
pub const MIN_SYLLABLES: usize = 1;
/// Most syllables in a generated word.
pub const MAX_SYLLABLES: usize = 3;

/// Generate a random short word.
pub fn generate_word<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let syllables = rng.random_range(MIN_SYLLABLES..=MAX_SYLLABLES);
    let mut word = String::with_capacity(syllables * 3);

    for _ in 0..syllables {
        word.push(pick(rng, CONSONANTS));
        word.push(pick(rng, VOWELS));
        if rng.random_bool(0.3) {
            word.push(pick(rng, CONSONANTS));
        }
    }

    Value::Text(word)
}

fn pick<R: Rng + ?Sized>(rng: &mut R, letters: &[u8]) -> char {
    letters[rng.random_range(0..letters.len())] as char
}
