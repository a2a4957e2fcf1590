use rand::seq::SliceRandom;

use crate::error::{EmptyDictionary, GenerationError};
use crate::words;

/// Separator joining the two name segments.
pub const SEPARATOR: char = '-';

/// Uniform random `adjective-animal` name source.
///
/// Holds the dictionaries it samples from; [`Default`] uses the built-in word
/// lists. Generation has no side effects and touches no shared mutable state,
/// so sequential calls are independent.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    adjectives: &'static [&'static str],
    animals: &'static [&'static str],
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new(words::ADJECTIVES, words::ANIMALS)
    }
}

impl NameGenerator {
    /// Creates a generator over custom dictionaries.
    pub fn new(adjectives: &'static [&'static str], animals: &'static [&'static str]) -> Self {
        Self {
            adjectives,
            animals,
        }
    }

    /// Generates a random name of the form `adjective-animal`.
    ///
    /// Each segment is drawn uniformly at random from its dictionary. Fails
    /// only when a dictionary is empty; the cause is preserved on the
    /// returned error.
    pub fn generate(&self) -> Result<String, GenerationError> {
        let adjective = pick(self.adjectives)?;
        let animal = pick(self.animals)?;
        Ok(format!("{adjective}{SEPARATOR}{animal}"))
    }
}

fn pick(dictionary: &[&'static str]) -> Result<&'static str, EmptyDictionary> {
    dictionary
        .choose(&mut rand::thread_rng())
        .copied()
        .ok_or(EmptyDictionary)
}
