use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use log::{debug, warn};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::charset::{CharacterClass, CharacterSet};
use crate::error::GenerateError;

/// One mandatory character per class.
pub const MANDATORY: usize = CharacterClass::ALL.len();

/// Longest password `validate` accepts.
pub const MAX_LENGTH: usize = 4096;

/// Everything one `generate` call needs. Built up front, never mutated by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub exclude: BTreeSet<char>,
    pub unique: bool,
    /// Draw the mandatory letter, digit, and punctuation character from the
    /// filtered classes too. Off by default: mandatory characters ignore `exclude`.
    pub strict_exclusions: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            min_length: 10,
            max_length: 76,
            exclude: BTreeSet::new(),
            unique: true,
            strict_exclusions: false,
        }
    }
}

impl GenerationConfig {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        GenerationConfig {
            min_length,
            max_length,
            ..Default::default()
        }
    }

    pub fn excluding(mut self, chars: &str) -> Self {
        self.exclude.extend(chars.chars());
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn strict_exclusions(mut self, strict: bool) -> Self {
        self.strict_exclusions = strict;
        self
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.min_length > self.max_length {
            return Err(GenerateError::InvalidRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.min_length < MANDATORY {
            return Err(GenerateError::TooShort {
                length: self.min_length,
            });
        }
        if self.max_length > MAX_LENGTH {
            return Err(GenerateError::TooLong {
                length: self.max_length,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }
}

/// A finished password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters. Every character is ASCII, so this is also the byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct PasswordGenerator<R> {
    rng: R,
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn new(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate(&mut self, config: &GenerationConfig) -> Result<Password, GenerateError> {
        config.validate()?;

        let mut set = CharacterSet::base();
        set.exclude(config.exclude.iter().copied());
        let pools = mandatory_pools(config)?;

        let length = if config.min_length == config.max_length {
            config.min_length
        } else {
            self.rng.gen_range(config.min_length..=config.max_length)
        };
        debug!("target length {}, {} characters available", length, set.len());

        if config.unique && set.len() < length {
            return Err(GenerateError::InsufficientUniqueCharacters {
                requested: length,
                available: set.len(),
            });
        }
        if !config.unique && set.is_empty() && length > MANDATORY {
            return Err(GenerateError::EmptyCharacterSet);
        }

        let mut chars = Vec::with_capacity(length);
        for (class, pool) in CharacterClass::ALL.iter().zip(&pools) {
            let c = pool
                .choose(&mut self.rng)
                .ok_or(GenerateError::EmptyClass(*class))?;
            if config.exclude.contains(&c) {
                warn!("an excluded character was used as the mandatory {} character", class);
            }
            chars.push(c);
        }

        let remaining = length - MANDATORY;
        if config.unique {
            let candidates: Vec<char> = set
                .as_slice()
                .iter()
                .copied()
                .filter(|c| !chars.contains(c))
                .collect();
            chars.extend(candidates.choose_multiple(&mut self.rng, remaining).copied());
        } else {
            for _ in 0..remaining {
                let c = set
                    .choose(&mut self.rng)
                    .ok_or(GenerateError::EmptyCharacterSet)?;
                chars.push(c);
            }
        }

        chars.shuffle(&mut self.rng);
        Ok(Password(chars.into_iter().collect()))
    }
}

/// One pool per class for the mandatory draws.
fn mandatory_pools(config: &GenerationConfig) -> Result<Vec<CharacterSet>, GenerateError> {
    CharacterClass::ALL
        .iter()
        .map(|&class| {
            let mut pool = CharacterSet::from_class(class);
            if config.strict_exclusions {
                pool.exclude(config.exclude.iter().copied());
                if pool.is_empty() {
                    return Err(GenerateError::EmptyClass(class));
                }
            }
            Ok(pool)
        })
        .collect()
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        PasswordGenerator::new(rand::thread_rng())
    }
}

/// Generate with the thread-local random source.
pub fn generate(config: &GenerationConfig) -> Result<Password, GenerateError> {
    PasswordGenerator::default().generate(config)
}
