use std::fmt::{Display, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// One of the three groups every password draws a character from.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum CharacterClass {
    Letters,
    Digits,
    Punctuation,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Punctuation,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharacterClass::Letters => LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Punctuation => PUNCTUATION,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }
}

impl Display for CharacterClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CharacterClass::Letters => "letters",
                CharacterClass::Digits => "digits",
                CharacterClass::Punctuation => "punctuation",
            }
        )
    }
}

/// Pool of distinct characters to draw from. Shrinks only through `exclude`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Letters, digits, and punctuation: 94 characters.
    pub fn base() -> Self {
        CharacterSet {
            chars: CharacterClass::ALL
                .iter()
                .flat_map(|class| class.chars().chars())
                .collect(),
        }
    }

    pub fn from_class(class: CharacterClass) -> Self {
        CharacterSet {
            chars: class.chars().chars().collect(),
        }
    }

    /// Drops every character in `chars`. Characters not in the set are ignored.
    pub fn exclude<I>(&mut self, chars: I)
    where
        I: IntoIterator<Item = char>,
    {
        let excluded: Vec<char> = chars.into_iter().collect();
        self.chars.retain(|c| !excluded.contains(c));
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Uniform draw, `None` on an empty set.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
        self.chars.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_class_sizes() {
        assert_eq!(CharacterClass::Letters.chars().len(), 52);
        assert_eq!(CharacterClass::Digits.chars().len(), 10);
        assert_eq!(CharacterClass::Punctuation.chars().len(), 32);
        assert!(CharacterClass::Punctuation.chars().chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_class_contains() {
        assert!(CharacterClass::Letters.contains('q'));
        assert!(CharacterClass::Letters.contains('Q'));
        assert!(CharacterClass::Digits.contains('7'));
        assert!(CharacterClass::Punctuation.contains('\\'));
        assert!(
            !CharacterClass::ALL.iter().any(|class| class.contains(' ') || class.contains('é')),
            "space and non-ascii are in no class"
        );
    }

    #[test]
    fn test_base_set() {
        let set = CharacterSet::base();
        assert_eq!(set.len(), 94);
        let unique: HashSet<char> = set.as_slice().iter().copied().collect();
        assert_eq!(unique.len(), 94, "no duplicates");
    }

    #[test]
    fn test_exclude() {
        let mut set = CharacterSet::base();
        set.exclude("abc".chars());
        assert_eq!(set.len(), 91);
        assert!(!set.as_slice().contains(&'a'));
        assert!(set.as_slice().contains(&'d'));

        set.exclude("aaa é".chars());
        assert_eq!(set.len(), 91, "missing characters are a no-op");

        set.exclude(CharacterClass::Letters.chars().chars());
        set.exclude(CharacterClass::Digits.chars().chars());
        assert_eq!(set, CharacterSet::from_class(CharacterClass::Punctuation));
    }

    #[test]
    fn test_choose() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = CharacterSet::from_class(CharacterClass::Digits);
        for _ in 0..100 {
            let c = set.choose(&mut rng).unwrap();
            assert!(c.is_ascii_digit());
        }

        let mut empty = CharacterSet::from_class(CharacterClass::Digits);
        empty.exclude(DIGITS.chars());
        assert!(empty.is_empty());
        assert_eq!(empty.choose(&mut rng), None);
    }
}
