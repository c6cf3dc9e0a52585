//! Character classes and the set of classes enabled for a request.

use rand::Rng;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"~`!@#$%^&*()_-+={[}]|:;\"<,>.?/";

/// A named category of characters with its own alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes in checkbox order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Every character this class can produce.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            // Full 0-9, '9' included.
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Draw one character uniformly from this class.
    #[inline]
    pub fn random_char<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        let alphabet = self.alphabet();
        alphabet[rng.gen_range(0..alphabet.len())] as char
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Include Uppercase Letters",
            CharacterClass::Lowercase => "Include Lowercase Letters",
            CharacterClass::Digit => "Include Numbers",
            CharacterClass::Symbol => "Include Symbols",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            CharacterClass::Uppercase => 1 << 0,
            CharacterClass::Lowercase => 1 << 1,
            CharacterClass::Digit => 1 << 2,
            CharacterClass::Symbol => 1 << 3,
        }
    }
}

/// Set of enabled classes. Iterates in checkbox order regardless of
/// insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    /// Flip membership of `class`, returning whether it is now enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.0 ^= class.bit();
        self.contains(class)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&class| self.contains(class))
    }

    /// Whether `c` belongs to the alphabet of any enabled class.
    pub fn allows(self, c: char) -> bool {
        self.iter().any(|class| class.contains(c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}
