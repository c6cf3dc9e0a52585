//! Coarse strength rating from class diversity and length.

use std::fmt;

use super::charset::{CharacterClass, ClassSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Medium => write!(f, "Medium"),
            StrengthLevel::Strong => write!(f, "Strong"),
        }
    }
}

/// Rate a class selection at a given length. First matching rule wins:
/// Strong needs both letter cases plus a digit or symbol at 8+, Medium
/// needs any letter plus a digit or symbol at 6+, everything else is Weak.
pub fn classify(classes: ClassSet, length: usize) -> StrengthLevel {
    let has_upper = classes.contains(CharacterClass::Uppercase);
    let has_lower = classes.contains(CharacterClass::Lowercase);
    let has_num = classes.contains(CharacterClass::Digit);
    let has_sym = classes.contains(CharacterClass::Symbol);

    if has_upper && has_lower && (has_num || has_sym) && length >= 8 {
        StrengthLevel::Strong
    } else if (has_lower || has_upper) && (has_num || has_sym) && length >= 6 {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharacterClass::*;

    fn set(classes: &[CharacterClass]) -> ClassSet {
        classes.iter().copied().collect()
    }

    #[test]
    fn reference_cases() {
        assert_eq!(classify(set(&[Uppercase, Lowercase, Digit]), 10), StrengthLevel::Strong);
        assert_eq!(classify(set(&[Lowercase, Digit]), 6), StrengthLevel::Medium);
        assert_eq!(classify(set(&[Lowercase]), 4), StrengthLevel::Weak);
        assert_eq!(classify(ClassSet::empty(), 20), StrengthLevel::Weak);
    }

    #[test]
    fn strong_length_boundary() {
        let classes = set(&[Uppercase, Lowercase, Symbol]);
        assert_eq!(classify(classes, 8), StrengthLevel::Strong);
        assert_eq!(classify(classes, 7), StrengthLevel::Medium);
        assert_eq!(classify(classes, 5), StrengthLevel::Weak);
    }

    #[test]
    fn medium_length_boundary() {
        let classes = set(&[Uppercase, Symbol]);
        assert_eq!(classify(classes, 6), StrengthLevel::Medium);
        assert_eq!(classify(classes, 5), StrengthLevel::Weak);
        assert_eq!(classify(classes, 20), StrengthLevel::Medium);
    }

    #[test]
    fn letters_alone_are_weak() {
        assert_eq!(classify(set(&[Uppercase, Lowercase]), 20), StrengthLevel::Weak);
    }

    #[test]
    fn no_letters_is_weak() {
        assert_eq!(classify(set(&[Digit, Symbol]), 20), StrengthLevel::Weak);
    }

    #[test]
    fn all_classes() {
        assert_eq!(classify(ClassSet::all(), 4), StrengthLevel::Weak);
        assert_eq!(classify(ClassSet::all(), 6), StrengthLevel::Medium);
        assert_eq!(classify(ClassSet::all(), 8), StrengthLevel::Strong);
    }

    #[test]
    fn repeated_calls_agree() {
        for mask in 0u8..16 {
            let classes: ClassSet = CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect();
            for length in 0..=24 {
                let first = classify(classes, length);
                assert!((0..5).all(|_| classify(classes, length) == first));
            }
        }
    }

    #[test]
    fn levels_are_ordered() {
        assert!(StrengthLevel::Weak < StrengthLevel::Medium);
        assert!(StrengthLevel::Medium < StrengthLevel::Strong);
        assert_eq!(StrengthLevel::Medium.to_string(), "Medium");
    }
}
