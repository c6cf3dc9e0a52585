//! Password generation.

use std::fmt;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use zeroize::{Zeroize, Zeroizing};

use super::charset::ClassSet;
use crate::error::Result;

/// A validated generation request. Always has at least one class enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    classes: ClassSet,
    length: usize,
}

impl GenerationRequest {
    /// Returns `None` when no class is enabled. A length shorter than the
    /// number of enabled classes is raised to that number.
    pub fn new(classes: ClassSet, length: usize) -> Option<Self> {
        if classes.is_empty() {
            return None;
        }
        Some(Self {
            classes,
            length: length.max(classes.len()),
        })
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    /// Effective length, after the class-count correction.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(Zeroizing<String>);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeneratedPassword")
            .field(&format_args!("<{} chars>", self.len()))
            .finish()
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Seed a generator from the operating system. A seeding failure fails the
/// whole request instead of falling back to a weaker source.
pub fn seeded_rng() -> Result<StdRng> {
    Ok(StdRng::from_rng(OsRng)?)
}

/// Build one password for `request`.
///
/// One character of each enabled class is placed first, the remaining slots
/// are filled from classes picked uniformly at random, and the whole buffer
/// is then shuffled so the guaranteed characters can land anywhere.
pub fn build<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> GeneratedPassword {
    let classes: Vec<_> = request.classes.iter().collect();
    let mut buf: Vec<char> = Vec::with_capacity(request.length);

    log::debug!(
        "generating {} chars from {} classes",
        request.length,
        classes.len()
    );

    for class in &classes {
        buf.push(class.random_char(rng));
    }
    log::debug!("compulsory characters placed");

    for _ in classes.len()..request.length {
        let class = classes[rng.gen_range(0..classes.len())];
        buf.push(class.random_char(rng));
    }
    log::debug!("remaining characters placed");

    shuffle(&mut buf, rng);
    log::debug!("shuffle done");

    let pass: String = buf.iter().collect();
    buf.zeroize();
    GeneratedPassword(Zeroizing::new(pass))
}

/// Fisher-Yates: for i from last down to 1, swap i with a uniform index in
/// `[0, i]`.
#[inline]
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
