//! Password construction and strength rating.

pub mod charset;
mod generate;
mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{GeneratedPassword, GenerationRequest, build, seeded_rng, shuffle};
pub use strength::{StrengthLevel, classify};
