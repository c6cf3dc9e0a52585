//! Generation settings. The only mutable state in the program; the
//! interactive widget and the CLI each own one.

use crate::pass::{CharacterClass, ClassSet, GenerationRequest};

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub classes: ClassSet,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
}

impl Settings {
    /// Move the slider to `length`, clamped to its bounds and raised to the
    /// number of enabled classes.
    pub fn set_length(&mut self, length: usize) {
        self.pass_length = length.clamp(self.min_length, self.max_length);
        self.raise_to_class_count();
    }

    /// Move the slider one notch. Negative steps go left.
    pub fn step_length(&mut self, delta: isize) {
        let target = self.pass_length.saturating_add_signed(delta);
        self.set_length(target);
    }

    /// Flip a checkbox. Returns whether the class is now enabled.
    pub fn toggle_class(&mut self, class: CharacterClass) -> bool {
        let enabled = self.classes.toggle(class);
        self.raise_to_class_count();
        enabled
    }

    /// Number of filled cells when the slider is drawn `width` cells wide.
    pub fn slider_fill(&self, width: usize) -> usize {
        let span = self.max_length.saturating_sub(self.min_length);
        if span == 0 {
            return width;
        }
        let offset = self
            .pass_length
            .clamp(self.min_length, self.max_length)
            - self.min_length;
        offset * width / span
    }

    /// `None` when no class is enabled.
    pub fn request(&self) -> Option<GenerationRequest> {
        GenerationRequest::new(self.classes, self.pass_length)
    }

    fn raise_to_class_count(&mut self) {
        let count = self.classes.len();
        if self.pass_length < count {
            log::debug!("length {} raised to {}", self.pass_length, count);
            self.pass_length = count;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 10,
            min_length: 4,
            max_length: 20,
            classes: ClassSet::all(),
            number_of_passwords: 1,
            to_clipboard: false,
        }
    }
}
