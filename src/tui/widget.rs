//! Widget state: settings, the displayed password, the strength indicator
//! and the transient copy message.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::error::Result;
use crate::pass::{self, CharacterClass, GeneratedPassword, StrengthLevel};
use crate::settings::Settings;

/// How long the copy message stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy)]
struct CopyNotice {
    text: &'static str,
    shown_at: Instant,
}

impl CopyNotice {
    fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < NOTICE_DURATION
    }
}

#[derive(Debug)]
pub struct Widget {
    pub settings: Settings,
    password: Option<GeneratedPassword>,
    strength: Option<StrengthLevel>,
    notice: Option<CopyNotice>,
}

impl Widget {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            password: None,
            strength: None,
            notice: None,
        }
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    /// `None` until the first successful generation.
    pub fn strength(&self) -> Option<StrengthLevel> {
        self.strength
    }

    pub fn notice(&self, now: Instant) -> Option<&'static str> {
        self.notice
            .filter(|notice| notice.is_visible(now))
            .map(|notice| notice.text)
    }

    /// Drop an expired copy message. Returns true if the screen needs a
    /// redraw.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        match self.notice {
            Some(notice) if !notice.is_visible(now) => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        let enabled = self.settings.toggle_class(class);
        log::debug!("{class:?} enabled={enabled}");
    }

    pub fn step_length(&mut self, delta: isize) {
        self.settings.step_length(delta);
    }

    /// Build a new password and rate it. Does nothing when no class is
    /// enabled. Returns whether a password was generated.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(request) = self.settings.request() else {
            log::debug!("generate ignored: no classes selected");
            return false;
        };

        self.settings.pass_length = request.length();
        self.password = Some(pass::build(&request, rng));
        self.strength = Some(pass::classify(request.classes(), request.length()));
        true
    }

    /// Copy the displayed password through `copier` and show the outcome.
    /// Does nothing when no password is displayed.
    pub fn copy_with<F>(&mut self, now: Instant, copier: F) -> bool
    where
        F: FnOnce(&str) -> Result<()>,
    {
        let Some(password) = self.password.as_ref().filter(|p| !p.is_empty()) else {
            return false;
        };

        let text = match copier(password.as_str()) {
            Ok(()) => "copied",
            Err(e) => {
                log::warn!("copy failed: {e}");
                "Failed"
            }
        };
        self.notice = Some(CopyNotice { text, shown_at: now });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pass::ClassSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn widget() -> Widget {
        Widget::new(Settings::default())
    }

    #[test]
    fn starts_with_grey_indicator_and_no_password() {
        let w = widget();
        assert!(w.password().is_none());
        assert!(w.strength().is_none());
        assert!(w.notice(Instant::now()).is_none());
    }

    #[test]
    fn generate_fills_password_and_strength() {
        let mut w = widget();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(w.generate(&mut rng));
        assert_eq!(w.password().unwrap().len(), 10);
        assert_eq!(w.strength(), Some(StrengthLevel::Strong));
    }

    #[test]
    fn generate_without_classes_is_noop() {
        let mut w = Widget::new(Settings {
            classes: ClassSet::empty(),
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(2);
        assert!(!w.generate(&mut rng));
        assert!(w.password().is_none());
        assert!(w.strength().is_none());
    }

    #[test]
    fn generate_keeps_previous_result_when_classes_cleared() {
        let mut w = widget();
        let mut rng = StdRng::seed_from_u64(3);
        w.generate(&mut rng);
        let before = w.password().unwrap().as_str().to_owned();

        for class in CharacterClass::ALL {
            w.toggle(class);
        }
        assert!(!w.generate(&mut rng));
        assert_eq!(w.password().unwrap().as_str(), before);
    }

    #[test]
    fn regenerate_replaces_password() {
        let mut w = widget();
        let mut rng = StdRng::seed_from_u64(4);
        w.generate(&mut rng);
        let first = w.password().unwrap().clone();
        w.generate(&mut rng);
        assert_ne!(w.password().unwrap(), &first);
    }

    #[test]
    fn strength_follows_selection() {
        let mut w = widget();
        let mut rng = StdRng::seed_from_u64(5);
        w.toggle(CharacterClass::Uppercase);
        w.toggle(CharacterClass::Symbol);
        w.generate(&mut rng);
        assert_eq!(w.strength(), Some(StrengthLevel::Medium));

        w.step_length(-10);
        w.generate(&mut rng);
        assert_eq!(w.settings.pass_length, 4);
        assert_eq!(w.strength(), Some(StrengthLevel::Weak));
    }

    #[test]
    fn copy_without_password_is_noop() {
        let mut w = widget();
        let mut called = false;
        let copied = w.copy_with(Instant::now(), |_| {
            called = true;
            Ok(())
        });
        assert!(!copied);
        assert!(!called);
        assert!(w.notice(Instant::now()).is_none());
    }

    #[test]
    fn copy_shows_message_for_two_seconds() {
        let mut w = widget();
        let mut rng = StdRng::seed_from_u64(6);
        w.generate(&mut rng);

        let expected = w.password().unwrap().as_str().to_owned();
        let now = Instant::now();
        assert!(w.copy_with(now, |text| {
            assert_eq!(text, expected);
            Ok(())
        }));

        assert_eq!(w.notice(now), Some("copied"));
        assert_eq!(w.notice(now + Duration::from_millis(1999)), Some("copied"));
        assert!(!w.expire_notice(now + Duration::from_millis(1999)));

        let later = now + NOTICE_DURATION;
        assert!(w.notice(later).is_none());
        assert!(w.expire_notice(later));
        assert!(!w.expire_notice(later));
    }

    #[test]
    fn failed_copy_reports_failure() {
        let mut w = widget();
        let mut rng = StdRng::seed_from_u64(7);
        w.generate(&mut rng);

        let now = Instant::now();
        w.copy_with(now, |_| Err(Error::Clipboard("no display".into())));
        assert_eq!(w.notice(now), Some("Failed"));
    }
}
