//! Interactive password widget.

mod input;
mod text;
mod widget;

use std::time::{Duration, Instant};

pub use input::{Action, next_action};
pub use text::draw;
pub use widget::Widget;

use crate::clipboard;
use crate::error::Result;
use crate::pass;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, reset_terminal};

/// Poll interval; bounds how late an expired copy message disappears.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the widget until the user quits.
pub fn run() -> Result<()> {
    let mut rng = pass::seeded_rng()?;
    let mut widget = Widget::new(Settings::default());

    reset_terminal();
    let mut guard = RawModeGuard::new()?;
    redraw(&widget);

    loop {
        let Some(action) = next_action(POLL_INTERVAL)? else {
            if widget.expire_notice(Instant::now()) {
                redraw(&widget);
            }
            continue;
        };

        match action {
            Action::Toggle(class) => widget.toggle(class),
            Action::Step(delta) => widget.step_length(delta),
            Action::Generate => {
                widget.generate(&mut rng);
            }
            Action::Copy => {
                widget.copy_with(Instant::now(), clipboard::copy);
            }
            Action::Redraw => {}
            Action::Quit => break,
        }
        widget.expire_notice(Instant::now());
        redraw(&widget);
    }

    guard.release();
    clear();
    Ok(())
}

fn redraw(widget: &Widget) {
    clear();
    draw(widget, Instant::now());
}
