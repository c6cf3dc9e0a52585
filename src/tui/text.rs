use std::time::Instant;

use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, GREEN, RESET, box_bottom, box_line, box_line_center, box_opt, box_top,
    console_width, flush, print_rule, slider_bar, strength_color,
};

use super::Widget;

const SLIDER_WIDTH: usize = BOX_WIDTH - 4;

/// Password row, with the copy message right-aligned when visible.
fn password_row(widget: &Widget, now: Instant) -> String {
    let pass = match widget.password() {
        Some(p) => format!("{BOLD}{}{RESET}", p.as_str()),
        None => format!("{DIM}Password{RESET}"),
    };

    match widget.notice(now) {
        Some(msg) => {
            let tag = format!("{GREEN}{msg}{RESET}");
            let gap = (BOX_WIDTH - 4)
                .saturating_sub(console_width(&pass) + console_width(&tag))
                .max(1);
            format!("{pass}{}{tag}", " ".repeat(gap))
        }
        None => pass,
    }
}

fn length_row(widget: &Widget) -> String {
    let label = "Password Length";
    let value = widget.settings.pass_length.to_string();
    let gap = (BOX_WIDTH - 4).saturating_sub(label.len() + value.len());
    format!("{label}{}{BOLD}{value}{RESET}", " ".repeat(gap))
}

fn strength_row(widget: &Widget) -> String {
    let color = strength_color(widget.strength());
    let label = widget
        .strength()
        .map(|level| level.to_string())
        .unwrap_or_default();
    let swatch = format!("{color}●{RESET} {color}{label}{RESET}");
    let gap = (BOX_WIDTH - 4).saturating_sub("Strength".len() + console_width(&swatch));
    format!("Strength{}{swatch}", " ".repeat(gap))
}

/// Draw the whole widget. Assumes the screen was just cleared.
pub fn draw(widget: &Widget, now: Instant) {
    box_top("Password Generator");
    box_line(&password_row(widget, now));
    print_rule();
    box_line(&length_row(widget));
    box_line(&slider_bar(
        widget.settings.slider_fill(SLIDER_WIDTH),
        SLIDER_WIDTH,
    ));
    box_line("");

    for (i, class) in crate::pass::CharacterClass::ALL.into_iter().enumerate() {
        let mark = if widget.settings.classes.contains(class) {
            format!("{GREEN}[x]{RESET}")
        } else {
            "[ ]".to_string()
        };
        box_line(&format!("{mark} {}) {}", i + 1, class.label()));
    }
    if widget.settings.classes.is_empty() {
        box_line(&format!("{DIM}Select at least one character set{RESET}"));
    }

    box_line("");
    box_line(&strength_row(widget));
    print_rule();
    box_line_center("GENERATE PASSWORD [Enter]");
    box_bottom();
    print!("\r\n");
    print_keys();
    flush();
}

fn print_keys() {
    box_top("Keys");
    box_opt("1-4", "Toggle character sets");
    box_opt("<- / ->", "Adjust length");
    box_opt("Enter, g", "Generate password");
    box_opt("c", "Copy to clipboard");
    box_opt("q, Esc", "Quit");
    box_bottom();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rows_fit_inside_box() {
        let mut w = Widget::new(Settings::default());
        let now = Instant::now();
        assert!(console_width(&password_row(&w, now)) <= BOX_WIDTH - 4);
        assert!(console_width(&length_row(&w)) <= BOX_WIDTH - 4);
        assert!(console_width(&strength_row(&w)) <= BOX_WIDTH - 4);

        w.settings.set_length(20);
        w.generate(&mut StdRng::seed_from_u64(1));
        w.copy_with(now, |_| Ok(()));
        let row = password_row(&w, now);
        assert_eq!(console_width(&row), BOX_WIDTH - 4);
        assert!(row.contains("copied"));
    }

    #[test]
    fn placeholder_before_generation() {
        let w = Widget::new(Settings::default());
        assert!(password_row(&w, Instant::now()).contains("Password"));
        assert!(!strength_row(&w).contains("Weak"));
    }
}
