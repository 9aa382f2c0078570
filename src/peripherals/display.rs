//! Status text on the V5 Brain screen.
//!
//! The screen is diagnostic only: the active competition phase and a live telemetry value.
//! Lines are numbered from zero, eight to a screen.

use core::{ffi::CStr, fmt::Write as _};

use heapless::{String, Vec};
use log::{debug, warn};
use vexide::{
    color::Color,
    display::{Display, Font, FontFamily, FontSize, Text},
};

/// Number of text lines that fit on the screen.
pub const LINE_COUNT: usize = 8;

/// Characters per line. Shorter text is padded so it overwrites what was there before.
pub const LINE_WIDTH: usize = 40;

const LINE_HEIGHT: i16 = 28;
const MARGIN: i16 = 8;

/// A line-oriented text display.
pub trait StatusDisplay {
    /// Replaces the contents of `line` with `text`. Out-of-range lines are ignored.
    fn set_text(&mut self, line: usize, text: &str);
}

/// The Brain's built-in screen.
pub struct BrainScreen {
    display: Display,
    shown:   [String<LINE_WIDTH>; LINE_COUNT],
}

impl BrainScreen {
    /// Takes over the Brain screen.
    pub fn new(display: Display) -> Self {
        Self {
            display,
            shown: Default::default(),
        }
    }
}

impl StatusDisplay for BrainScreen {
    fn set_text(&mut self, line: usize, text: &str) {
        let Some(shown) = self.shown.get_mut(line) else {
            debug!("Display line {} out of range", line);
            return;
        };

        let mut fitted: String<LINE_WIDTH> = String::new();
        for c in text.chars().filter(|&c| c != '\0') {
            if fitted.push(c).is_err() {
                break;
            }
        }
        if *shown == fitted {
            return;
        }
        shown.clone_from(&fitted);

        let bytes = padded_line(&fitted);
        let text = match CStr::from_bytes_with_nul(&bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Display Text Error: {}", e);
                return;
            }
        };

        let y = MARGIN + LINE_HEIGHT * line as i16;
        self.display.draw_text(
            &Text::new(
                text,
                Font::new(FontSize::MEDIUM, FontFamily::Monospace),
                [MARGIN, y],
            ),
            Color::WHITE,
            Some(Color::BLACK),
        );
    }
}

/// Pads `text` with spaces to the full line width and appends the terminating NUL the screen
/// expects. `text` must not contain NUL itself.
fn padded_line(text: &str) -> Vec<u8, { LINE_WIDTH + 1 }> {
    let mut bytes = Vec::new();
    for &b in text.as_bytes().iter().take(LINE_WIDTH) {
        let _ = bytes.push(b);
    }
    while bytes.len() < LINE_WIDTH {
        let _ = bytes.push(b' ');
    }
    let _ = bytes.push(0);
    bytes
}

/// Formats a telemetry value such as `tilter vel: -76` into a screen line.
pub fn telemetry_line(label: &str, value: impl core::fmt::Display) -> String<LINE_WIDTH> {
    let mut line = String::new();
    // Text that does not fit is dropped.
    let _ = write!(line, "{}: {}", label, value);
    line
}

#[cfg(test)]
mod tests {
    use core::ffi::CStr;

    use super::{LINE_WIDTH, padded_line, telemetry_line};

    #[test]
    fn lines_are_padded_and_terminated() {
        let bytes = padded_line("tilter vel: -76");
        assert_eq!(bytes.len(), LINE_WIDTH + 1);

        let text = CStr::from_bytes_with_nul(&bytes).unwrap().to_str().unwrap();
        assert_eq!(text.trim_end(), "tilter vel: -76");
        assert_eq!(text.len(), LINE_WIDTH);
    }

    #[test]
    fn full_lines_still_fit_the_terminator() {
        let bytes = padded_line(&"y".repeat(LINE_WIDTH));
        assert_eq!(bytes.last(), Some(&0));
        assert!(CStr::from_bytes_with_nul(&bytes).is_ok());
    }

    #[test]
    fn telemetry_formats_label_and_value() {
        assert_eq!(telemetry_line("tilter vel", -76).as_str(), "tilter vel: -76");
    }

    #[test]
    fn telemetry_truncates_long_labels() {
        let label = "x".repeat(60);
        assert!(telemetry_line(&label, 1).len() <= LINE_WIDTH);
    }
}
