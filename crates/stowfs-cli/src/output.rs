//! Summary and hint lines printed after a pack run.
//!
//! Color is off when `NO_COLOR` is set, otherwise `--color` decides and
//! `auto` follows whether stdout is a terminal.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Map the `--color` value to a `ColorChoice`; `NO_COLOR` always wins.
pub fn resolve_color_choice(flag: Option<&str>) -> ColorChoice {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    match flag {
        _ if no_color => ColorChoice::Never,
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        Some(_) | None => ColorChoice::Auto,
    }
}

/// Styled writer on stdout.
pub struct StyledOutput {
    stdout: StandardStream,
}

impl StyledOutput {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_styled(&mut self, text: &str, color: Option<Color>, bold: bool) {
        let mut spec = ColorSpec::new();
        spec.set_fg(color).set_bold(bold);
        let _ = self.stdout.set_color(&spec);
        let _ = write!(self.stdout, "{}", text);
        let _ = self.stdout.reset();
    }

    /// Green bold text.
    pub fn success(&mut self, text: &str) {
        self.write_styled(text, Some(Color::Green), true);
    }

    /// Yellow bold text.
    pub fn warning(&mut self, text: &str) {
        self.write_styled(text, Some(Color::Yellow), true);
    }

    /// Plain text followed by a newline.
    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.stdout, "{}", text);
    }

    pub fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}
