//! Terminal output for plan markdown.
//!
//! Rich output styles headers and task-status lines with termimad; plain
//! output writes the markdown exactly as the core crate formats it, which
//! keeps it stable for scripts and tests.

use std::fmt::Display;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Colour applied to a task line, keyed by its status icon.
fn status_color(line: &str) -> Option<Color> {
    let item = line.trim_start().strip_prefix("- ")?;
    match item.chars().next()? {
        '✓' => Some(Color::Green),
        '➤' => Some(Color::Yellow),
        '⤼' => Some(Color::DarkGrey),
        _ => None,
    }
}

/// Renders markdown either through a termimad skin or verbatim.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::AnsiValue(244));
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// Formats any displayable value and renders the resulting markdown.
    pub fn render_display<T: Display + ?Sized>(&self, value: &T) -> Result<()> {
        self.render(&value.to_string())
    }

    /// Renders markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Keep the hashes so plan and phase levels stay distinguishable
                println!("\x1b[1;32m{line}\x1b[0m");
                continue;
            }

            match status_color(line) {
                Some(color) => {
                    let mut skin = self.skin.clone();
                    skin.paragraph.set_fg(color);
                    skin.print_inline(line);
                }
                None => self.skin.print_inline(line),
            }
            println!();
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
