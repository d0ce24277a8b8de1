//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            print!("{}", self.styled(markdown));
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Applies the skin line by line. Fenced blocks are printed verbatim,
    /// without their fence lines.
    fn styled(&self, markdown: &str) -> String {
        let mut out = String::with_capacity(markdown.len());
        let mut in_fence = false;
        for line in markdown.lines() {
            if line.starts_with("```") {
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                out.push_str(line);
            } else if line.starts_with('#') {
                out.push_str(&format!("\x1b[34m{line}\x1b[0m"));
            } else {
                out.push_str(&self.skin.inline(line).to_string());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
