//! Renderable output and format providers.
//!
//! The tree never inspects a [`Component`]; it only carries it from a leaf
//! back to the host, which turns it into text with a [`FormatProvider`].

use std::fmt;

use crossterm::style::{style, Color, Stylize};

/// Semantic role of a span. Format providers map tones to colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Main,
    Accent,
    Muted,
    Error,
}

/// A run of text with one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

/// One line of output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.spans.push(Span {
            text: text.into(),
            tone,
        });
        self
    }

    pub fn main(self, text: impl Into<String>) -> Self {
        self.span(text, Tone::Main)
    }

    pub fn accent(self, text: impl Into<String>) -> Self {
        self.span(text, Tone::Accent)
    }

    pub fn muted(self, text: impl Into<String>) -> Self {
        self.span(text, Tone::Muted)
    }

    pub fn error(self, text: impl Into<String>) -> Self {
        self.span(text, Tone::Error)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

/// Styled multi-line text produced by a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    pub lines: Vec<Line>,
}

impl Component {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single line of plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().line(Line::new().main(text))
    }

    pub fn line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.spans.is_empty())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Turns a component into text the host can display.
pub trait FormatProvider: Send + Sync {
    fn format(&self, component: &Component) -> String;
}

/// No styling at all; tones are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormat;

impl FormatProvider for PlainFormat {
    fn format(&self, component: &Component) -> String {
        component.to_string()
    }
}

/// ANSI terminal colours.
#[derive(Debug, Clone, Copy)]
pub struct AnsiFormat {
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

impl Default for AnsiFormat {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGrey,
            error: Color::Red,
        }
    }
}

impl FormatProvider for AnsiFormat {
    fn format(&self, component: &Component) -> String {
        let mut out = String::new();
        for (i, line) in component.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for span in &line.spans {
                let text = span.text.as_str();
                let styled = match span.tone {
                    Tone::Main => text.to_string(),
                    Tone::Accent => style(text).with(self.accent).bold().to_string(),
                    Tone::Muted => style(text).with(self.muted).to_string(),
                    Tone::Error => style(text).with(self.error).to_string(),
                };
                out.push_str(&styled);
            }
        }
        out
    }
}
