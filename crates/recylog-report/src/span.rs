/// Number of rotating palette entries. Style indices wrap modulo this.
pub const PALETTE_SIZE: usize = 9;

/// Display hint attached to a span. Purely visual: two renders of the
/// same snapshot carry identical text regardless of how the target maps
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Heading,
    /// Rotating palette slot, assigned bucket-order modulo the palette.
    Palette(usize),
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// One output line as a sequence of spans (without the newline).
pub type Line = Vec<Span>;

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Plain,
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Heading,
        }
    }

    pub fn palette(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            style: Style::Palette(index % PALETTE_SIZE),
        }
    }
}

/// Flatten lines to a newline-terminated string, ignoring styles.
pub fn render_plain(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        for span in line {
            out.push_str(&span.text);
        }
        out.push('\n');
    }
    out
}
