use crate::span::{Line, Span};

// These two reports are deliberately static prose, not computed
// analytics: the surrounding tooling only promises qualitative notes
// here, and keeping them canned makes that explicit.

/// Qualitative trend notes about the inventory mix.
pub fn trends() -> Vec<Line> {
    static BULLETS: [&str; 5] = [
        "• Solid materials make up the bulk of the inventory",
        "• Hazardous materials carry the highest unit value",
        "• Electronic material intake keeps growing",
        "• Organic materials hold zero value (pure waste stream)",
        "• Stock concentrates in a handful of depots",
    ];
    canned("TREND ANALYSIS", &BULLETS)
}

/// Qualitative outlook notes.
pub fn forecast() -> Vec<Line> {
    static BULLETS: [&str; 5] = [
        "• Electronic materials expected to rise around 15%",
        "• Hazardous materials will need more secure storage",
        "• Paper intake trending downward",
        "• Metallic materials projected to increase",
        "• Growing storage demand for chemical materials",
    ];
    canned("FORECAST", &BULLETS)
}

fn canned(title: &str, bullets: &[&str]) -> Vec<Line> {
    let mut lines: Vec<Line> = vec![
        vec![Span::heading(title)],
        vec![Span::plain("=".repeat(50))],
        Vec::new(),
    ];
    for bullet in bullets {
        lines.push(vec![Span::plain(*bullet)]);
    }
    lines
}
