use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Everything the status bar shows for one frame.
pub struct StatusView<'a> {
    pub mood: &'a str,
    /// Labels of the modes currently switched on (idle, cyclops, ...).
    pub toggles: Vec<&'static str>,
    pub demo: bool,
    pub fps: f64,
}

pub fn render_status(f: &mut Frame, area: Rect, view: &StatusView<'_>) {
    let mut parts = vec![format!("googly | {}", view.mood)];
    if !view.toggles.is_empty() {
        parts.push(view.toggles.join(" "));
    }
    if view.demo {
        parts.push("demo".to_string());
    }
    parts.push(format!("{:.1} fps", view.fps));
    parts.push("d demo  q quit".to_string());

    let line = fit_width(&parts.join("  |  "), area.width as usize);
    let bar = Paragraph::new(Line::from(line)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

/// Truncate to a display width, terminal-cell aware.
fn fit_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for ch in s.chars() {
        let candidate_width = out.width() + unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if candidate_width > max {
            break;
        }
        out.push(ch);
    }
    out
}
