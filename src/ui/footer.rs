use crate::action::{NavigationAttempt, NavigationOutcome};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ↑/↓: Focus │ Enter: Open │ r: Reload │ q: Quit";

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, last: Option<&NavigationAttempt>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let version = format!("v{} ", VERSION);

        let mut spans = vec![Span::styled(HINTS, text_style)];
        let mut used = HINTS.chars().count();

        if let Some(attempt) = last {
            let (marker, color) = match attempt.outcome {
                NavigationOutcome::Dispatched => ("  → ", STATUS_OK),
                NavigationOutcome::Failed(_) => ("  ✕ ", STATUS_ERROR),
            };
            spans.push(Span::styled(marker, Style::default().fg(color)));
            spans.push(Span::styled(attempt.url.clone(), text_style));
            used += marker.chars().count() + attempt.url.chars().count();
        }

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
