use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::viewer::{DocumentState, ViewerState};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    document_name: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(document_name: &'a str) -> Self {
        Self { document_name }
    }

    pub fn widget(&self, state: &ViewerState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color, summary) = match &state.document {
            DocumentState::Ready(screen) => (
                "●",
                STATUS_OK,
                format!(
                    "{} components  │  {} actions",
                    screen.components.len(),
                    state.target_count()
                ),
            ),
            DocumentState::Failed(_) => ("●", STATUS_ERROR, "decode failed".to_string()),
            DocumentState::Empty => ("○", HEADER_SEPARATOR, "loading".to_string()),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled("  ", text_style),
            Span::styled(self.document_name.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(summary, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
