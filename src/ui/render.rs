use crate::action::NavigationAttempt;
use crate::render::{render, ImageResolver};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::presenter::{viewport, FramePresenter};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::viewer::{DocumentState, ViewerState};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Everything a frame needs besides the viewer state.
pub struct FrameContext<'a> {
    pub document_name: &'a str,
    pub images: &'a dyn ImageResolver,
    pub last_navigation: Option<&'a NavigationAttempt>,
}

pub fn draw(frame: &mut Frame<'_>, state: &ViewerState, ctx: &FrameContext<'_>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(ctx.document_name).widget(state), header);
    frame.render_widget(Clear, body);

    match &state.document {
        DocumentState::Ready(screen) => {
            let view = viewport(screen, state.focused, body);
            if view.hidden_above() > 0 && body.height > 0 {
                draw_overflow(frame, Rect { height: 1, ..body }, view.hidden_above(), "above");
            }
            if view.hidden_below > 0 && view.area.bottom() < body.bottom() {
                let row = Rect {
                    y: view.area.bottom(),
                    height: 1,
                    ..body
                };
                draw_overflow(frame, row, view.hidden_below, "below");
            }
            let mut presenter =
                FramePresenter::new(frame, view.area, state.focused).starting_at(view.first);
            render(screen, &mut presenter, ctx.images);
        }
        DocumentState::Failed(message) => draw_error(frame, body, message),
        DocumentState::Empty => frame.render_widget(
            Paragraph::new(Span::styled("Loading document...", Style::default().fg(MUTED_TEXT))),
            body,
        ),
    }

    frame.render_widget(Footer::new().widget(footer, ctx.last_navigation), footer);
}

fn draw_overflow(frame: &mut Frame<'_>, row: Rect, count: usize, side: &str) {
    let noun = if count == 1 { "component" } else { "components" };
    let text = format!("… {count} more {noun} {side}");
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(MUTED_TEXT))),
        row,
    );
}

/// Replaces the whole body; a broken document never renders partially.
fn draw_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "This screen could not be displayed.",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(STATUS_ERROR))),
        Line::from(""),
        Line::from(Span::styled(
            "Fix the document and press r to reload.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled("Document error", Style::default().fg(STATUS_ERROR)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::render::ImageCache;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use serde_json::json;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw_state(state: &ViewerState, width: u16, height: u16) -> String {
        let images = ImageCache::new();
        let ctx = FrameContext {
            document_name: "home.json",
            images: &images,
            last_navigation: None,
        };
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, state, &ctx)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn ready(doc: serde_json::Value, focused: usize) -> ViewerState {
        ViewerState {
            document: DocumentState::Ready(decode(&doc).unwrap()),
            focused,
            quit: false,
        }
    }

    fn long_list_then_target() -> serde_json::Value {
        let rows: Vec<_> = (0..12)
            .map(|idx| json!({ "type": "row", "title": format!("Row{idx}"), "subtitle": "plain" }))
            .collect();
        json!({
            "components": [
                { "type": "list", "items": rows },
                {
                    "type": "carousel",
                    "layout": "vertical",
                    "items": [{
                        "type": "text",
                        "content": "SECRET-TARGET",
                        "action": { "type": "navigate", "url": "https://example.com/x" }
                    }]
                }
            ]
        })
    }

    #[test]
    fn focused_component_below_the_fold_is_scrolled_into_view() {
        let state = ready(long_list_then_target(), 0);
        assert_eq!(state.focused_action().unwrap().url, "https://example.com/x");

        let text = draw_state(&state, 40, 20);
        assert!(text.contains("SECRET-TARGET"));
        assert!(text.contains("… 1 more component above"));
        assert!(!text.contains("Row0"));
    }

    #[test]
    fn cut_components_are_announced_below() {
        let mut doc = long_list_then_target();
        doc["components"][1]["items"][0]
            .as_object_mut()
            .unwrap()
            .remove("action");
        let state = ready(doc, 0);

        let text = draw_state(&state, 40, 20);
        assert!(text.contains("Row0"));
        assert!(!text.contains("SECRET-TARGET"));
        assert!(text.contains("… 1 more component below"));
    }

    #[test]
    fn short_screen_has_no_overflow_markers() {
        let state = ready(
            json!({
                "components": [{
                    "type": "list",
                    "items": [{ "type": "row", "title": "Inbox", "subtitle": "3 unread" }]
                }]
            }),
            0,
        );

        let text = draw_state(&state, 40, 20);
        assert!(text.contains("Inbox"));
        assert!(!text.contains("more component"));
    }

    #[test]
    fn failed_document_shows_error_panel_instead_of_components() {
        let state = ViewerState {
            document: DocumentState::Failed(
                "Missing required field 'components[0].items[0].title'".to_string(),
            ),
            focused: 0,
            quit: false,
        };

        let text = draw_state(&state, 80, 20);
        assert!(text.contains("Document error"));
        assert!(text.contains("This screen could not be displayed."));
        assert!(text.contains("components[0].items[0].title"));
        assert!(!text.contains("Carousel"));
        assert!(!text.contains("List"));
    }
}
