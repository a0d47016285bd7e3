use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem as ListRow, ListState, Paragraph};
use ratatui::Frame;

use crate::action::Affordance;
use crate::model::{CarouselLayout, Component, Screen};
use crate::render::{
    component_targets, ImageCard, ImageRef, ImageResolver, ImageState, Presenter, Row, TextEntry,
};
use crate::ui::layout::take_rows;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};

const CARD_WIDTH: u16 = 24;
/// Section border (2) + card border (2) + three card lines.
const STRIP_HEIGHT: u16 = 7;

/// Draws components top to bottom into `area` of a ratatui frame.
///
/// Clickable entries are numbered in draw order; the one matching `focused`
/// is highlighted. Components scrolled past or that no longer fit are not
/// drawn but still counted, so focus indices stay aligned with
/// [`interactive_targets`](crate::render::interactive_targets).
pub struct FramePresenter<'a, 'f> {
    frame: &'a mut Frame<'f>,
    remaining: Rect,
    focused: usize,
    next_target: usize,
    skip: usize,
    component: usize,
}

impl<'a, 'f> FramePresenter<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>, area: Rect, focused: usize) -> Self {
        Self {
            frame,
            remaining: area,
            focused,
            next_target: 0,
            skip: 0,
            component: 0,
        }
    }

    /// Starts drawing at component `first`; earlier ones are scrolled past.
    pub fn starting_at(mut self, first: usize) -> Self {
        self.skip = first;
        self
    }

    /// Advances to the next component; `true` when it is scrolled past.
    fn scrolled_past(&mut self) -> bool {
        let index = self.component;
        self.component += 1;
        index < self.skip
    }

    /// Local index of the focused entry, if it belongs to this component.
    fn selection<'x>(&mut self, affordances: impl Iterator<Item = Affordance<'x>>) -> Option<usize> {
        let mut selected = None;
        for (idx, affordance) in affordances.enumerate() {
            if affordance.is_clickable() {
                if self.next_target == self.focused {
                    selected = Some(idx);
                }
                self.next_target += 1;
            }
        }
        selected
    }
}

impl Presenter for FramePresenter<'_, '_> {
    fn draw_horizontal_strip(&mut self, cards: &[ImageCard<'_>], images: &dyn ImageResolver) {
        let selected = self.selection(cards.iter().map(|card| card.affordance));
        if self.scrolled_past() {
            return;
        }
        let Some(area) = take_rows(&mut self.remaining, STRIP_HEIGHT) else {
            return;
        };

        let block = section_block("Carousel");
        let inner = block.inner(area);
        self.frame.render_widget(block, area);
        if cards.is_empty() || inner.width == 0 || inner.height == 0 {
            return;
        }

        let card_width = CARD_WIDTH.min(inner.width);
        let visible = usize::from((inner.width / card_width).max(1));
        let offset = match selected {
            Some(idx) if idx >= visible => idx + 1 - visible,
            _ => 0,
        };

        for (slot, (idx, card)) in cards.iter().enumerate().skip(offset).take(visible).enumerate() {
            let x = inner.x + card_width * slot as u16;
            let rect = Rect {
                x,
                y: inner.y,
                width: card_width.min(inner.right().saturating_sub(x)),
                height: inner.height,
            };

            let image = card.url.map(|url| images.resolve(url));
            let alt = card.alt.unwrap_or("no description");
            let lines = vec![
                image_line(image.as_ref()),
                Line::from(Span::styled(alt, Style::default().fg(HEADER_TEXT))),
                Line::from(marker(card.affordance)),
            ];

            let mut style = Style::default();
            if selected == Some(idx) {
                style = style.bg(ACTIVE_HIGHLIGHT);
            }
            let widget = Paragraph::new(lines).style(style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            );
            self.frame.render_widget(widget, rect);
        }
    }

    fn draw_vertical_text_list(&mut self, entries: &[TextEntry<'_>], _images: &dyn ImageResolver) {
        let selected = self.selection(entries.iter().map(|entry| entry.affordance));
        if self.scrolled_past() {
            return;
        }
        let Some(area) = take_rows(&mut self.remaining, section_height(entries.len(), 1)) else {
            return;
        };

        let rows: Vec<ListRow> = entries
            .iter()
            .map(|entry| {
                ListRow::new(Line::from(vec![
                    marker(entry.affordance),
                    Span::styled(entry.text, Style::default().fg(HEADER_TEXT)),
                ]))
            })
            .collect();

        self.draw_list(rows, area, selected);
    }

    fn draw_row_list(&mut self, rows: &[Row<'_>], images: &dyn ImageResolver) {
        let selected = self.selection(rows.iter().map(|row| row.affordance));
        if self.scrolled_past() {
            return;
        }
        let Some(area) = take_rows(&mut self.remaining, section_height(rows.len(), 2)) else {
            return;
        };

        let items: Vec<ListRow> = rows
            .iter()
            .map(|row| {
                let mut title = Vec::new();
                let mut subtitle = Vec::new();
                if let Some(icon) = row.icon {
                    let image = images.resolve(icon);
                    title.push(image_glyph(&image));
                    title.push(Span::raw(" "));
                    subtitle.push(Span::raw("  "));
                }
                title.push(marker(row.affordance));
                title.push(Span::styled(
                    row.title,
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ));
                subtitle.push(Span::raw("  "));
                subtitle.push(Span::styled(row.subtitle, Style::default().fg(MUTED_TEXT)));
                ListRow::new(Text::from(vec![Line::from(title), Line::from(subtitle)]))
            })
            .collect();

        self.draw_list(items, area, selected);
    }
}

impl FramePresenter<'_, '_> {
    fn draw_list(&mut self, rows: Vec<ListRow<'_>>, area: Rect, selected: Option<usize>) {
        let list = List::new(rows)
            .block(section_block("List"))
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
        let mut state = ListState::default().with_selected(selected);
        self.frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Vertical window over a screen's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First component drawn. Everything before it is hidden above.
    pub first: usize,
    pub hidden_below: usize,
    /// Rows left for components once the overflow markers are placed.
    pub area: Rect,
}

impl Viewport {
    pub fn hidden_above(&self) -> usize {
        self.first
    }
}

/// Picks the first component to draw so the focused one is on screen.
///
/// A row is reserved at the top when components are scrolled past and at the
/// bottom when the rest does not fit, for the overflow markers.
pub fn viewport(screen: &Screen, focused: usize, body: Rect) -> Viewport {
    let heights: Vec<u16> = screen.components.iter().map(component_height).collect();
    if heights.is_empty() {
        return Viewport {
            first: 0,
            hidden_below: 0,
            area: body,
        };
    }
    let focused_component = focused_component(screen, focused);
    let rows_from = |start: usize, end: usize| -> u32 {
        heights[start..end].iter().map(|&h| u32::from(h)).sum()
    };

    let mut first = 0;
    let mut top = 0;
    let mut bottom = 0;
    for start in 0..=focused_component {
        first = start;
        top = u16::from(start > 0);
        let room = u32::from(body.height.saturating_sub(top));
        bottom = u16::from(rows_from(start, heights.len()) > room);
        let room = room.saturating_sub(u32::from(bottom));
        if rows_from(start, focused_component + 1) <= room {
            break;
        }
    }

    let area = Rect {
        x: body.x,
        y: body.y + top.min(body.height),
        width: body.width,
        height: body.height.saturating_sub(top + bottom),
    };

    let mut rows = area.height;
    let mut end = first;
    while end < heights.len() && rows > 0 {
        rows -= heights[end].min(rows);
        end += 1;
    }

    Viewport {
        first,
        hidden_below: heights.len() - end,
        area,
    }
}

fn component_height(component: &Component) -> u16 {
    match component {
        Component::Carousel(carousel) => match carousel.layout {
            CarouselLayout::Horizontal => STRIP_HEIGHT,
            CarouselLayout::Vertical => section_height(carousel.items.len(), 1),
        },
        Component::List(list) => section_height(list.items.len(), 2),
    }
}

/// Component holding the `focused` target; the first one when nothing is focusable.
fn focused_component(screen: &Screen, focused: usize) -> usize {
    let mut seen = 0;
    for (index, component) in screen.components.iter().enumerate() {
        seen += component_targets(component).len();
        if focused < seen {
            return index;
        }
    }
    0
}

fn section_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn section_height(entries: usize, lines_per_entry: usize) -> u16 {
    u16::try_from(entries * lines_per_entry + 2).unwrap_or(u16::MAX)
}

fn marker(affordance: Affordance<'_>) -> Span<'static> {
    if affordance.is_clickable() {
        Span::styled("› ", Style::default().fg(ACCENT))
    } else {
        Span::raw("  ")
    }
}

fn image_glyph(image: &ImageRef) -> Span<'static> {
    match image.state {
        ImageState::Ready => Span::styled("▣", Style::default().fg(STATUS_OK)),
        ImageState::Pending => Span::styled("◌", Style::default().fg(STATUS_PENDING)),
        ImageState::Failed => Span::styled("✕", Style::default().fg(STATUS_ERROR)),
    }
}

fn image_line(image: Option<&ImageRef>) -> Line<'static> {
    let Some(image) = image else {
        return Line::from(Span::styled("□ no image", Style::default().fg(MUTED_TEXT)));
    };
    let name = image
        .url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(image.url.as_str())
        .to_string();
    Line::from(vec![
        image_glyph(image),
        Span::raw(" "),
        Span::styled(name, Style::default().fg(MUTED_TEXT)),
    ])
}
