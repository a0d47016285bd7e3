//! Shared test utilities: recording presenter, recording navigator, fixtures.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use sdui::action::{Affordance, NavigationError, Navigator};
use sdui::render::{ImageCard, ImageResolver, ImageState, Presenter, Row, TextEntry};
use serde_json::{json, Value};
use std::sync::Arc;

/// One recorded presentation call, with entries flattened to owned data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Strip(Vec<CardCall>),
    TextList(Vec<TextCall>),
    RowList(Vec<RowCall>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCall {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub image: Option<ImageState>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCall {
    pub text: String,
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCall {
    pub icon: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub target: Option<String>,
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<Call>,
}

fn target(affordance: Affordance<'_>) -> Option<String> {
    affordance.action().map(|action| action.url.clone())
}

impl Presenter for RecordingPresenter {
    fn draw_horizontal_strip(&mut self, cards: &[ImageCard<'_>], images: &dyn ImageResolver) {
        self.calls.push(Call::Strip(
            cards
                .iter()
                .map(|card| CardCall {
                    url: card.url.map(str::to_string),
                    alt: card.alt.map(str::to_string),
                    image: card.url.map(|url| images.resolve(url).state),
                    target: target(card.affordance),
                })
                .collect(),
        ));
    }

    fn draw_vertical_text_list(&mut self, entries: &[TextEntry<'_>], _images: &dyn ImageResolver) {
        self.calls.push(Call::TextList(
            entries
                .iter()
                .map(|entry| TextCall {
                    text: entry.text.to_string(),
                    target: target(entry.affordance),
                })
                .collect(),
        ));
    }

    fn draw_row_list(&mut self, rows: &[Row<'_>], _images: &dyn ImageResolver) {
        self.calls.push(Call::RowList(
            rows.iter()
                .map(|row| RowCall {
                    icon: row.icon.map(str::to_string),
                    title: row.title.to_string(),
                    subtitle: row.subtitle.to_string(),
                    target: target(row.affordance),
                })
                .collect(),
        ));
    }
}

/// Navigator that records URLs and optionally refuses them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub visited: Arc<Mutex<Vec<String>>>,
    pub refuse: bool,
}

impl RecordingNavigator {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        self.visited.lock().push(url.to_string());
        if self.refuse {
            return Err(NavigationError::UnsupportedScheme {
                url: url.to_string(),
                scheme: "test".to_string(),
            });
        }
        Ok(())
    }
}

/// A screen exercising every component variant and both carousel layouts.
pub fn mixed_document() -> Value {
    json!({
        "components": [
            {
                "type": "carousel",
                "layout": "horizontal",
                "items": [
                    {
                        "type": "image",
                        "url": "https://cdn.example.com/banner-1.png",
                        "description": "Summer sale",
                        "action": { "type": "navigate", "url": "https://example.com/sale" }
                    },
                    {
                        "type": "image",
                        "url": "https://cdn.example.com/banner-2.png"
                    }
                ]
            },
            {
                "type": "carousel",
                "layout": "vertical",
                "items": [
                    { "type": "text", "content": "Welcome back" },
                    {
                        "type": "text",
                        "content": "See what's new",
                        "action": { "type": "navigate", "url": "https://example.com/news" }
                    },
                    { "type": "text" }
                ]
            },
            {
                "type": "list",
                "items": [
                    {
                        "type": "entry",
                        "title": "Orders",
                        "subtitle": "Track deliveries",
                        "icon": "https://cdn.example.com/box.png",
                        "action": { "type": "navigate", "url": "https://example.com/orders" }
                    },
                    { "type": "entry", "title": "Help", "subtitle": "FAQ and contact" }
                ]
            }
        ]
    })
}
