//! Typed document model for a single server-driven screen.
//!
//! Everything here is plain data. Values are built once by the decoder
//! and never mutated afterwards; a new document produces a new [`Screen`].

mod encode;

/// One screen: components in render order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    pub components: Vec<Component>,
}

/// A top-level building block of a screen.
///
/// New kinds are added as new variants. Every dispatch site matches
/// exhaustively, so an unhandled variant fails to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Carousel(Carousel),
    List(ListComponent),
}

impl Component {
    /// Discriminator value used in the document form.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Carousel(_) => "carousel",
            Component::List(_) => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    pub layout: CarouselLayout,
    pub items: Vec<Item>,
}

/// Scroll direction of a carousel.
///
/// Only the literal `"horizontal"` selects [`CarouselLayout::Horizontal`];
/// any other tag falls back to vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselLayout {
    Horizontal,
    #[default]
    Vertical,
}

impl CarouselLayout {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "horizontal" {
            CarouselLayout::Horizontal
        } else {
            CarouselLayout::Vertical
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            CarouselLayout::Horizontal => "horizontal",
            CarouselLayout::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListComponent {
    pub items: Vec<ListItem>,
}

/// Carousel entry. The `kind` tag does not decide which optional fields
/// are present; the presenter uses whatever it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: String,
    /// Image source.
    pub url: Option<String>,
    /// Alt text for the image.
    pub description: Option<String>,
    /// Text body.
    pub content: Option<String>,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    /// Leading image source.
    pub icon: Option<String>,
    pub action: Option<Action>,
}

/// Navigation intent attached to an interactive item.
///
/// Every `kind` is currently treated as plain navigation to `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_horizontal_literal_selects_horizontal() {
        assert_eq!(CarouselLayout::from_tag("horizontal"), CarouselLayout::Horizontal);
        assert_eq!(CarouselLayout::from_tag("vertical"), CarouselLayout::Vertical);
        assert_eq!(CarouselLayout::from_tag("xyz"), CarouselLayout::Vertical);
        assert_eq!(CarouselLayout::from_tag("Horizontal"), CarouselLayout::Vertical);
        assert_eq!(CarouselLayout::from_tag(""), CarouselLayout::Vertical);
    }

    #[test]
    fn component_kind_matches_discriminator() {
        let carousel = Component::Carousel(Carousel {
            layout: CarouselLayout::Vertical,
            items: Vec::new(),
        });
        let list = Component::List(ListComponent { items: Vec::new() });
        assert_eq!(carousel.kind(), "carousel");
        assert_eq!(list.kind(), "list");
    }
}
