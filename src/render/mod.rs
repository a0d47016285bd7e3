//! Screen -> presentation calls.
//!
//! Dispatch happens at two levels: the component variant picks the
//! presentation strategy, and each item's action picks its affordance.
//! The walk is pure with respect to the [`Screen`]; its only effects are
//! the calls made on the [`Presenter`].

mod images;

pub use images::{ImageCache, ImageRef, ImageResolver, ImageState};

use crate::action::Affordance;
use crate::model::{Action, Carousel, CarouselLayout, Component, ListComponent, Screen};

/// Card in a horizontally scrolling strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCard<'a> {
    pub url: Option<&'a str>,
    pub alt: Option<&'a str>,
    pub affordance: Affordance<'a>,
}

/// Entry in a vertically scrolling text list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry<'a> {
    /// Item content, or `""` when the item has none.
    pub text: &'a str,
    pub affordance: Affordance<'a>,
}

/// Row with an optional leading icon and two lines of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub icon: Option<&'a str>,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub affordance: Affordance<'a>,
}

/// Presentation service driven by [`render`].
///
/// Each call corresponds to exactly one component. Image URLs are resolved
/// through `images`; implementations must not wait for image content.
pub trait Presenter {
    fn draw_horizontal_strip(&mut self, cards: &[ImageCard<'_>], images: &dyn ImageResolver);

    fn draw_vertical_text_list(&mut self, entries: &[TextEntry<'_>], images: &dyn ImageResolver);

    fn draw_row_list(&mut self, rows: &[Row<'_>], images: &dyn ImageResolver);
}

/// Issues one presentation call per component, in document order.
pub fn render<P: Presenter + ?Sized>(screen: &Screen, presenter: &mut P, images: &dyn ImageResolver) {
    for (index, component) in screen.components.iter().enumerate() {
        tracing::trace!(index, kind = component.kind(), "Dispatching component");

        match component {
            Component::Carousel(carousel) => match carousel.layout {
                CarouselLayout::Horizontal => {
                    presenter.draw_horizontal_strip(&image_cards(carousel), images)
                }
                CarouselLayout::Vertical => {
                    presenter.draw_vertical_text_list(&text_entries(carousel), images)
                }
            },
            Component::List(list) => presenter.draw_row_list(&rows(list), images),
        }
    }
}

/// Actions of every clickable leaf, in the order [`render`] presents them.
pub fn interactive_targets(screen: &Screen) -> Vec<&Action> {
    screen.components.iter().flat_map(component_targets).collect()
}

/// Action targets of one component, in draw order.
pub fn component_targets(component: &Component) -> Vec<&Action> {
    match component {
        Component::Carousel(carousel) => carousel
            .items
            .iter()
            .filter_map(|item| item.action.as_ref())
            .collect(),
        Component::List(list) => list
            .items
            .iter()
            .filter_map(|item| item.action.as_ref())
            .collect(),
    }
}

fn image_cards(carousel: &Carousel) -> Vec<ImageCard<'_>> {
    carousel
        .items
        .iter()
        .map(|item| ImageCard {
            url: item.url.as_deref(),
            alt: item.description.as_deref(),
            affordance: Affordance::of(item.action.as_ref()),
        })
        .collect()
}

fn text_entries(carousel: &Carousel) -> Vec<TextEntry<'_>> {
    carousel
        .items
        .iter()
        .map(|item| TextEntry {
            text: item.content.as_deref().unwrap_or(""),
            affordance: Affordance::of(item.action.as_ref()),
        })
        .collect()
}

fn rows(list: &ListComponent) -> Vec<Row<'_>> {
    list.items
        .iter()
        .map(|item| Row {
            icon: item.icon.as_deref(),
            title: &item.title,
            subtitle: &item.subtitle,
            affordance: Affordance::of(item.action.as_ref()),
        })
        .collect()
}
