//! View projections
//!
//! Pure functions from catalog records to renderable view models. The
//! `ui` module only draws these structures; building them never touches
//! the terminal, which keeps the projection logic testable on its own.

use crate::api::model::Adventure;
use serde_json::Value;

/// One slide of the featured-items carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSlide {
    pub title: String,
    pub summary: String,
    pub image: String,
    /// Identifier the slide's detail link resolves to.
    pub detail_id: String,
    /// The first featured record in collection order starts visible.
    pub active: bool,
}

/// One card of the full-catalog grid.
#[derive(Debug, Clone, PartialEq)]
pub struct AdventureCard {
    pub title: String,
    pub summary: String,
    pub image: String,
    pub detail_id: String,
}

/// Populated detail page for a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPage {
    pub title: String,
    pub location: String,
    pub difficulty: String,
    pub body: String,
    pub attractions: Vec<String>,
}

/// Project the collection onto carousel slides.
///
/// Only featured records appear, in their original relative order; the
/// first of them is flagged active.
pub fn carousel_slides(items: &[Adventure]) -> Vec<CarouselSlide> {
    items
        .iter()
        .filter(|item| item.featured)
        .enumerate()
        .map(|(index, item)| CarouselSlide {
            title: item.name.clone(),
            summary: item.summary.clone(),
            image: item.main_image.clone(),
            detail_id: item.id.clone(),
            active: index == 0,
        })
        .collect()
}

/// Project the collection onto the card grid: one card per record.
pub fn grid_cards(items: &[Adventure]) -> Vec<AdventureCard> {
    items
        .iter()
        .map(|item| AdventureCard {
            title: item.name.clone(),
            summary: item.summary.clone(),
            image: item.card_image.clone(),
            detail_id: item.id.clone(),
        })
        .collect()
}

/// Build the detail page view for one record.
pub fn detail_page(item: &Adventure) -> DetailPage {
    DetailPage {
        title: item.name.clone(),
        location: item.location.clone(),
        difficulty: item.difficulty.clone(),
        body: item.full_description.clone(),
        attractions: item.attractions.iter().map(attraction_label).collect(),
    }
}

/// Render one attraction entry as display text.
///
/// The wire shape of attractions is unspecified; strings are shown as-is
/// and objects fall back to their `nome` field or compact JSON.
pub fn attraction_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("nome")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}
