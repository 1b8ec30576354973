//! Property-based tests using proptest
//!
//! These tests verify the view projections (carousel and card grid) and
//! the creation-form defaults with randomized catalog data.

use aventura::api::model::{Adventure, NewAdventure, DEFAULT_FULL_DESCRIPTION};
use aventura::view::{carousel_slides, grid_cards};
use proptest::prelude::*;
use serde_json::json;

/// Generate an arbitrary catalog record
fn arb_adventure() -> impl Strategy<Value = Adventure> {
    (
        1u32..10_000,              // id
        "[A-Za-z][A-Za-z ]{0,30}", // nome
        ".{0,60}",                 // descricao_breve
        "[a-z0-9/._-]{0,40}",      // image paths
        any::<bool>(),             // destaque
    )
        .prop_map(|(id, name, summary, image, featured)| {
            serde_json::from_value(json!({
                "id": id,
                "nome": name,
                "descricao_breve": summary,
                "imagem_principal": format!("principal-{image}"),
                "imagem_card": format!("card-{image}"),
                "destaque": featured,
            }))
            .expect("generated record should deserialize")
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Adventure>> {
    prop::collection::vec(arb_adventure(), 0..50)
}

proptest! {
    /// Every record gets exactly one card, featured or not
    #[test]
    fn grid_has_one_card_per_record(items in arb_catalog()) {
        let cards = grid_cards(&items);
        prop_assert_eq!(cards.len(), items.len());
    }

    /// Each card's detail link resolves to its record's identifier
    #[test]
    fn card_links_round_trip(items in arb_catalog()) {
        let cards = grid_cards(&items);
        for (card, record) in cards.iter().zip(&items) {
            prop_assert_eq!(&card.detail_id, &record.id);
        }
    }

    /// The carousel holds exactly the featured records, in order
    #[test]
    fn carousel_matches_featured_subset(items in arb_catalog()) {
        let slides = carousel_slides(&items);
        let featured_ids: Vec<&String> = items
            .iter()
            .filter(|item| item.featured)
            .map(|item| &item.id)
            .collect();

        prop_assert_eq!(slides.len(), featured_ids.len());
        for (slide, id) in slides.iter().zip(featured_ids) {
            prop_assert_eq!(&slide.detail_id, id);
        }
    }

    /// Only the first slide starts active
    #[test]
    fn exactly_first_slide_is_active(items in arb_catalog()) {
        let slides = carousel_slides(&items);
        for (index, slide) in slides.iter().enumerate() {
            prop_assert_eq!(slide.active, index == 0);
        }
    }

    /// A catalog without featured records produces no slides but a full grid
    #[test]
    fn no_featured_means_empty_carousel(items in arb_catalog()) {
        let unfeatured: Vec<Adventure> = items
            .into_iter()
            .map(|mut item| {
                item.featured = false;
                item
            })
            .collect();

        prop_assert!(carousel_slides(&unfeatured).is_empty());
        prop_assert_eq!(grid_cards(&unfeatured).len(), unfeatured.len());
    }

    /// Projections never mutate their input
    #[test]
    fn projections_are_pure(items in arb_catalog()) {
        let before = items.clone();
        let _ = carousel_slides(&items);
        let _ = grid_cards(&items);
        prop_assert_eq!(items, before);
    }
}

proptest! {
    /// Form-built records always carry the creation defaults
    #[test]
    fn form_records_carry_defaults(
        name in ".{0,40}",
        location in ".{0,40}",
        difficulty in ".{0,20}",
        summary in ".{0,60}",
        card_image in "[a-z0-9/._-]{0,40}",
    ) {
        let record = NewAdventure::from_form(&name, &location, &difficulty, &summary, &card_image);

        prop_assert_eq!(record.full_description, DEFAULT_FULL_DESCRIPTION);
        prop_assert_eq!(record.main_image, record.card_image);
        prop_assert!(record.attractions.is_empty());
        prop_assert!(!record.featured);
    }
}
