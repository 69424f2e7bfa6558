use meeple_catalog::{CardView, DetailView, adapt_value};
use serde_json::json;

#[test]
fn card_view_computes_display_strings() {
    let game = adapt_value(&json!({
        "title": "Catan",
        "genre": ["Strategy", "Trading"],
        "players": "3-4",
        "playtime": 90,
        "rating": 7.5,
        "description": "Trade, build, settle."
    }))
    .unwrap();

    let card = CardView::from_record(&game, true);
    assert_eq!(card.title, "Catan");
    assert_eq!(card.rating, "7.5");
    assert_eq!(card.genres, "Strategy, Trading");
    assert_eq!(card.playtime, "90 min");
    assert_eq!(card.players, "3-4");
    assert!(card.favorite);
}

#[test]
fn card_view_placeholders_for_missing_fields() {
    let game = adapt_value(&json!({"title": "Bare"})).unwrap();
    let card = CardView::from_record(&game, false);
    assert_eq!(card.rating, "N/A");
    assert_eq!(card.genres, "-");
    assert_eq!(card.playtime, "-");
    assert_eq!(card.players, "-");
    assert_eq!(card.description, "");
    assert!(!card.favorite);
}

#[test]
fn whole_number_ratings_drop_the_decimal() {
    let game = adapt_value(&json!({"title": "Uno", "rating": 6})).unwrap();
    assert_eq!(CardView::from_record(&game, false).rating, "6");
}

#[test]
fn detail_view_uses_unknown_placeholders() {
    let game = adapt_value(&json!({"title": "Bare"})).unwrap();
    let detail = DetailView::from_record(&game, false);
    assert_eq!(detail.players, "Unknown");
    assert_eq!(detail.playtime, "Unknown");
    assert_eq!(detail.min_age, "Unknown");
    assert_eq!(detail.location, "Unknown");
    assert_eq!(detail.difficulty, "Unknown");
    assert_eq!(detail.image_url, None);
}

#[test]
fn detail_view_formats_known_fields() {
    let game = adapt_value(&json!({
        "title": "Catan",
        "min_age": 10,
        "location": "Shelf A",
        "difficulty": "Medium",
        "image": "https://example.com/catan.jpg"
    }))
    .unwrap();
    let detail = DetailView::from_record(&game, true);
    assert_eq!(detail.min_age, "10+");
    assert_eq!(detail.location, "Shelf A");
    assert_eq!(detail.difficulty, "Medium");
    assert_eq!(detail.image_url.as_deref(), Some("https://example.com/catan.jpg"));
    assert!(detail.favorite);
}
