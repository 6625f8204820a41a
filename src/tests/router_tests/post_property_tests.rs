// src/tests/router_tests/post_property_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_app, post_form};

fn valid_sale_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("title", "Sunny 2BHK near the Park"),
        ("type", "Apartment"),
        ("listing_type", "sale"),
        ("price", "7500000"),
        ("city", "Noida"),
        ("location", "Sector 45"),
        ("bedrooms", "2"),
        ("bathrooms", "2"),
        ("area", "1200"),
        ("description", "Bright and airy."),
        ("amenities", "Park, Lift"),
    ]
}

#[test]
fn sell_page_renders_the_form() {
    let app = make_app();

    let mut resp = handle(get("/sell"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Post Your Property"));
    assert!(body.contains("name=\"listing_type\""));
    assert!(body.contains("name=\"amenities\""));
    // No API key in tests, so the AI button is replaced by the hint.
    assert!(body.contains("GEMINI_API_KEY"));
}

#[test]
fn posting_a_sale_listing_redirects_to_buy() {
    let app = make_app();

    let resp = handle(post_form("/sell", &valid_sale_form()), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or(""),
        "/buy"
    );

    // The new record is prepended and visible in the buy view.
    let mut resp = handle(get("/buy"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Sunny 2BHK near the Park"));
    assert!(body.contains("4 listings found"));
}

#[test]
fn posting_a_rent_listing_redirects_to_rent() {
    let app = make_app();

    let mut fields = valid_sale_form();
    for field in fields.iter_mut() {
        if field.0 == "listing_type" {
            field.1 = "rent";
        }
        if field.0 == "price" {
            field.1 = "28000";
        }
    }

    let resp = handle(post_form("/sell", &fields), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or(""),
        "/rent"
    );
}

#[test]
fn new_listings_appear_featured_on_home() {
    let app = make_app();

    handle(post_form("/sell", &valid_sale_form()), &app).unwrap();

    let mut resp = handle(get("/"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Sunny 2BHK near the Park"));
}

#[test]
fn missing_title_is_a_bad_request() {
    let app = make_app();

    let fields: Vec<_> = valid_sale_form()
        .into_iter()
        .filter(|(k, _)| *k != "title")
        .collect();

    let err = handle(post_form("/sell", &fields), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(m) if m.contains("title")));
}

#[test]
fn junk_price_is_a_bad_request() {
    let app = make_app();

    let mut fields = valid_sale_form();
    for field in fields.iter_mut() {
        if field.0 == "price" {
            field.1 = "priceless";
        }
    }

    let err = handle(post_form("/sell", &fields), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    // Nothing was added.
    let mut resp = handle(get("/buy"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("3 listings found"));
}

#[test]
fn describe_without_an_api_key_returns_the_alert_fragment() {
    let app = make_app();

    let fields = [
        ("title", "Sunny 2BHK"),
        ("type", "Apartment"),
        ("location", "Sector 45"),
        ("amenities", "Park"),
        ("description", "keep me"),
    ];

    let mut resp = handle(post_form("/sell/describe", &fields), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("id=\"description-field\""));
    assert!(body.contains("AI descriptions are not configured."));
    // The user's draft is preserved.
    assert!(body.contains("keep me"));
}

#[test]
fn describe_requires_title_type_and_location() {
    let app = make_app();

    let fields = [
        ("title", "Sunny 2BHK"),
        ("type", "Apartment"),
        ("location", "   "),
        ("description", "draft text"),
    ];

    let mut resp = handle(post_form("/sell/describe", &fields), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Please fill in Title, Type and Location first."));
    assert!(body.contains("draft text"));
}
