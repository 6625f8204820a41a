// src/tests/router_tests/listings_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, make_app};

#[test]
fn buy_view_shows_only_sale_listings() {
    let app = make_app();

    let mut resp = handle(get("/buy"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Luxury Villa with Private Pool"));
    assert!(body.contains("Spacious 3BHK High Rise"));
    assert!(body.contains("Premium Plot in Gated Community"));
    assert!(body.contains("3 listings found"));

    assert!(!body.contains("Modern 2BHK in City Center"));
    assert!(!body.contains("Commercial Office Space"));
}

#[test]
fn rent_view_shows_only_rent_listings() {
    let app = make_app();

    let mut resp = handle(get("/rent"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Modern 2BHK in City Center"));
    assert!(body.contains("Commercial Office Space"));
    assert!(body.contains("2 listings found"));
}

#[test]
fn search_matches_location_case_insensitively() {
    let app = make_app();

    let mut resp = handle(get("/rent?q=sector+62"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Commercial Office Space"));
    assert!(!body.contains("Modern 2BHK in City Center"));
    assert!(body.contains("1 listings found"));
}

#[test]
fn search_with_no_hits_shows_empty_state() {
    let app = make_app();

    let mut resp = handle(get("/rent?q=gurgaon"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("No properties found"));
    assert!(body.contains("0 listings found"));
}

#[test]
fn price_filter_is_an_inclusive_bound() {
    let app = make_app();

    // The 2BHK rents at exactly 35,000.
    let mut resp = handle(get("/rent?max_price=35000"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Modern 2BHK in City Center"));
    assert!(!body.contains("Commercial Office Space"));

    let mut resp = handle(get("/rent?max_price=34999"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("No properties found"));
}

#[test]
fn category_filter_narrows_results() {
    let app = make_app();

    let mut resp = handle(get("/buy?type=Villa"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Luxury Villa with Private Pool"));
    assert!(!body.contains("Spacious 3BHK High Rise"));
    assert!(body.contains("1 listings found"));
}

#[test]
fn unrecognized_category_matches_nothing_but_renders() {
    let app = make_app();

    let mut resp = handle(get("/buy?type=Penthouse"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("No properties found"));
}

#[test]
fn malformed_max_price_falls_back_to_the_ceiling() {
    let app = make_app();

    let mut resp = handle(get("/rent?max_price=lots"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("2 listings found"));
}

#[test]
fn bare_path_renders_reset_defaults() {
    let app = make_app();

    let mut resp = handle(get("/rent?q=Noida&max_price=1000"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("value=\"Noida\""));
    assert!(body.contains("0 listings found"));

    // The reset link target: the bare view re-renders with an empty
    // search box and the kind's price ceiling.
    let mut resp = handle(get("/rent"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("value=\"\""));
    assert!(body.contains("value=\"500000\""));
    assert!(body.contains("2 listings found"));
}
