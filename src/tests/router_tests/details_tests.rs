// src/tests/router_tests/details_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_app};

#[test]
fn details_page_shows_the_full_record() {
    let app = make_app();

    let mut resp = handle(get("/property/1"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Luxury Villa with Private Pool"));
    assert!(body.contains("Sector 150, Noida"));
    assert!(body.contains("+91 98765 43210"));
    assert!(body.contains("Smart Home"));
    assert!(body.contains("2023-10-15"));
    // 4.5 Cr, formatted.
    assert!(body.contains("₹4.5 Cr"));
}

#[test]
fn rent_details_show_monthly_price() {
    let app = make_app();

    let mut resp = handle(get("/property/2"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("₹35,000 / month"));
}

#[test]
fn unknown_property_id_is_not_found() {
    let app = make_app();

    let err = handle(get("/property/does-not-exist"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
