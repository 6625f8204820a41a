use std::collections::HashMap;
use std::io::Read;

use astra::{Body, Request};

use crate::describer::GeminiDescriber;
use crate::domain::filter::{filter_properties, CategoryFilter, FilterCriteria};
use crate::domain::form::PropertyForm;
use crate::domain::property::{ListingKind, PropertyType};
use crate::errors::ServerError;
use crate::responses::assets::MAIN_CSS;
use crate::responses::{css_response, html_response, redirect_response, ResultResp};
use crate::store::PropertyStore;
use crate::templates::{self, pages};

/// Everything the handlers need, owned once and shared by reference
/// across the worker pool.
pub struct App {
    pub store: PropertyStore,
    /// None when GEMINI_API_KEY is not configured.
    pub describer: Option<GeminiDescriber>,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let (parts, body) = req.into_parts();
    let method = parts.method.as_str();
    let path = parts.uri.path();

    match (method, path) {
        ("GET", "/") => home_page(app),
        ("GET", "/buy") => listings_page(app, ListingKind::ForSale, parts.uri.query()),
        ("GET", "/rent") => listings_page(app, ListingKind::ForRent, parts.uri.query()),
        ("GET", "/sell") => html_response(pages::post_property_page(app.describer.is_some())),
        ("POST", "/sell") => submit_property(app, body),
        ("POST", "/sell/describe") => describe_property(app, body),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", p) if p.starts_with("/property/") => {
            details_page(app, p.trim_start_matches("/property/"))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home_page(app: &App) -> ResultResp {
    let featured = app.store.featured()?;
    html_response(pages::home_page(&featured))
}

fn listings_page(app: &App, kind: ListingKind, query: Option<&str>) -> ResultResp {
    let criteria = criteria_from_query(kind, query);
    let records = app.store.snapshot()?;
    let results = filter_properties(&records, &criteria);

    html_response(pages::listings_page(&pages::ListingsVm { criteria, results }))
}

fn details_page(app: &App, id: &str) -> ResultResp {
    match app.store.get(id)? {
        Some(p) => html_response(pages::property_details_page(&p)),
        None => Err(ServerError::NotFound),
    }
}

fn submit_property(app: &App, body: Body) -> ResultResp {
    let fields = parse_form_body(body)?;
    let form = PropertyForm::from_fields(&fields)?;
    let added = app.store.add_listing(&form)?;

    redirect_response(added.listing_kind.browse_path())
}

/// htmx endpoint behind the "AI Write" button. Always answers with
/// the description-field fragment so the page stays usable: filled in
/// on success, carrying a single alert on any failure.
fn describe_property(app: &App, body: Body) -> ResultResp {
    let fields = parse_form_body(body)?;

    let current = fields.get("description").map(String::as_str).unwrap_or("");
    let enabled = app.describer.is_some();

    let fragment = |value: &str, alert: Option<&str>| {
        html_response(templates::description_field(value, alert, enabled))
    };

    let title = fields.get("title").map(|s| s.trim()).unwrap_or("");
    let location = fields.get("location").map(|s| s.trim()).unwrap_or("");
    let property_type = fields
        .get("type")
        .and_then(|s| s.parse::<PropertyType>().ok());

    let Some(property_type) = property_type else {
        return fragment(current, Some("Please fill in Title, Type and Location first."));
    };
    if title.is_empty() || location.is_empty() {
        return fragment(current, Some("Please fill in Title, Type and Location first."));
    }

    let Some(describer) = &app.describer else {
        return fragment(current, Some("AI descriptions are not configured."));
    };

    let amenities = fields.get("amenities").map(String::as_str).unwrap_or("");

    match describer.generate_description(title, property_type, location, amenities) {
        Ok(description) => fragment(&description, None),
        Err(e) => {
            eprintln!("Description generation failed: {e}");
            fragment(current, Some("Failed to generate description. Please try again."))
        }
    }
}

/// Build the view's filter criteria from its query string. Absent or
/// malformed parameters fall back to the reset defaults; nothing here
/// can fail the request.
fn criteria_from_query(kind: ListingKind, query: Option<&str>) -> FilterCriteria {
    let mut criteria = FilterCriteria::default_for(kind);

    let Some(query) = query else {
        return criteria;
    };
    let params = parse_pairs(query);

    if let Some(q) = params.get("q") {
        criteria.search = q.trim().to_string();
    }
    if let Some(t) = params.get("type") {
        criteria.category = CategoryFilter::from_param(t);
    }
    if let Some(raw) = params.get("max_price") {
        if let Ok(max) = raw.parse::<i64>() {
            criteria.price_max = max;
        }
    }

    criteria
}

fn parse_form_body(mut body: Body) -> Result<HashMap<String, String>, ServerError> {
    let mut bytes = Vec::new();
    body.reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&bytes).into_owned().collect())
}

fn parse_pairs(input: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}
