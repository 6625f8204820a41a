// src/domain/form.rs

use std::collections::HashMap;

use crate::domain::property::{ListingKind, PropertyType};
use crate::errors::ServerError;

/// Contact shown on listings posted through the form. The form has no
/// contact field; the original hid it behind this placeholder.
pub const POSTED_OWNER_CONTACT: &str = "Hidden for Demo";

/// A validated post-property submission. Unlike the filter criteria,
/// a form rejects unknown values instead of degenerating: the user is
/// told what to fix.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm {
    pub title: String,
    pub property_type: PropertyType,
    pub listing_kind: ListingKind,
    pub price: i64,
    pub city: String,
    pub location: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub area: i64,
    pub description: String,
    pub amenities: Vec<String>,
}

impl PropertyForm {
    /// Validate a decoded form body. All errors are `BadRequest` with
    /// a message naming the offending field.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, ServerError> {
        let title = required_text(fields, "title")?;
        let city = required_text(fields, "city")?;
        let location = required_text(fields, "location")?;

        let property_type = required_text(fields, "type")?
            .parse::<PropertyType>()
            .map_err(ServerError::BadRequest)?;
        let listing_kind = required_text(fields, "listing_type")?
            .parse::<ListingKind>()
            .map_err(ServerError::BadRequest)?;

        let price = parse_number(fields, "price")?;
        if price < 0 {
            return Err(ServerError::BadRequest("price must not be negative".into()));
        }

        let area = parse_number(fields, "area")?;
        if area <= 0 {
            return Err(ServerError::BadRequest("area must be positive".into()));
        }

        let bedrooms = parse_number_or(fields, "bedrooms", 0)?;
        let bathrooms = parse_number_or(fields, "bathrooms", 0)?;
        if bedrooms < 0 || bathrooms < 0 {
            return Err(ServerError::BadRequest(
                "bedrooms and bathrooms must not be negative".into(),
            ));
        }

        let description = fields
            .get("description")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let amenities = split_amenities(fields.get("amenities").map(String::as_str).unwrap_or(""));

        Ok(Self {
            title,
            property_type,
            listing_kind,
            price,
            city,
            location,
            bedrooms,
            bathrooms,
            area,
            description,
            amenities,
        })
    }
}

/// Comma-separated amenities: trimmed, empties dropped, order kept.
/// Duplicates are allowed on purpose.
pub fn split_amenities(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn required_text(fields: &HashMap<String, String>, name: &str) -> Result<String, ServerError> {
    let value = fields.get(name).map(|s| s.trim()).unwrap_or("");
    if value.is_empty() {
        return Err(ServerError::BadRequest(format!("missing field: {name}")));
    }
    Ok(value.to_string())
}

fn parse_number(fields: &HashMap<String, String>, name: &str) -> Result<i64, ServerError> {
    let raw = required_text(fields, name)?;
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("{name} is not a number: {raw}")))
}

fn parse_number_or(
    fields: &HashMap<String, String>,
    name: &str,
    default: i64,
) -> Result<i64, ServerError> {
    match fields.get(name).map(|s| s.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ServerError::BadRequest(format!("{name} is not a number: {raw}"))),
    }
}
