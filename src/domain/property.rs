// src/domain/property.rs

use std::fmt;
use std::str::FromStr;

/// Listings priced above this qualify as featured even without the
/// explicit flag. Kept as a named constant until someone confirms
/// whether 1 Cr is a real business rule or a placeholder.
pub const FEATURED_PRICE_THRESHOLD: i64 = 10_000_000;

/// Structural type of a property. Closed set; the filter sidebar and
/// the post form both enumerate exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    Villa,
    Plot,
    Commercial,
    Studio,
}

pub const ALL_PROPERTY_TYPES: [PropertyType; 5] = [
    PropertyType::Apartment,
    PropertyType::Villa,
    PropertyType::Plot,
    PropertyType::Commercial,
    PropertyType::Studio,
];

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Plot => "Plot",
            PropertyType::Commercial => "Commercial",
            PropertyType::Studio => "Studio",
        };
        write!(f, "{s}")
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Apartment" => Ok(PropertyType::Apartment),
            "Villa" => Ok(PropertyType::Villa),
            "Plot" => Ok(PropertyType::Plot),
            "Commercial" => Ok(PropertyType::Commercial),
            "Studio" => Ok(PropertyType::Studio),
            other => Err(format!("unknown property type: {other}")),
        }
    }
}

/// Sale vs. rent axis. Each listings view is fixed to one kind;
/// the kind is never user-toggleable inside a filter session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    ForSale,
    ForRent,
}

impl ListingKind {
    /// Path of the listings view for this kind.
    pub fn browse_path(&self) -> &'static str {
        match self {
            ListingKind::ForSale => "/buy",
            ListingKind::ForRent => "/rent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::ForSale => "sale",
            ListingKind::ForRent => "rent",
        }
    }
}

impl FromStr for ListingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sale" => Ok(ListingKind::ForSale),
            "rent" => Ok(ListingKind::ForRent),
            other => Err(format!("unknown listing kind: {other}")),
        }
    }
}

/// A single listing. Immutable once created: posting a property
/// prepends a new record to the store, nothing is ever edited or
/// deleted in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    pub city: String,
    pub property_type: PropertyType,
    pub listing_kind: ListingKind,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub area: i64,
    pub amenities: Vec<String>,
    pub owner_contact: String,
    pub date_posted: String,
    pub is_featured: bool,
}

impl Property {
    /// A listing is featured if flagged explicitly, or expensive
    /// enough to promote anyway (strictly above the threshold).
    pub fn is_featured_listing(&self) -> bool {
        self.is_featured || self.price > FEATURED_PRICE_THRESHOLD
    }
}
