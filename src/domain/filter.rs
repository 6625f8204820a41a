// src/domain/filter.rs

use crate::domain::property::{ListingKind, Property, PropertyType};

/// Default price ceiling for rent listings (5 Lakhs / month).
pub const RENT_PRICE_CEILING: i64 = 500_000;
/// Default price ceiling for sale listings (10 Cr).
pub const SALE_PRICE_CEILING: i64 = 100_000_000;

/// Slider step sizes, kept with the ceilings so the sidebar and the
/// reset semantics stay in one place.
pub const RENT_PRICE_STEP: i64 = 1_000;
pub const SALE_PRICE_STEP: i64 = 100_000;

impl ListingKind {
    /// Kind-dependent upper bound the price filter resets to.
    pub fn price_ceiling(&self) -> i64 {
        match self {
            ListingKind::ForRent => RENT_PRICE_CEILING,
            ListingKind::ForSale => SALE_PRICE_CEILING,
        }
    }

    pub fn price_step(&self) -> i64 {
        match self {
            ListingKind::ForRent => RENT_PRICE_STEP,
            ListingKind::ForSale => SALE_PRICE_STEP,
        }
    }
}

/// Category predicate of the sidebar: the "All" wildcard, one concrete
/// type, or an unrecognized value from the query string. Unrecognized
/// never faults; it just matches nothing so the page stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(PropertyType),
    Unrecognized,
}

impl CategoryFilter {
    pub fn from_param(s: &str) -> Self {
        if s == "All" {
            return CategoryFilter::Any;
        }
        match s.parse::<PropertyType>() {
            Ok(t) => CategoryFilter::Only(t),
            Err(_) => CategoryFilter::Unrecognized,
        }
    }

    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(t) => *t == property_type,
            CategoryFilter::Unrecognized => false,
        }
    }
}

/// One filter session's criteria. Transient: rebuilt from the query
/// string on every request, reset by navigating to the bare path.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against location, city, title.
    /// Empty matches everything.
    pub search: String,
    pub category: CategoryFilter,
    /// Inclusive upper bound; the lower bound is fixed at 0.
    pub price_max: i64,
    /// Fixed per view (/buy vs /rent), not part of the sidebar.
    pub kind: ListingKind,
}

impl FilterCriteria {
    /// The reset state for a view: empty search, wildcard category,
    /// kind-dependent price ceiling.
    pub fn default_for(kind: ListingKind) -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::Any,
            price_max: kind.price_ceiling(),
            kind,
        }
    }

    fn matches(&self, p: &Property) -> bool {
        let price_max = self.price_max.max(0);

        if p.listing_kind != self.kind {
            return false;
        }
        if !self.category.matches(p.property_type) {
            return false;
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = p.location.to_lowercase().contains(&needle)
                || p.city.to_lowercase().contains(&needle)
                || p.title.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        p.price >= 0 && p.price <= price_max
    }
}

/// Returns the records matching all criteria as a new sequence,
/// preserving the relative order of `records`. Never mutates its
/// input and never fails.
pub fn filter_properties(records: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    records
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
