// src/store/properties.rs

use std::sync::{Arc, RwLock};

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::domain::form::{PropertyForm, POSTED_OWNER_CONTACT};
use crate::domain::property::Property;
use crate::errors::ServerError;

/// How many featured listings the home page shows.
pub const FEATURED_HOME_LIMIT: usize = 3;

pub const LISTING_ID_LEN: usize = 10;

/// The in-memory record collection. All state is process-lifetime;
/// nothing is persisted.
///
/// Reads hand out a snapshot `Arc`; posting builds a whole new
/// collection with the record prepended and swaps it in. Snapshots
/// already handed out never change underneath a renderer.
#[derive(Clone)]
pub struct PropertyStore {
    inner: Arc<RwLock<Arc<Vec<Property>>>>,
}

impl PropertyStore {
    pub fn new(records: Vec<Property>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(records))),
        }
    }

    /// Cheap clone of the current collection.
    pub fn snapshot(&self) -> Result<Arc<Vec<Property>>, ServerError> {
        let guard = self.inner.read().map_err(|_| ServerError::InternalError)?;
        Ok(Arc::clone(&guard))
    }

    pub fn get(&self, id: &str) -> Result<Option<Property>, ServerError> {
        let records = self.snapshot()?;
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    /// Featured selection for the home page: flagged-or-expensive,
    /// original order preserved, truncated to the display limit.
    pub fn featured(&self) -> Result<Vec<Property>, ServerError> {
        let records = self.snapshot()?;
        Ok(records
            .iter()
            .filter(|p| p.is_featured_listing())
            .take(FEATURED_HOME_LIMIT)
            .cloned()
            .collect())
    }

    /// Turn a validated submission into a record and prepend it to a
    /// new collection. The assigned id is collision-checked against
    /// the active records.
    pub fn add_listing(&self, form: &PropertyForm) -> Result<Property, ServerError> {
        let mut guard = self.inner.write().map_err(|_| ServerError::InternalError)?;

        let mut rng = rand::thread_rng();
        let id = loop {
            let candidate = generate_listing_id(&mut rng);
            if !guard.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };

        let listing = Property {
            id,
            title: form.title.clone(),
            description: form.description.clone(),
            price: form.price,
            location: form.location.clone(),
            city: form.city.clone(),
            property_type: form.property_type,
            listing_kind: form.listing_kind,
            bedrooms: form.bedrooms,
            bathrooms: form.bathrooms,
            area: form.area,
            amenities: form.amenities.clone(),
            owner_contact: POSTED_OWNER_CONTACT.to_string(),
            date_posted: Utc::now().format("%Y-%m-%d").to_string(),
            // New listings are featured for the demo.
            is_featured: true,
        };

        let mut next = Vec::with_capacity(guard.len() + 1);
        next.push(listing.clone());
        next.extend(guard.iter().cloned());
        *guard = Arc::new(next);

        Ok(listing)
    }
}

/// Short random URL-safe id for a new listing.
pub fn generate_listing_id<R: Rng>(rng: &mut R) -> String {
    (0..LISTING_ID_LEN)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}
