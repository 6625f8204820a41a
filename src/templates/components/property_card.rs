// templates/components/property_card.rs

use maud::{html, Markup};

use crate::domain::property::{ListingKind, Property};
use crate::templates::components::money::format_inr;

pub fn property_card(p: &Property) -> Markup {
    let price = match p.listing_kind {
        ListingKind::ForRent => format!("{} / month", format_inr(p.price)),
        ListingKind::ForSale => format_inr(p.price),
    };

    html! {
        article class="property-card" {
            div class="card-top" {
                span class="type-badge" { (p.property_type) }
                @if p.is_featured_listing() {
                    span class="featured-badge" { "Featured" }
                }
            }
            h3 { a href=(format!("/property/{}", p.id)) { (p.title) } }
            p class="card-location" { (p.location) ", " (p.city) }
            p class="card-price" { (price) }
            ul class="card-specs" {
                @if p.bedrooms > 0 {
                    li { (p.bedrooms) " Beds" }
                }
                @if p.bathrooms > 0 {
                    li { (p.bathrooms) " Baths" }
                }
                li { (p.area) " sq ft" }
            }
        }
    }
}
