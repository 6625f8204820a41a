// templates/pages/property_details.rs

use maud::{html, Markup};

use crate::domain::property::{ListingKind, Property};
use crate::templates::{components::format_inr, desktop_layout};

pub fn property_details_page(p: &Property) -> Markup {
    let price = match p.listing_kind {
        ListingKind::ForRent => format!("{} / month", format_inr(p.price)),
        ListingKind::ForSale => format_inr(p.price),
    };

    desktop_layout(
        &p.title,
        html! {
            article class="details card" {
                header class="details-header" {
                    div {
                        span class="type-badge" { (p.property_type) }
                        span class="kind-badge" { "For " (p.listing_kind.label()) }
                        @if p.is_featured_listing() {
                            span class="featured-badge" { "Featured" }
                        }
                    }
                    h1 { (p.title) }
                    p class="muted" { (p.location) ", " (p.city) }
                    p class="details-price" { (price) }
                }

                ul class="details-specs" {
                    @if p.bedrooms > 0 {
                        li { strong { (p.bedrooms) } " Bedrooms" }
                    }
                    @if p.bathrooms > 0 {
                        li { strong { (p.bathrooms) } " Bathrooms" }
                    }
                    li { strong { (p.area) } " sq ft" }
                    li { "Posted " (p.date_posted) }
                }

                section {
                    h2 { "About this property" }
                    p { (p.description) }
                }

                @if !p.amenities.is_empty() {
                    section {
                        h2 { "Amenities" }
                        ul class="amenities" {
                            @for a in &p.amenities {
                                li { (a) }
                            }
                        }
                    }
                }

                section class="contact-box" {
                    h2 { "Contact Owner" }
                    p { (p.owner_contact) }
                }

                a href=(p.listing_kind.browse_path()) class="btn btn-outline" {
                    "Back to listings"
                }
            }
        },
    )
}
