// templates/pages/home.rs

use maud::{html, Markup};

use crate::domain::property::Property;
use crate::templates::{components::property_card, desktop_layout};

pub fn home_page(featured: &[Property]) -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Find a home that fits your life" }
                p { "Browse verified listings to buy or rent, or post your own in minutes." }
                div class="hero-actions" {
                    a href="/buy" class="btn btn-primary" { "Browse to Buy" }
                    a href="/rent" class="btn btn-outline" { "Browse to Rent" }
                }
            }

            section class="featured" {
                h2 { "Featured Properties" }
                @if featured.is_empty() {
                    p { "No featured listings right now." }
                } @else {
                    div class="card-grid" {
                        @for p in featured {
                            (property_card(p))
                        }
                    }
                }
            }
        },
    )
}
