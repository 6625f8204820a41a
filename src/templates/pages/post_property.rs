// templates/pages/post_property.rs

use maud::{html, Markup};

use crate::domain::property::ALL_PROPERTY_TYPES;
use crate::templates::{components::description_field, desktop_layout};

pub fn post_property_page(describer_enabled: bool) -> Markup {
    desktop_layout(
        "Post Your Property",
        html! {
            div class="post-card card" {
                header class="post-header" {
                    h1 { "Post Your Property" }
                    p { "Sell or Rent your property to millions of users." }
                }

                form method="post" action="/sell" class="post-form" {
                    h2 { "Property Details" }

                    div class="form-grid" {
                        div class="field" {
                            label for="listing_type" { "I want to" }
                            select id="listing_type" name="listing_type" {
                                option value="sale" { "Sell" }
                                option value="rent" { "Rent" }
                            }
                        }
                        div class="field" {
                            label for="type" { "Property Type" }
                            select id="type" name="type" {
                                @for t in ALL_PROPERTY_TYPES {
                                    option value=(t) { (t) }
                                }
                            }
                        }

                        div class="field span-2" {
                            label for="title" { "Property Title" }
                            input type="text" id="title" name="title" required
                                placeholder="e.g. Luxury 3BHK Apartment in Indiranagar";
                        }

                        div class="field" {
                            label for="city" { "City" }
                            input type="text" id="city" name="city" required
                                placeholder="e.g. Noida";
                        }
                        div class="field" {
                            label for="location" { "Locality / Area" }
                            input type="text" id="location" name="location" required
                                placeholder="e.g. Sector 62";
                        }

                        div class="field" {
                            label for="area" { "Area (sq ft)" }
                            input type="number" id="area" name="area" required min="1"
                                placeholder="e.g. 1500";
                        }
                        div class="field" {
                            label for="price" { "Expected Price (₹)" }
                            input type="number" id="price" name="price" required min="0"
                                placeholder="e.g. 8500000";
                        }

                        div class="field" {
                            label for="bedrooms" { "Bedrooms" }
                            input type="number" id="bedrooms" name="bedrooms" min="0" value="2";
                        }
                        div class="field" {
                            label for="bathrooms" { "Bathrooms" }
                            input type="number" id="bathrooms" name="bathrooms" min="0" value="2";
                        }
                    }

                    h2 { "Enhance Your Listing" }

                    div class="field" {
                        label for="amenities" { "Amenities (Comma separated)" }
                        input type="text" id="amenities" name="amenities"
                            placeholder="Gym, Pool, Security, Garden...";
                    }

                    (description_field("", None, describer_enabled))

                    div class="form-actions" {
                        a href="/" class="btn btn-outline" { "Cancel" }
                        button type="submit" class="btn btn-primary" { "Post Property" }
                    }
                }
            }
        },
    )
}
