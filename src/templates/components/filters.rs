// templates/components/filters.rs

use maud::{html, Markup};

use crate::domain::filter::{CategoryFilter, FilterCriteria};
use crate::domain::property::ALL_PROPERTY_TYPES;
use crate::templates::components::money::format_inr;

/// The listings sidebar. A plain GET form back to the view's own
/// path; reset is just a link to the bare path (server rebuilds the
/// default criteria).
pub fn filter_sidebar(criteria: &FilterCriteria) -> Markup {
    let kind = criteria.kind;
    let selected = match criteria.category {
        CategoryFilter::Any => "All".to_string(),
        CategoryFilter::Only(t) => t.to_string(),
        CategoryFilter::Unrecognized => String::new(),
    };

    html! {
        aside class="filters card" {
            h2 { "Filters" }
            form method="get" action=(kind.browse_path()) {
                div class="field" {
                    label for="q" { "Location" }
                    input type="text" id="q" name="q"
                        placeholder="City or Locality"
                        value=(criteria.search);
                }

                fieldset class="field" {
                    legend { "Property Type" }
                    label class="radio" {
                        input type="radio" name="type" value="All"
                            checked[selected == "All"];
                        span { "All" }
                    }
                    @for t in ALL_PROPERTY_TYPES {
                        label class="radio" {
                            input type="radio" name="type" value=(t)
                                checked[selected == t.to_string()];
                            span { (t) }
                        }
                    }
                }

                div class="field" {
                    label for="max_price" {
                        "Budget (Max: " (format_inr(criteria.price_max.max(0))) ")"
                    }
                    input type="range" id="max_price" name="max_price"
                        min="0"
                        max=(kind.price_ceiling())
                        step=(kind.price_step())
                        value=(criteria.price_max.max(0));
                    div class="range-ends" {
                        span { "Min" }
                        span { "Max" }
                    }
                }

                button type="submit" class="btn btn-primary" { "Apply Filters" }
                a href=(kind.browse_path()) class="btn btn-outline" { "Reset Filters" }
            }
        }
    }
}
