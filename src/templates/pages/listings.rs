// templates/pages/listings.rs

use maud::{html, Markup};

use crate::domain::filter::FilterCriteria;
use crate::domain::property::Property;
use crate::templates::{
    components::{filter_sidebar, property_card},
    desktop_layout,
};

pub struct ListingsVm {
    pub criteria: FilterCriteria,
    pub results: Vec<Property>,
}

pub fn listings_page(vm: &ListingsVm) -> Markup {
    let kind_label = vm.criteria.kind.label();

    desktop_layout(
        &format!("Properties for {kind_label}"),
        html! {
            div class="listings-header" {
                h1 { "Properties for " (kind_label) }
                p class="muted" {
                    (vm.results.len()) " listings found matching your criteria"
                }
            }

            div class="listings-layout" {
                (filter_sidebar(&vm.criteria))

                section class="results" {
                    @if vm.results.is_empty() {
                        div class="empty-state" {
                            h3 { "No properties found" }
                            p { "Try adjusting your filters to see more results." }
                        }
                    } @else {
                        div class="card-grid" {
                            @for p in &vm.results {
                                (property_card(p))
                            }
                        }
                    }
                }
            }
        },
    )
}
