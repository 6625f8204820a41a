// templates/components/describe.rs

use maud::{html, Markup};

/// The description textarea plus the AI Write button, as a swappable
/// htmx fragment. The describe endpoint re-renders this whole block:
/// filled in on success, with an alert on failure.
pub fn description_field(
    value: &str,
    alert: Option<&str>,
    describer_enabled: bool,
) -> Markup {
    html! {
        div class="field" id="description-field" {
            label for="description" { "Description" }
            @if let Some(msg) = alert {
                p class="alert" role="alert" { (msg) }
            }
            textarea id="description" name="description" rows="5"
                placeholder="Describe your property..." { (value) }
            @if describer_enabled {
                button type="button" class="btn btn-ai"
                    hx-post="/sell/describe"
                    hx-include="closest form"
                    hx-target="#description-field"
                    hx-swap="outerHTML"
                {
                    "✦ AI Write"
                }
            } @else {
                p class="hint" { "Set GEMINI_API_KEY to enable AI descriptions." }
            }
        }
    }
}
