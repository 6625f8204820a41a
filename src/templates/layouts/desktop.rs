use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Kiwi Sqft" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                (navbar())
                main class="page" {
                    (content)
                }
                (footer())
            }
        }
    }
}

fn navbar() -> Markup {
    html! {
        header class="navbar" {
            a href="/" class="logo" {
                span class="logo-mark" { "⌂" }
                span class="logo-text" { "Kiwi " span class="logo-accent" { "Sqft" } }
            }
            nav {
                ul {
                    li { a href="/buy" { "Buy" } }
                    li { a href="/rent" { "Rent" } }
                    li { a href="/sell" { "Sell" } }
                }
            }
            a href="/sell" class="post-pill" {
                "Post Property " span class="free-badge" { "FREE" }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            div class="footer-grid" {
                div class="footer-about" {
                    h3 { "Kiwi Sqft" }
                    p {
                        "Kiwi Sqft is a complete property platform that brings buyers, \
                         sellers, and agents together at one trusted place. Buyers can \
                         explore the best property options and connect with the right \
                         agents based on their requirements."
                    }
                    p {
                        "Sellers can list their property directly or choose a professional \
                         agent to help them sell faster and smarter."
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { a href="#" { "About Us" } }
                        li { a href="#" { "Careers" } }
                        li { a href="#" { "Terms & Conditions" } }
                        li { a href="#" { "Privacy Policy" } }
                    }
                }
                div {
                    h4 { "Services" }
                    ul {
                        li { a href="/buy" { "Buy Property" } }
                        li { a href="/sell" { "Sell Property" } }
                        li { a href="/rent" { "Rent Property" } }
                        li { a href="#" { "Property Valuation" } }
                    }
                }
                div {
                    h4 { "Contact" }
                    p { "123, Green Park, Sector 62, Noida - 201301" }
                    p { "support@kiwisqft.com" }
                }
            }
            div class="footer-bottom" {
                "© 2024 Kiwi Sqft. All rights reserved."
            }
        }
    }
}
