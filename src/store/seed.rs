// src/store/seed.rs

use crate::domain::property::{ListingKind, Property, PropertyType};

fn amenities(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// The mock dataset the store starts with. Demo data only; posting a
/// property prepends to this.
pub fn initial_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "Luxury Villa with Private Pool".to_string(),
            description: "Experience luxury living in this sprawling 4BHK villa situated in \
                          the quiet suburbs. Features a private pool, landscaped gardens, and \
                          smart home automation."
                .to_string(),
            price: 45_000_000,
            location: "Sector 150".to_string(),
            city: "Noida".to_string(),
            property_type: PropertyType::Villa,
            listing_kind: ListingKind::ForSale,
            bedrooms: 4,
            bathrooms: 5,
            area: 3200,
            amenities: amenities(&["Pool", "Garden", "Smart Home", "24x7 Security"]),
            owner_contact: "+91 98765 43210".to_string(),
            date_posted: "2023-10-15".to_string(),
            is_featured: true,
        },
        Property {
            id: "2".to_string(),
            title: "Modern 2BHK in City Center".to_string(),
            description: "A cozy and modern apartment perfect for young professionals. Close \
                          to metro station and shopping malls."
                .to_string(),
            price: 35_000,
            location: "Sector 18".to_string(),
            city: "Noida".to_string(),
            property_type: PropertyType::Apartment,
            listing_kind: ListingKind::ForRent,
            bedrooms: 2,
            bathrooms: 2,
            area: 1100,
            amenities: amenities(&["Gym", "Parking", "Clubhouse"]),
            owner_contact: "+91 98765 43211".to_string(),
            date_posted: "2023-10-20".to_string(),
            is_featured: true,
        },
        Property {
            id: "3".to_string(),
            title: "Spacious 3BHK High Rise".to_string(),
            description: "Enjoy panoramic views of the city from this 25th floor apartment. \
                          Premium fittings and access to all society amenities."
                .to_string(),
            price: 12_500_000,
            location: "Sector 137".to_string(),
            city: "Noida".to_string(),
            property_type: PropertyType::Apartment,
            listing_kind: ListingKind::ForSale,
            bedrooms: 3,
            bathrooms: 3,
            area: 1850,
            amenities: amenities(&["Gym", "Pool", "Tennis Court", "Power Backup"]),
            owner_contact: "+91 98765 43212".to_string(),
            date_posted: "2023-10-22".to_string(),
            is_featured: false,
        },
        Property {
            id: "4".to_string(),
            title: "Commercial Office Space".to_string(),
            description: "Plug and play office space suitable for startups. Includes \
                          conference rooms and cafeteria."
                .to_string(),
            price: 85_000,
            location: "Sector 62".to_string(),
            city: "Noida".to_string(),
            property_type: PropertyType::Commercial,
            listing_kind: ListingKind::ForRent,
            bedrooms: 0,
            bathrooms: 2,
            area: 2500,
            amenities: amenities(&["Cafeteria", "Conference Room", "Central AC"]),
            owner_contact: "+91 98765 43213".to_string(),
            date_posted: "2023-10-25".to_string(),
            is_featured: false,
        },
        Property {
            id: "5".to_string(),
            title: "Premium Plot in Gated Community".to_string(),
            description: "Build your dream home on this corner plot located in a lush green \
                          gated community."
                .to_string(),
            price: 6_500_000,
            location: "Greater Noida West".to_string(),
            city: "Noida".to_string(),
            property_type: PropertyType::Plot,
            listing_kind: ListingKind::ForSale,
            bedrooms: 0,
            bathrooms: 0,
            area: 1500,
            amenities: amenities(&["Park", "Security", "Water Connection"]),
            owner_contact: "+91 98765 43214".to_string(),
            date_posted: "2023-10-28".to_string(),
            is_featured: false,
        },
    ]
}
