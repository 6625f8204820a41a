pub mod home;
pub mod listings;
pub mod post_property;
pub mod property_details;

pub use home::home_page;
pub use listings::{listings_page, ListingsVm};
pub use post_property::post_property_page;
pub use property_details::property_details_page;
