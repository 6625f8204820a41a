mod details_tests;
mod listings_tests;
mod post_property_tests;
