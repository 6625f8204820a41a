pub mod describe;
pub mod filters;
pub mod money;
pub mod property_card;

// Re-exports for convenience
pub use describe::description_field;
pub use filters::filter_sidebar;
pub use money::format_inr;
pub use property_card::property_card;
