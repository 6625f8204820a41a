pub mod properties;
pub mod seed;

pub use properties::PropertyStore;
