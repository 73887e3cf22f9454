pub mod dsl;
pub mod layout;
pub mod model;
