pub mod fields;
pub mod invariants;
pub mod validation;

pub use validation::validate_session;
