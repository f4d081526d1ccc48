pub mod dto;
pub mod error;
pub mod outcome;
pub mod ports;
pub mod resources;
pub mod services;
pub mod validation;

pub use error::ApplicationResult;
pub use outcome::{FieldErrors, ResourceOutcome};
pub use validation::Payload;
