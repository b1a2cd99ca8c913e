// Utility functions
pub mod error;
pub mod response;
pub mod validation;

pub use error::*;
pub use response::*;
pub use validation::*;
