pub mod error;
pub mod config;

// Speedy-trial domain modules
pub mod case;
pub mod caseload;
pub mod speedy_trial;

pub use error::*;
pub use config::*;

pub use case::*;
pub use caseload::*;
pub use speedy_trial::*;
