pub mod analysis;
pub mod config;
pub mod criteria;
pub mod error;
pub mod measures;
pub mod plotting;
pub mod population;
pub mod stats;
pub mod xml;

pub use error::{Error, Result};
