//! Performance measures computed over a batch of experiments.

pub mod raw;

pub use raw::SteadyStateRaw;
