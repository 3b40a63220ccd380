//! Report module - run artifacts and the console summary

pub mod exclusion;
pub mod summary;

pub use exclusion::*;
pub use summary::*;
