//! Pipeline module - the extraction and normalization steps

pub mod battery;
pub mod cohort;
pub mod consolidate;
pub mod extract;
pub mod loader;
pub mod merge;
pub mod recode;

pub use battery::*;
pub use cohort::*;
pub use consolidate::*;
pub use extract::*;
pub use loader::*;
pub use merge::*;
pub use recode::*;
