pub mod aggregator;
pub mod droid;

pub use aggregator::*;
pub use droid::*;
