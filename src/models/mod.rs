pub mod report;
pub mod snapshot;

pub use report::*;
pub use snapshot::*;
