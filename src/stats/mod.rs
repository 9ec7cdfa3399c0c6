pub mod ingest;

pub mod ledger;
pub use ledger::*;

pub mod metrics;

pub mod profile;
pub use profile::*;

pub mod report;
pub use report::*;
