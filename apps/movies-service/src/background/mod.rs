//! Background work - the scheduled catalog sync.

pub mod scheduler;
mod sync_job;

pub use sync_job::run_sync;
