pub(crate) mod progress;
mod runner;
pub(crate) mod summary;

pub use runner::run_local;
