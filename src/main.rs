mod app;
mod args;
mod assertion;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;
mod run;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
