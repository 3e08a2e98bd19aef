pub mod checklist;
pub mod cli;
pub mod loader;
pub mod logging;
pub mod report;
pub mod runner;

pub mod error;
