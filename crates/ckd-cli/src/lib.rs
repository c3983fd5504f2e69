pub mod cli;
pub mod commands;
pub mod logging;
pub mod panels;
pub mod summary;
pub mod types;
