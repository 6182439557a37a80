//! Library components of the spdoc command-line tool.

pub mod browse;
pub mod logging;
pub mod settings;
