//! Command line and HTTP boundary for the `greet` library.

pub mod cli;
pub mod logging;
pub mod server;
