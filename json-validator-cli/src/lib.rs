//! Command-line front end for `json-validator`.

pub mod cli;
pub mod logging;
pub mod render;
