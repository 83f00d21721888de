//! Library components of the `gdc-tools` command-line interface.

pub mod input;
pub mod logging;
pub mod pipeline;
pub mod types;
