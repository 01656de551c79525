//! Library components of the tabclean CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
