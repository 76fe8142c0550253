//! Library components of the `tms` CLI.

pub mod logging;
