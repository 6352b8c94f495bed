//! Process-wide helpers shared by the autoscaler's binaries.

pub mod utils;
