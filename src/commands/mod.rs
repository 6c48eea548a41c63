//! Command implementations for graphtrace

pub mod algorithms;
pub mod dispatch;
pub mod generate;
pub mod input;
pub mod replay;
pub mod run;
