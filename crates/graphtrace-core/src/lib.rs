//! Graphtrace Core Library
//!
//! Trace engine for graph traversal and shortest-path algorithms. Every
//! algorithm returns the full, ordered sequence of steps it performed so a
//! host can animate, scrub, or replay it.

pub mod algos;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod trace;

pub use dispatch::{run, run_algorithm, Algorithm};
pub use graph::{Edge, Graph, Node};
pub use trace::{Step, StepKind, Trace};
