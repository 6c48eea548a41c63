//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "graphtrace.toml";

/// Top-level graphtrace configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Circular layout used when graphs are generated
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Random graph generation parameters
    #[serde(default)]
    pub random: RandomGraphConfig,

    /// Defaults for `run` and `replay`
    #[serde(default)]
    pub run: RunConfig,
}

/// Circular layout parameters for generated node coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_center_x")]
    pub center_x: f64,
    #[serde(default = "default_center_y")]
    pub center_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            center_x: default_center_x(),
            center_y: default_center_y(),
        }
    }
}

/// Parameters for random graph generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomGraphConfig {
    /// Probability that any pair of nodes is connected (0.0-1.0)
    #[serde(default = "default_edge_probability")]
    pub edge_probability: f64,

    /// Upper bound for generated edge weights (inclusive, lower bound is 1)
    #[serde(default = "default_max_weight")]
    pub max_weight: u32,

    /// Centre of the circle generated graphs are laid out on
    #[serde(default = "default_random_center")]
    pub center_x: f64,
    #[serde(default = "default_random_center")]
    pub center_y: f64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            edge_probability: default_edge_probability(),
            max_weight: default_max_weight(),
            center_x: default_random_center(),
            center_y: default_random_center(),
        }
    }
}

/// Defaults applied to algorithm runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Algorithm used when none is given on the command line
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Build graphs from matrices as directed
    #[serde(default)]
    pub directed: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            directed: false,
        }
    }
}

fn default_radius() -> f64 {
    200.0
}

fn default_center_x() -> f64 {
    300.0
}

fn default_center_y() -> f64 {
    250.0
}

fn default_edge_probability() -> f64 {
    0.3
}

fn default_max_weight() -> u32 {
    10
}

fn default_random_center() -> f64 {
    250.0
}

fn default_algorithm() -> String {
    "bfs".to_string()
}
