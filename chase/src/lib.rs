//! Chase: a turn-based pursuit on a terrain grid.
//!
//! The pursuer replans with A* (`chase-paths`) every turn and walks up to its
//! speed along the path; the evader steps away greedily. Configuration,
//! rendering and the console prompt used by the `chase` binary live here too.

pub mod agent;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod sim;

pub use agent::{Agent, flee};
pub use config::{AgentConfig, SimConfig};
pub use error::ConfigError;
pub use sim::{Outcome, Simulation};
