//! Simulation settings, loadable from JSON.

use std::path::Path;

use chase_core::{Grid, GridError, Point, Range};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Per-agent settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Starting cell. `None` picks a random free cell.
    pub pos: Option<Point>,
    /// Moves the agent may make per turn.
    pub speed: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            pos: None,
            speed: 1,
        }
    }
}

/// Settings for one pursuit run.
///
/// Every field has a default, so a JSON file only needs the keys it
/// changes:
///
/// ```json
/// { "width": 20, "height": 10, "seed": 7, "pursuer": { "speed": 2 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    /// Chance that a cell starts blocked, in `[0, 1)`. Ignored when `map` is
    /// set.
    pub obstacle_density: f64,
    /// Seed for obstacle and agent placement. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub max_turns: u32,
    /// Delay between rendered frames, in milliseconds.
    pub frame_delay_ms: u64,
    pub pursuer: AgentConfig,
    pub evader: AgentConfig,
    /// Hand-made map in the [`Grid::parse`] format. Overrides `width`,
    /// `height` and `obstacle_density`.
    pub map: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 40,
            obstacle_density: 0.2,
            seed: None,
            max_turns: 200,
            frame_delay_ms: 150,
            pursuer: AgentConfig::default(),
            evader: AgentConfig::default(),
            map: None,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json(&s)
    }

    /// The hand-made map, if one is configured.
    pub fn terrain(&self) -> Result<Option<Grid>, ConfigError> {
        Ok(self.map.as_deref().map(Grid::parse).transpose()?)
    }

    /// Check every setting, and the agents against the map if there is one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let terrain = self.terrain()?;
        let bounds = match &terrain {
            Some(g) => g.bounds(),
            None => {
                if self.width <= 0 || self.height <= 0 {
                    return Err(GridError::DegenerateGrid {
                        width: self.width,
                        height: self.height,
                    }
                    .into());
                }
                Range::new(0, 0, self.width, self.height)
            }
        };

        if !(0.0..1.0).contains(&self.obstacle_density) {
            return Err(ConfigError::Invalid(format!(
                "obstacle_density {} not in [0, 1)",
                self.obstacle_density
            )));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::Invalid("max_turns must be positive".into()));
        }

        for (name, agent) in [("pursuer", &self.pursuer), ("evader", &self.evader)] {
            if agent.speed == 0 {
                return Err(ConfigError::Invalid(format!("{name} speed must be positive")));
            }
            let Some(p) = agent.pos else {
                continue;
            };
            if !bounds.contains(p) {
                return Err(ConfigError::Invalid(format!(
                    "{name} position {p} outside {bounds}"
                )));
            }
            if let Some(g) = &terrain {
                if !g.is_passable(p) {
                    return Err(ConfigError::Invalid(format!(
                        "{name} position {p} is blocked"
                    )));
                }
            }
        }

        if self.pursuer.pos.is_some() && self.pursuer.pos == self.evader.pos {
            return Err(ConfigError::Invalid(
                "pursuer and evader share a cell".into(),
            ));
        }
        Ok(())
    }
}
