//! The pursuit turn loop.
//!
//! Each turn the pursuer plans an A* path to the evader and walks up to its
//! speed along it; the evader then flees. The grid itself is never written
//! during play.

use std::fmt;

use chase_core::{BLOCKED, Grid, GridError, OPEN, Point};
use chase_paths::astar_path;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::{Agent, flee};
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Result of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both agents moved; the chase goes on.
    Moved,
    /// The pursuer reached the evader's cell.
    Caught { turn: u32 },
    /// No path leads from the pursuer to the evader.
    Blocked { turn: u32 },
    /// The turn limit ran out.
    TimedOut { turns: u32 },
}

impl Outcome {
    /// Whether the simulation is over.
    pub fn is_final(self) -> bool {
        !matches!(self, Self::Moved)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved => write!(f, "the chase goes on"),
            Self::Caught { turn } => write!(f, "evader caught on turn {turn}"),
            Self::Blocked { turn } => write!(f, "pursuer blocked on turn {turn}"),
            Self::TimedOut { turns } => write!(f, "evader escaped for {turns} turns"),
        }
    }
}

/// A pursuit between two agents on a terrain grid.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    pursuer: Agent,
    evader: Agent,
    turn: u32,
    max_turns: u32,
    finished: Option<Outcome>,
}

impl Simulation {
    /// Build a simulation from a config, seeding placement from
    /// `config.seed` or the OS.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Build a simulation from a config using `rng` for random obstacles and
    /// for agents without a configured position. The config is validated
    /// first.
    pub fn with_rng<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut grid = match config.terrain()? {
            Some(g) => g,
            None => random_grid(config.width, config.height, config.obstacle_density, rng)?,
        };

        // Configured start cells are never buried under random obstacles.
        for p in [config.pursuer.pos, config.evader.pos].into_iter().flatten() {
            if !grid.is_passable(p) {
                grid.clear(p)?;
            }
        }

        let pursuer_pos = match config.pursuer.pos {
            Some(p) => p,
            None => random_free_cell(&grid, config.evader.pos, rng)?,
        };
        let evader_pos = match config.evader.pos {
            Some(p) => p,
            None => random_free_cell(&grid, Some(pursuer_pos), rng)?,
        };
        info!(
            "chase: {}x{} grid, {} blocked, pursuer {pursuer_pos}, evader {evader_pos}",
            grid.width(),
            grid.height(),
            grid.blocked_count()
        );

        Self::with_grid(
            grid,
            Agent::new(pursuer_pos, config.pursuer.speed),
            Agent::new(evader_pos, config.evader.speed),
            config.max_turns,
        )
    }

    /// Build a simulation on an existing grid.
    pub fn with_grid(
        grid: Grid,
        pursuer: Agent,
        evader: Agent,
        max_turns: u32,
    ) -> Result<Self, ConfigError> {
        for agent in [&pursuer, &evader] {
            grid.check(agent.pos)?;
            if agent.speed == 0 {
                return Err(ConfigError::Invalid(format!(
                    "agent at {} has zero speed",
                    agent.pos
                )));
            }
        }
        if pursuer.pos == evader.pos {
            return Err(ConfigError::Invalid(
                "pursuer and evader share a cell".into(),
            ));
        }
        Ok(Self {
            grid,
            pursuer,
            evader,
            turn: 0,
            max_turns,
            finished: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pursuer(&self) -> &Agent {
        &self.pursuer
    }

    pub fn evader(&self) -> &Agent {
        &self.evader
    }

    /// Turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The final outcome, once the simulation is over.
    pub fn finished(&self) -> Option<Outcome> {
        self.finished
    }

    /// Play one turn. Once the simulation is over, returns the final outcome
    /// again without moving anyone.
    pub fn step(&mut self) -> Result<Outcome, GridError> {
        if let Some(outcome) = self.finished {
            return Ok(outcome);
        }
        self.turn += 1;
        let outcome = self.play_turn(self.turn)?;
        if outcome.is_final() {
            info!("chase: {outcome}");
            self.finished = Some(outcome);
        }
        Ok(outcome)
    }

    /// Play until the simulation is over, calling `on_turn` after each turn.
    pub fn run(
        &mut self,
        mut on_turn: impl FnMut(&Self, Outcome),
    ) -> Result<Outcome, GridError> {
        loop {
            let outcome = self.step()?;
            on_turn(self, outcome);
            if outcome.is_final() {
                return Ok(outcome);
            }
        }
    }

    fn play_turn(&mut self, turn: u32) -> Result<Outcome, GridError> {
        let Some(path) = astar_path(&self.grid, self.pursuer.pos, self.evader.pos)? else {
            warn!(
                "chase: turn {turn}: no path from {} to {}",
                self.pursuer.pos, self.evader.pos
            );
            self.pursuer.path.clear();
            return Ok(Outcome::Blocked { turn });
        };

        let moves = (self.pursuer.speed as usize).min(path.edges());
        self.pursuer.pos = path.step(moves);
        self.pursuer.path = path.into_points().split_off(moves);
        debug!("chase: turn {turn}: pursuer -> {}", self.pursuer.pos);
        if self.pursuer.pos == self.evader.pos {
            return Ok(Outcome::Caught { turn });
        }

        self.evader.pos = flee(
            &self.grid,
            self.evader.pos,
            self.pursuer.pos,
            self.evader.speed,
        );
        debug!("chase: turn {turn}: evader -> {}", self.evader.pos);

        if turn >= self.max_turns {
            return Ok(Outcome::TimedOut { turns: turn });
        }
        Ok(Outcome::Moved)
    }
}

/// A grid where each cell is blocked with probability `density`.
fn random_grid<R: Rng>(
    width: i32,
    height: i32,
    density: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    Grid::from_fn(width, height, |_| {
        if rng.random_bool(density) {
            BLOCKED
        } else {
            OPEN
        }
    })
}

fn random_free_cell<R: Rng>(
    grid: &Grid,
    taken: Option<Point>,
    rng: &mut R,
) -> Result<Point, ConfigError> {
    let free: Vec<Point> = grid
        .iter()
        .filter(|c| c.is_passable() && Some(c.pos) != taken)
        .map(|c| c.pos)
        .collect();
    if free.is_empty() {
        return Err(ConfigError::Invalid("no free cell to place an agent".into()));
    }
    Ok(free[rng.random_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;

    fn open_sim(
        size: i32,
        pursuer: (Point, u32),
        evader: (Point, u32),
        max_turns: u32,
    ) -> Simulation {
        Simulation::with_grid(
            Grid::new(size, size).unwrap(),
            Agent::new(pursuer.0, pursuer.1),
            Agent::new(evader.0, evader.1),
            max_turns,
        )
        .unwrap()
    }

    #[test]
    fn faster_pursuer_catches_evader() {
        let mut sim = open_sim(10, (Point::new(0, 0), 2), (Point::new(5, 5), 1), 50);
        let mut turns = 0;
        let outcome = sim.run(|_, _| turns += 1).unwrap();
        assert_eq!(outcome, Outcome::Caught { turn: 4 });
        assert_eq!(turns, 4);
        assert_eq!(sim.pursuer().pos, Point::new(8, 8));
        assert_eq!(sim.evader().pos, Point::new(8, 8));
    }

    #[test]
    fn cornered_evader_is_caught_at_equal_speed() {
        let mut sim = open_sim(8, (Point::new(0, 0), 1), (Point::new(3, 3), 1), 50);
        assert_eq!(sim.run(|_, _| {}).unwrap(), Outcome::Caught { turn: 7 });
    }

    #[test]
    fn first_turn_moves_both_agents() {
        let mut sim = open_sim(10, (Point::new(0, 0), 1), (Point::new(9, 9), 1), 1);
        assert_eq!(sim.step().unwrap(), Outcome::TimedOut { turns: 1 });
        assert_eq!(sim.pursuer().pos, Point::new(1, 1));
        assert_eq!(sim.evader().pos, Point::new(9, 9));
        assert_eq!(sim.pursuer().path.first(), Some(&Point::new(1, 1)));
        assert_eq!(sim.pursuer().path.last(), Some(&Point::new(9, 9)));
    }

    #[test]
    fn walled_off_pursuer_is_blocked() {
        let grid = Grid::parse(
            "\
..#..
..#..
..#..",
        )
        .unwrap();
        let mut sim = Simulation::with_grid(
            grid,
            Agent::new(Point::new(0, 1), 1),
            Agent::new(Point::new(4, 1), 1),
            10,
        )
        .unwrap();
        assert_eq!(sim.step().unwrap(), Outcome::Blocked { turn: 1 });
        assert!(sim.pursuer().path.is_empty());
        assert_eq!(sim.pursuer().pos, Point::new(0, 1));
    }

    #[test]
    fn finished_simulation_stays_finished() {
        let mut sim = open_sim(10, (Point::new(0, 0), 1), (Point::new(5, 5), 1), 1);
        let first = sim.step().unwrap();
        assert!(first.is_final());
        let pos = sim.pursuer().pos;
        assert_eq!(sim.step().unwrap(), first);
        assert_eq!(sim.turn(), 1);
        assert_eq!(sim.pursuer().pos, pos);
        assert_eq!(sim.finished(), Some(first));
    }

    #[test]
    fn with_grid_rejects_bad_agents() {
        let g = Grid::new(3, 3).unwrap();
        assert!(matches!(
            Simulation::with_grid(
                g.clone(),
                Agent::new(Point::new(3, 0), 1),
                Agent::new(Point::new(0, 0), 1),
                5
            ),
            Err(ConfigError::Grid(GridError::OutOfBounds { .. }))
        ));
        assert!(matches!(
            Simulation::with_grid(
                g,
                Agent::new(Point::new(1, 1), 1),
                Agent::new(Point::new(1, 1), 1),
                5
            ),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = SimConfig {
            width: 20,
            height: 15,
            seed: Some(42),
            ..SimConfig::default()
        };
        let a = Simulation::new(&config).unwrap();
        let b = Simulation::new(&config).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.pursuer(), b.pursuer());
        assert_eq!(a.evader(), b.evader());
        assert!(a.grid().is_passable(a.pursuer().pos));
        assert!(a.grid().is_passable(a.evader().pos));
        assert_ne!(a.pursuer().pos, a.evader().pos);
    }

    #[test]
    fn configured_positions_are_cleared() {
        let config = SimConfig {
            width: 6,
            height: 6,
            obstacle_density: 0.9,
            pursuer: AgentConfig {
                pos: Some(Point::new(0, 0)),
                speed: 1,
            },
            evader: AgentConfig {
                pos: Some(Point::new(5, 5)),
                speed: 1,
            },
            ..SimConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let sim = Simulation::with_rng(&config, &mut rng).unwrap();
        assert!(sim.grid().is_passable(Point::new(0, 0)));
        assert!(sim.grid().is_passable(Point::new(5, 5)));
        assert_eq!(sim.pursuer().pos, Point::new(0, 0));
    }

    #[test]
    fn with_rng_rejects_invalid_config() {
        let config = SimConfig {
            obstacle_density: 1.5,
            ..SimConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Simulation::with_rng(&config, &mut rng),
            Err(ConfigError::Invalid(_))
        ));

        let config = SimConfig {
            width: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            Simulation::with_rng(&config, &mut rng),
            Err(ConfigError::Grid(GridError::DegenerateGrid { .. }))
        ));
    }

    #[test]
    fn zero_density_grid_is_open() {
        let mut rng = StdRng::seed_from_u64(9);
        let g = random_grid(7, 4, 0.0, &mut rng).unwrap();
        assert_eq!(g.blocked_count(), 0);
    }

    #[test]
    fn no_room_for_agents() {
        let config = SimConfig {
            map: Some("#.#".into()),
            ..SimConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Simulation::with_rng(&config, &mut rng),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn map_config_places_agents_on_open_cells() {
        let config = SimConfig {
            map: Some("#..#\n#..#".into()),
            seed: Some(5),
            ..SimConfig::default()
        };
        let sim = Simulation::new(&config).unwrap();
        for p in [sim.pursuer().pos, sim.evader().pos] {
            assert!(sim.grid().is_passable(p));
            assert!(p.x == 1 || p.x == 2);
        }
    }
}
