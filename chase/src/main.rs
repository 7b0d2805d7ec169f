//! Chase: watch an A* pursuer hunt a fleeing evader in the terminal.
//!
//! Run: `cargo run --bin chase -- [CONFIG.json]`
//! Set `RUST_LOG=debug` for per-turn and per-search logging.

use std::io;
use std::thread;
use std::time::Duration;

use chase_lib::{SimConfig, Simulation, prompt, render};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => {
            info!("chase: loading {path}");
            SimConfig::load(&path)?
        }
        None => SimConfig::default(),
    };

    let mut stdout = io::stdout();
    let (pursuer_speed, evader_speed) = prompt::prompt_speeds(
        &mut io::stdin().lock(),
        &mut stdout,
        (config.pursuer.speed, config.evader.speed),
    )?;
    config.pursuer.speed = pursuer_speed;
    config.evader.speed = evader_speed;

    let mut sim = Simulation::new(&config)?;
    let delay = Duration::from_millis(config.frame_delay_ms);
    render::draw(&mut stdout, &sim, None)?;
    thread::sleep(delay);

    let outcome = loop {
        let outcome = sim.step()?;
        render::draw(&mut stdout, &sim, Some(outcome))?;
        if outcome.is_final() {
            break outcome;
        }
        thread::sleep(delay);
    };

    println!("{outcome}");
    Ok(())
}
