//! ASCII and terminal rendering of a [`Simulation`].

use std::io::{self, Write};

use chase_core::{Grid, Point};
use crossterm::{
    cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::sim::{Outcome, Simulation};

pub const PURSUER: char = 'A';
pub const EVADER: char = 'B';
pub const PLAN: char = '*';

/// The glyph shown at `p`: agents first, then the pursuer's plan, then
/// terrain.
pub fn glyph_at(sim: &Simulation, p: Point) -> char {
    if p == sim.pursuer().pos {
        PURSUER
    } else if p == sim.evader().pos {
        EVADER
    } else if sim.pursuer().path.contains(&p) {
        PLAN
    } else {
        sim.grid().cost(p).map_or(' ', Grid::glyph)
    }
}

/// Render the simulation as plain text, one line per grid row.
pub fn render_ascii(sim: &Simulation) -> String {
    let grid = sim.grid();
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for y in 0..grid.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width() {
            out.push(glyph_at(sim, Point::new(x, y)));
        }
    }
    out
}

fn color_of(ch: char) -> Color {
    match ch {
        PURSUER => Color::Red,
        EVADER => Color::Green,
        PLAN => Color::Cyan,
        '#' => Color::DarkGrey,
        '.' => Color::Grey,
        _ => Color::Yellow,
    }
}

/// Draw one frame to a terminal: clear, the coloured grid, then a status
/// line.
pub fn draw<W: Write>(out: &mut W, sim: &Simulation, outcome: Option<Outcome>) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    let grid = sim.grid();
    for y in 0..grid.height() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        for x in 0..grid.width() {
            let ch = glyph_at(sim, Point::new(x, y));
            queue!(out, style::PrintStyledContent(ch.with(color_of(ch))))?;
        }
    }
    let status = match outcome {
        Some(o) => format!("turn {}: {o}", sim.turn()),
        None => format!(
            "pursuer {} (speed {}), evader {} (speed {})",
            sim.pursuer().pos,
            sim.pursuer().speed,
            sim.evader().pos,
            sim.evader().speed
        ),
    };
    queue!(
        out,
        cursor::MoveTo(0, grid.height() as u16),
        style::Print(status),
        style::Print("\n")
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;

    fn sim_on(map: &str, pursuer: Point, evader: Point) -> Simulation {
        Simulation::with_grid(
            Grid::parse(map).unwrap(),
            Agent::new(pursuer, 1),
            Agent::new(evader, 1),
            10,
        )
        .unwrap()
    }

    #[test]
    fn initial_frame() {
        let sim = sim_on("....\n.#3.\n....", Point::new(0, 0), Point::new(3, 2));
        assert_eq!(render_ascii(&sim), "A...\n.#3.\n...B");
    }

    #[test]
    fn plan_is_drawn_after_a_turn() {
        let mut sim = sim_on(".....\n.....", Point::new(0, 0), Point::new(4, 0));
        sim.step().unwrap();
        // Pursuer stepped once; the evader fled along the edge.
        let frame = render_ascii(&sim);
        assert_eq!(frame.lines().count(), 2);
        assert_eq!(frame.matches(PURSUER).count(), 1);
        assert_eq!(frame.matches(EVADER).count(), 1);
        assert!(frame.contains(PLAN));
    }

    #[test]
    fn draw_writes_status() {
        let sim = sim_on("..\n..", Point::new(0, 0), Point::new(1, 1));
        let mut buf = Vec::new();
        draw(&mut buf, &sim, None).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("pursuer (0, 0) (speed 1)"));
        assert!(text.contains('A'));
    }
}
