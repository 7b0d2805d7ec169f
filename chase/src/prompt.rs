//! Console prompt for the agents' speeds.

use std::io::{self, BufRead, Write};

/// Parse a line of two positive integers. An empty line means "keep the
/// defaults" and yields `Ok(None)`.
pub fn parse_speeds(line: &str) -> Result<Option<(u32, u32)>, String> {
    let fields: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|f| !f.is_empty())
        .collect();
    match fields.as_slice() {
        [] => Ok(None),
        [a, b] => {
            let a = parse_speed(a)?;
            let b = parse_speed(b)?;
            Ok(Some((a, b)))
        }
        _ => Err(format!("expected two integers, got {}", fields.len())),
    }
}

fn parse_speed(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(0) => Err("speed must be positive".into()),
        Ok(v) => Ok(v),
        Err(_) => Err(format!("not a positive integer: {s}")),
    }
}

/// Ask for the pursuer and evader speeds until a valid answer arrives.
/// End of input keeps `defaults`.
pub fn prompt_speeds<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    defaults: (u32, u32),
) -> io::Result<(u32, u32)> {
    let mut line = String::new();
    loop {
        write!(
            out,
            "Pursuer and evader speed [{} {}]: ",
            defaults.0, defaults.1
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(defaults);
        }
        match parse_speeds(&line) {
            Ok(Some(speeds)) => return Ok(speeds),
            Ok(None) => return Ok(defaults),
            Err(e) => {
                log::warn!("prompt: rejected {:?}: {e}", line.trim_end());
                writeln!(out, "{e}")?;
            }
        }
    }
}
