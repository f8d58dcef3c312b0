pub mod console;
pub mod random_fill;
pub mod vip_rows;

use std::io::{self, BufRead, Write};

use crate::config::CinemaConfig;
use crate::models::Profile;
use crate::services::SeatingEngine;

pub use console::{Answer, Console};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Resolves the grid size, prompting for whatever the configuration left
/// unset. `None` means input ended before both numbers were given.
pub fn resolve_dimensions<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &CinemaConfig,
) -> io::Result<Option<(usize, usize)>> {
    let (rows, cols) = cfg.dimensions();
    let error = "Invalid. Enter a positive number.";

    let rows = match rows {
        Some(rows) => rows,
        None => match console.read_positive("Enter number of rows: ", error)? {
            Some(rows) => rows,
            None => return Ok(None),
        },
    };
    let cols = match cols {
        Some(cols) => cols,
        None => match console.read_positive("Enter number of columns: ", error)? {
            Some(cols) => cols,
            None => return Ok(None),
        },
    };
    Ok(Some((rows, cols)))
}

/// Runs the menu that matches the engine's profile until exit or end of input.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &mut SeatingEngine,
) -> io::Result<()> {
    match engine.profile() {
        Profile::RandomFill => random_fill::run(console, engine),
        Profile::VipRows { .. } => vip_rows::run(console, engine),
    }
}
