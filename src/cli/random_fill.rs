use std::io::{self, BufRead, Write};
use tracing::debug;

use super::console::{parse_number, Answer, Console};
use super::Flow;
use crate::models::BookingRequest;
use crate::services::SeatingEngine;

const MENU: &str = "\n========================================\n   CINEMA SEATING - Menu\n========================================\n\
1. Print seating\n\
2. Show counts and occupancy\n\
3. Check if a row is usable\n\
4. Check if a row can seat a group\n\
5. Suggest best row\n\
6. Book a group and show updated seating\n\
7. Exit";

/// Menu for the randomly occupied auditorium. Returns when the user exits or
/// input ends.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &mut SeatingEngine,
) -> io::Result<()> {
    loop {
        console.say(MENU)?;
        let Some(input) = console.ask("Choose an option (1-7): ")? else {
            return Ok(());
        };
        let Some(choice) = parse_number(&input) else {
            console.say("Invalid input. Enter a number 1-7.")?;
            continue;
        };
        debug!("Menu choice {}", choice);

        let flow = match choice {
            1 => {
                console.say(format!("\n{}", engine.render()))?;
                Flow::Continue
            }
            2 => show_counts(console, engine)?,
            3 => check_row(console, engine)?,
            4 => check_group(console, engine)?,
            5 => suggest_row(console, engine)?,
            6 => book_group(console, engine)?,
            7 => {
                console.say("Goodbye!")?;
                Flow::Quit
            }
            _ => {
                console.say("Invalid option. Please choose 1-7.")?;
                Flow::Continue
            }
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn ask_row<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rows: usize,
) -> io::Result<Answer<usize>> {
    console.ask_in_range(
        &format!("Enter row index (0-{}): ", rows.saturating_sub(1)),
        0..rows,
        "Invalid input. Enter a number.",
        &format!("Invalid row. Enter 0 to {}.", rows.saturating_sub(1)),
    )
}

fn ask_group_size<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cols: usize,
) -> io::Result<Answer<usize>> {
    console.ask_in_range(
        &format!("Enter group size (1-{}): ", cols),
        1..cols + 1,
        "Invalid input. Enter a number.",
        &format!("Invalid group size. Enter 1 to {}.", cols),
    )
}

fn show_counts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &SeatingEngine,
) -> io::Result<Flow> {
    console.say("\n--- Counts and occupancy ---")?;
    console.say(format!("Available: {}", engine.available_count()))?;
    console.say(format!("Booked: {}", engine.booked_count()))?;
    console.say(format!("Broken: {}", engine.broken_count()))?;
    console.say(format!("VIP: {}", engine.vip_count()))?;
    console.say(format!("Occupancy rate: {:.1}%", engine.occupancy_rate()))?;
    Ok(Flow::Continue)
}

fn check_row<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &SeatingEngine,
) -> io::Result<Flow> {
    match ask_row(console, engine.rows())? {
        Answer::Closed => Ok(Flow::Quit),
        Answer::Rejected => Ok(Flow::Continue),
        Answer::Value(row) => {
            let verdict = if engine.is_row_usable(row) {
                "usable"
            } else {
                "not usable"
            };
            console.say(format!("Row {} is {}.", row, verdict))?;
            Ok(Flow::Continue)
        }
    }
}

fn check_group<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &SeatingEngine,
) -> io::Result<Flow> {
    let row = match ask_row(console, engine.rows())? {
        Answer::Closed => return Ok(Flow::Quit),
        Answer::Rejected => return Ok(Flow::Continue),
        Answer::Value(row) => row,
    };
    match ask_group_size(console, engine.cols())? {
        Answer::Closed => Ok(Flow::Quit),
        Answer::Rejected => Ok(Flow::Continue),
        Answer::Value(size) => {
            let can = if engine.can_seat_group_in_row(row, size) {
                ""
            } else {
                "not "
            };
            console.say(format!("Row {} can {}seat a group of {}.", row, can, size))?;
            Ok(Flow::Continue)
        }
    }
}

fn suggest_row<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &SeatingEngine,
) -> io::Result<Flow> {
    let size = match ask_group_size(console, engine.cols())? {
        Answer::Closed => return Ok(Flow::Quit),
        Answer::Rejected => return Ok(Flow::Continue),
        Answer::Value(size) => size,
    };
    match engine.suggest_best_row(size) {
        Some(row) => console.say(format!(
            "Suggested best row: {} (most available seats).",
            row
        ))?,
        None => console.say(format!("No row can seat a group of {}.", size))?,
    }
    Ok(Flow::Continue)
}

fn book_group<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &mut SeatingEngine,
) -> io::Result<Flow> {
    let size = match ask_group_size(console, engine.cols())? {
        Answer::Closed => return Ok(Flow::Quit),
        Answer::Rejected => return Ok(Flow::Continue),
        Answer::Value(size) => size,
    };
    if engine.book_group(BookingRequest::Auto { group_size: size }) {
        console.say(format!("Group of {} booked. Updated seating:", size))?;
        console.say(format!("\n{}", engine.render()))?;
    } else {
        console.say(format!("Could not book a group of {}.", size))?;
    }
    Ok(Flow::Continue)
}
