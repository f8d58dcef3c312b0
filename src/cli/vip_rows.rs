use std::io::{self, BufRead, Write};
use tracing::debug;

use super::console::{in_range, parse_number, Answer, Console};
use super::Flow;
use crate::models::BookingRequest;
use crate::services::SeatingEngine;

const BANNER: &str = "========================================\n   CINEMA SEATING SYSTEM - Main Menu\n========================================";
const MENU: &str = "1. Display seats\n2. Analyze rows (occupancy)\n3. Suggest best row for a group\n4. Book a group\n5. Exit";

/// Menu for the auditorium with VIP front rows.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &mut SeatingEngine,
) -> io::Result<()> {
    console.say(BANNER)?;
    loop {
        console.say(MENU)?;
        let Some(input) = console.ask("Choose an option (1-5): ")? else {
            return Ok(());
        };
        if input.is_empty() {
            console.say("Please enter a number.\n")?;
            continue;
        }
        let Some(choice) = parse_number(&input) else {
            console.say("Invalid input. Enter a number 1-5.\n")?;
            continue;
        };
        debug!("Menu choice {}", choice);

        let flow = match choice {
            1 => {
                console.say(format!("\n{}", engine.render()))?;
                Flow::Continue
            }
            2 => {
                console.say(format!("\n{}", engine.render_row_analysis()))?;
                Flow::Continue
            }
            3 => suggest_row(console, engine)?,
            4 => book_group(console, engine)?,
            5 => {
                console.say("Goodbye!")?;
                Flow::Quit
            }
            _ => {
                console.say("Invalid option. Please choose 1-5.\n")?;
                Flow::Continue
            }
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn suggest_row<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &SeatingEngine,
) -> io::Result<Flow> {
    let cols = engine.cols();
    let size = match console.ask_in_range(
        &format!("Enter group size (1-{}): ", cols),
        1..cols + 1,
        "Please enter a valid number.\n",
        &format!("Group size must be between 1 and {}.\n", cols),
    )? {
        Answer::Closed => return Ok(Flow::Quit),
        Answer::Rejected => return Ok(Flow::Continue),
        Answer::Value(size) => size,
    };

    let suggestion = engine
        .suggest_best_row(size)
        .and_then(|row| engine.find_block_start(row, size).map(|start| (row, start)));
    match suggestion {
        Some((row, start)) => console.say(format!(
            "Suggested row: {} (seats {}-{}).\n",
            row,
            start,
            start + size - 1
        ))?,
        None => console.say(format!("No row can fit a group of {} together.\n", size))?,
    }
    Ok(Flow::Continue)
}

fn book_group<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &mut SeatingEngine,
) -> io::Result<Flow> {
    let (rows, cols) = (engine.rows(), engine.cols());

    let prompts = [
        format!("Enter row (0-{}): ", rows.saturating_sub(1)),
        format!("Enter starting seat number (0-{}): ", cols.saturating_sub(1)),
        format!("Enter group size (1-{}): ", cols),
        "VIP booking? (y/n): ".to_string(),
    ];
    let mut answers = Vec::with_capacity(prompts.len());
    for prompt in &prompts {
        match console.ask(prompt)? {
            Some(answer) => answers.push(answer),
            None => return Ok(Flow::Quit),
        }
    }

    let numbers = (
        parse_number(&answers[0]),
        parse_number(&answers[1]),
        parse_number(&answers[2]),
    );
    let (Some(row), Some(start_col), Some(size)) = numbers else {
        console.say("Invalid numbers. Booking cancelled.\n")?;
        return Ok(Flow::Continue);
    };
    let vip = answers[3].to_lowercase().starts_with('y');

    let checked = (
        in_range(row, 0, rows),
        in_range(start_col, 0, cols),
        in_range(size, 1, cols + 1),
    );
    let request = match checked {
        (Some(row), Some(start_col), Some(group_size)) if start_col + group_size <= cols => {
            BookingRequest::Placed {
                row,
                start_col,
                group_size,
                vip,
            }
        }
        _ => {
            console.say("Invalid row, seat, or size. Booking cancelled.\n")?;
            return Ok(Flow::Continue);
        }
    };

    if engine.book_group(request) {
        console.say("Booking successful.\n")?;
    } else {
        console.say("Booking failed: one or more seats are not available.\n")?;
    }
    Ok(Flow::Continue)
}
