//! Interactive menu on top of `MovieService`.
//!
//! Bad input is reported and the menu is shown again; only end of input or a
//! failing reader/writer ends the loop.

pub mod handlers;
pub mod input;

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::services::MovieService;
pub use input::{parse_int, Console, InputError};

/// Whether the menu loop keeps going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListMovies,
    ListTheaters,
    ShowSeats,
    BookSeats,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ListMovies),
            2 => Some(MenuChoice::ListTheaters),
            3 => Some(MenuChoice::ShowSeats),
            4 => Some(MenuChoice::BookSeats),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "
1. View all playing movies
2. See all theaters showing a movie
3. See available seats for a selected theater & movie
4. Book one or more seats
5. Exit
Enter your choice: ";

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, service: &MovieService) -> io::Result<()> {
    loop {
        let Some(line) = console.prompt(MENU)? else {
            debug!("Input closed, leaving menu");
            return Ok(());
        };

        let choice = match parse_int(&line) {
            Ok(n) => MenuChoice::from_number(n),
            Err(_) => {
                console.say("Invalid input. Please enter a number.")?;
                continue;
            }
        };
        debug!("Menu choice {:?}", choice);

        let flow = match choice {
            Some(MenuChoice::ListMovies) => handlers::list_movies(console, service)?,
            Some(MenuChoice::ListTheaters) => handlers::list_theaters(console, service)?,
            Some(MenuChoice::ShowSeats) => handlers::show_seats(console, service)?,
            Some(MenuChoice::BookSeats) => handlers::book_seats(console, service)?,
            Some(MenuChoice::Exit) => Flow::Exit,
            None => {
                console.say("Invalid choice")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return Ok(());
        }
    }
}
