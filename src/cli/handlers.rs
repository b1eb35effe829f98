use std::io::{self, BufRead, Write};

use crate::cli::input::{parse_int, Console};
use crate::cli::Flow;
use crate::error::BookingError;
use crate::models::SeatNumber;
use crate::services::MovieService;

/* ---------- 1. movies ---------- */

pub fn list_movies<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &MovieService,
) -> io::Result<Flow> {
    let movies = service.all_movies();
    if movies.is_empty() {
        console.say("No movies available.")?;
    }
    for movie in movies {
        console.say(movie)?;
    }
    Ok(Flow::Continue)
}

/* ---------- 2. theaters ---------- */

pub fn list_theaters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &MovieService,
) -> io::Result<Flow> {
    let Some(movie) = console.prompt("Enter movie name: ")? else {
        return Ok(Flow::Exit);
    };

    let theaters = service.theaters_for_movie(&movie);
    if theaters.is_empty() {
        console.say("Invalid movie name or no theaters showing this movie.")?;
    }
    for theater in theaters {
        console.say(theater)?;
    }
    Ok(Flow::Continue)
}

/* ---------- 3. seats ---------- */

pub fn show_seats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &MovieService,
) -> io::Result<Flow> {
    let (movie, theater) = match select_showing(console, service)? {
        Selection::Showing { movie, theater } => (movie, theater),
        Selection::Rejected => return Ok(Flow::Continue),
        Selection::Ended => return Ok(Flow::Exit),
    };
    let Some(seats) = free_seats(console, service, &movie, &theater)? else {
        return Ok(Flow::Continue);
    };

    for seat in seats {
        console.say(format!("Seat {} is available", seat))?;
    }
    Ok(Flow::Continue)
}

/* ---------- 4. booking ---------- */

pub fn book_seats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &MovieService,
) -> io::Result<Flow> {
    let (movie, theater) = match select_showing(console, service)? {
        Selection::Showing { movie, theater } => (movie, theater),
        Selection::Rejected => return Ok(Flow::Continue),
        Selection::Ended => return Ok(Flow::Exit),
    };
    let Some(available) = free_seats(console, service, &movie, &theater)? else {
        return Ok(Flow::Continue);
    };

    let Some(line) = console.prompt("Enter number of seats to book: ")? else {
        return Ok(Flow::Exit);
    };
    let count = match parse_int(&line) {
        Ok(n) if n >= 1 => n as usize,
        _ => {
            console.say("Invalid input. Please enter a valid number of seats.")?;
            return Ok(Flow::Continue);
        }
    };
    if count > available.len() {
        console.say("Error: Number of seats requested exceeds available seats.")?;
        return Ok(Flow::Continue);
    }

    console.show("Enter seat numbers: ")?;
    let capacity = i64::from(service.seat_capacity());
    let mut chosen: Vec<SeatNumber> = Vec::with_capacity(count);

    while chosen.len() < count {
        let Some(line) = console.read_line()? else {
            return Ok(Flow::Exit);
        };
        let seat = match parse_int(&line) {
            Ok(seat) => seat,
            Err(_) => {
                console.say("Invalid input. Please enter valid seat numbers.")?;
                continue;
            }
        };
        if seat < 1 || seat > capacity {
            console.say(format!("Error: Seat {} is out of valid range.", seat))?;
            continue;
        }

        let seat = seat as SeatNumber;
        if !MovieService::is_valid_seat_number(seat, &available) {
            console.say(format!("Error: Seat {} is not available.", seat))?;
        } else if chosen.contains(&seat) {
            console.say(format!("Error: Seat {} has already been entered.", seat))?;
        } else {
            chosen.push(seat);
        }
    }

    match service.book_seats(&movie, &theater, &chosen) {
        Ok(booking) => console.say(format!("Seats booked successfully (booking {})", booking.id))?,
        Err(e) => console.say(format!("Failed to book seats: {}", e))?,
    }
    Ok(Flow::Continue)
}

/* ---------- helpers ---------- */

enum Selection {
    Showing { movie: String, theater: String },
    Rejected,
    Ended,
}

// Unknown movies are refused before the theater is asked for.
fn select_showing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &MovieService,
) -> io::Result<Selection> {
    let Some(movie) = console.prompt("Enter movie name: ")? else {
        return Ok(Selection::Ended);
    };
    if service.theaters_for_movie(&movie).is_empty() {
        console.say("Invalid movie name.")?;
        return Ok(Selection::Rejected);
    }

    let Some(theater) = console.prompt("Enter theater name: ")? else {
        return Ok(Selection::Ended);
    };
    Ok(Selection::Showing { movie, theater })
}

// Free seats for the showing, or `None` after reporting why there are none.
fn free_seats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    service: &MovieService,
    movie: &str,
    theater: &str,
) -> io::Result<Option<Vec<SeatNumber>>> {
    match service.available_seats(movie, theater) {
        Ok(seats) if seats.is_empty() => {
            console.say("No available seats.")?;
            Ok(None)
        }
        Ok(seats) => Ok(Some(seats)),
        Err(BookingError::TheaterNotShowingMovie { .. }) | Err(BookingError::TheaterNotFound(_)) => {
            console.say("Invalid theater name.")?;
            Ok(None)
        }
        Err(e) => {
            console.say(format!("Error: {}", e))?;
            Ok(None)
        }
    }
}
