#![cfg(feature = "std")]

//! Terminal helpers: coordinate notation and board printing.
//!
//! Coordinates are written as column number followed by row letter, so
//! `"1b"` is `(1, 2)`.

use std::string::String;

use crate::battlefield::Battlefield;
use crate::cell::{Coordinate, Sign};
use crate::config::{BATTLEFIELD_HEIGHT, BATTLEFIELD_WIDTH};
use crate::player::Player;

fn row_letter(y: i32) -> char {
    (b'a' + (y - 1) as u8) as char
}

/// `(1, 2)` -> `"1b"`.
pub fn format_coordinate((x, y): Coordinate) -> String {
    std::format!("{}{}", x, row_letter(y))
}

/// Parse `"1b"` or `"b1"` (case-insensitive) into `(x, y)`.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, String> {
    let input = input.trim().to_ascii_lowercase();
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let letters: String = input.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if digits.len() + letters.len() != input.len() || letters.len() != 1 || digits.is_empty() {
        return Err(std::format!("Invalid coordinate: {:?}", input));
    }
    let starts_with_digit = input.starts_with(|c: char| c.is_ascii_digit());
    let ends_with_digit = input.ends_with(|c: char| c.is_ascii_digit());
    if starts_with_digit == ends_with_digit {
        return Err(std::format!("Invalid coordinate: {:?}", input));
    }

    let x: i32 = digits
        .parse()
        .map_err(|_| std::format!("Invalid column in {:?}", input))?;
    let letter = letters.as_bytes()[0];
    let y = i32::from(letter - b'a') + 1;
    if !(1..BATTLEFIELD_WIDTH).contains(&x) || !(1..BATTLEFIELD_HEIGHT).contains(&y) {
        return Err(std::format!("Coordinate {:?} is outside the battlefield", input));
    }
    Ok((x, y))
}

/// Parse a whitespace separated list such as `"1a 1b 1c"`.
pub fn parse_coordinates<'a, I>(parts: I) -> Result<Vec<Coordinate>, String>
where
    I: IntoIterator<Item = &'a str>,
{
    parts.into_iter().map(parse_coordinate).collect()
}

/// Battlefield with column numbers on top and row letters on the left.
pub fn render_battlefield(battlefield: &Battlefield) -> String {
    let mut out = String::from("  ");
    for x in 1..battlefield.width() {
        out.push_str(&std::format!(" {:>2}", x));
    }
    out.push('\n');
    for y in 1..battlefield.height() {
        out.push_str(&std::format!("{} ", row_letter(y)));
        for x in 1..battlefield.width() {
            let sign = battlefield.sign_at((x, y)).unwrap_or(Sign::Empty);
            let sign = if !battlefield.is_visible() && sign == Sign::Ship {
                Sign::Empty
            } else {
                sign
            };
            let symbol = match sign {
                Sign::Empty => ".",
                other => other.symbol(),
            };
            out.push_str(&std::format!("  {}", symbol));
        }
        out.push('\n');
    }
    out
}

pub fn print_player_view(player: &Player) {
    std::println!("\n{}'s fleet:", player.name());
    std::print!("{}", render_battlefield(player.battlefield()));
    std::println!("\n{} as seen by {}:", player.enemy_battlefield().name(), player.name());
    std::print!("{}", render_battlefield(player.enemy_battlefield()));
}
