//! Output formatting for the interactive query loop

use crate::index::types::Lookup;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Print the startup banner shown once the index is loaded
pub fn print_banner(stdout: &mut StandardStream) -> io::Result<()> {
    writeln!(stdout, "To exit the program enter \"/exit\"")
}

/// Print one result line for a query
pub fn print_lookup(
    stdout: &mut StandardStream,
    outcome: Lookup,
    max_key_length: usize,
) -> io::Result<()> {
    match outcome {
        Lookup::Found(position) => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(stdout, "{}", position)?;
            stdout.reset()?;
        }
        Lookup::NotFound => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(stdout, "Key not found.")?;
            stdout.reset()?;
        }
        Lookup::LengthExceeded => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(stdout, "Key length exceeded ({}).", max_key_length)?;
            stdout.reset()?;
        }
    }
    Ok(())
}
