//! Interactive query loop over a loaded index.
//!
//! Reads whitespace-delimited tokens from standard input; every token is a
//! query except the exit command. Multiple tokens on one line are answered
//! one line each, in order.

use crate::index::trie::PrefixIndex;
use crate::output;
use anyhow::Result;
use std::io::{self, BufRead, IsTerminal};
use termcolor::{ColorChoice, StandardStream};

/// Token that terminates the loop
const EXIT_COMMAND: &str = "/exit";

/// Run the query loop against stdin until `/exit` or end of input
pub fn run(index: &PrefixIndex) -> Result<()> {
    let stdin = io::stdin();
    run_loop(stdin.lock(), index)
}

fn run_loop<R: BufRead>(input: R, index: &PrefixIndex) -> Result<()> {
    // termcolor's Auto does not check for a tty itself; disable colors
    // explicitly when stdout is piped so no escape sequences are emitted.
    let choice = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    output::print_banner(&mut stdout)?;

    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if token == EXIT_COMMAND {
                return Ok(());
            }
            output::print_lookup(&mut stdout, index.lookup(token), index.max_key_length())?;
        }
    }

    // End of input terminates like /exit does.
    Ok(())
}
