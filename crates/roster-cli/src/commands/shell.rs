//! The `roster shell` command.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::session::{Outcome, Session};

pub fn execute() -> Result<()> {
    let mut session = Session::new();

    println!("roster — student record session (type 'help' for commands)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        if session.feed_line(&line?) == Outcome::Quit {
            break;
        }
    }

    Ok(())
}
