//! The `roster script` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::session::{Outcome, Session};

pub fn execute(path: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read script {}", path.display()))?;

    tracing::debug!(path = %path.display(), "running script");

    let mut session = Session::new();
    for line in content.lines() {
        if session.feed_line(line) == Outcome::Quit {
            break;
        }
    }

    let failed = session.error_count();
    if failed > 0 {
        anyhow::bail!("{failed} command(s) failed");
    }
    Ok(())
}
