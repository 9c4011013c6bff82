use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};
use tracing::warn;

const DEFAULT_PAGER: &str = "less -FIRX";

/// Writes `output` to stdout, through the user's pager when stdout is a
/// terminal and paging is enabled.
pub fn page(output: &str, enabled: bool) -> io::Result<()> {
    if !enabled || output.is_empty() || !io::stdout().is_terminal() {
        print!("{}", output);
        return Ok(());
    }

    let pager = pager_command(
        std::env::var("QUILL_PAGER").ok(),
        std::env::var("PAGER").ok(),
    );
    let mut parts = pager.split_whitespace();
    let program = match parts.next() {
        Some(program) => program,
        None => {
            print!("{}", output);
            return Ok(());
        }
    };

    let mut child = match Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            warn!(pager = %pager, error = %err, "cannot start pager");
            print!("{}", output);
            return Ok(());
        }
    };

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(output.as_bytes()) {
            // The pager quit before reading everything
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
            result => result?,
        }
    }
    child.wait()?;
    Ok(())
}

/// `$QUILL_PAGER`, then `$PAGER`, then `less -FIRX`; blank values are skipped.
fn pager_command(quill_pager: Option<String>, pager: Option<String>) -> String {
    quill_pager
        .into_iter()
        .chain(pager)
        .find(|command| !command.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PAGER.to_string())
}
