//! Interactive prompts: mount path, package input and the exit pause.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Strips the line ending, then surrounding quotes and spaces.
///
/// Terminals wrap dragged-in paths in quotes.
pub fn trim_input(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
        .trim_matches(|c| matches!(c, '"' | '\'' | ' '))
}

/// Prompts until the user enters an existing directory.
///
/// Fails with [`io::ErrorKind::UnexpectedEof`] if input closes first.
pub fn resolve_mount_path(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<PathBuf> {
    loop {
        writeln!(
            output,
            "Enter the mount path of your Garmin device (or leave blank to re-prompt)."
        )?;
        write!(output, "Mount path: ")?;
        output.flush()?;

        let line = read_line(input)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a mount path was entered",
            )
        })?;

        let candidate = trim_input(&line);
        if !candidate.is_empty() && Path::new(candidate).is_dir() {
            return Ok(PathBuf::from(candidate));
        }

        tracing::debug!(input = candidate, "rejected mount path");
        writeln!(output, "Invalid or empty mount path. Please try again.\n")?;
    }
}

/// Returns the package to install: the command-line argument verbatim, or
/// one trimmed line of input.
///
/// `None` means nothing was given.
pub fn acquire_input(
    arg: Option<String>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<String>> {
    let raw = match arg {
        Some(arg) => arg,
        None => {
            writeln!(
                output,
                "Type or drag a URL, zip file, or .prg file here, then press Enter:"
            )?;
            output.flush()?;
            read_line(input)?
                .map(|line| trim_input(&line).to_string())
                .unwrap_or_default()
        }
    };

    Ok(if raw.is_empty() { None } else { Some(raw) })
}

/// Waits for Enter. Returns immediately on closed input.
pub fn pause(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Press Enter to exit.")?;
    output.flush()?;
    read_line(input)?;
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
