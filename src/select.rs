//! Interactive menu prompts for picking a theme root and a theme.
//!
//! Both prompts are plain read-validate-retry loops over an injected
//! reader/writer pair, so tests can script them with a `Cursor`.

use anyhow::{Result, bail};
use std::{
    io::{BufRead, Write},
    path::Path,
};

/// Known theme-storage roots, home-relative. Order drives menu numbering.
pub const THEME_LOCATIONS: &[(&str, &str)] = &[
    ("local", ".local/share/themes"),
    ("home", ".themes"),
];

/// Prompt for one of the known theme roots; returns its home-relative path.
///
/// There is no cancel option at this step, so a closed input stream is
/// an error rather than a cancellation.
pub fn theme_location(input: &mut impl BufRead, out: &mut impl Write) -> Result<&'static str> {
    writeln!(out, "\nSelect theme folder:")?;
    for (i, (name, rel)) in THEME_LOCATIONS.iter().enumerate() {
        writeln!(out, "{i}. {rel} ({name})")?;
    }

    loop {
        write!(out, "Choose your theme folder [0-{}]: ", THEME_LOCATIONS.len() - 1)?;
        out.flush()?;

        let Some(line) = read_choice(input)? else {
            bail!("input closed before a theme folder was chosen");
        };

        if let Ok(i) = line.parse::<usize>() {
            if let Some((_, rel)) = THEME_LOCATIONS.get(i) {
                return Ok(rel);
            }
        }
        writeln!(out, "Invalid choice, try again.")?;
    }
}

/// Prompt for a theme under `themes_dir`; `None` means nothing selected.
///
/// Listing failures end the step here (reported, not propagated), and so
/// does an empty root. `0` or end of input cancels.
pub fn theme(
    themes_dir: &Path,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<String>> {
    let themes = match crate::theme::list_themes(themes_dir) {
        Ok(themes) => themes,
        Err(e) => {
            writeln!(out, "Error accessing themes directory: {e:#}")?;
            return Ok(None);
        }
    };

    if themes.is_empty() {
        writeln!(out, "No themes found in {}", themes_dir.display())?;
        return Ok(None);
    }

    writeln!(out, "\nAvailable themes:")?;
    for (i, name) in themes.iter().enumerate() {
        writeln!(out, "{}. {name}", i + 1)?;
    }
    writeln!(out, "0. Cancel")?;

    loop {
        write!(out, "\nYour choice [0-{}]: ", themes.len())?;
        out.flush()?;

        let Some(line) = read_choice(input)? else {
            return Ok(None);
        };

        if line == "0" {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(i) if (1..=themes.len()).contains(&i) => {
                return Ok(Some(themes[i - 1].clone()));
            }
            _ => writeln!(out, "Invalid choice, try again.")?,
        }
    }
}

/// Read one trimmed input line; `None` on end of input.
fn read_choice(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
