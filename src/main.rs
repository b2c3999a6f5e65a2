//! `adwaita-tc` — Libadwaita theme changer for GTK 4 desktops.
//!
//! Installs a theme by symlinking its asset subpaths into `~/.config`,
//! driven by two small interactive menus.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};

mod ctx;
mod links;
mod select;
mod theme;

use ctx::Ctx;

#[derive(Parser)]
#[command(name = "adwaita-tc", about = "Libadwaita theme changer")]
struct Cli {
    /// Reset theme to default (remove the installed links)
    #[arg(long)]
    reset: bool,

    /// List available themes
    #[arg(long)]
    list: bool,
}

fn main() {
    // SIGINT mid-prompt is an ordinary way to leave; report it as such.
    ctrlc::set_handler(|| {
        eprintln!("\nOperation cancelled by user.");
        std::process::exit(130);
    })
    .ok();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = Ctx::new().context("initialise context")?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    if cli.reset {
        return cmd_reset(&ctx);
    }

    let rel = select::theme_location(&mut input, &mut out)?;
    let themes_dir = ctx.themes_dir(rel);

    if cli.list {
        return cmd_list(&themes_dir, &mut out);
    }

    cmd_apply(&ctx, &themes_dir, &mut input, &mut out)
}

/// Remove the installed theme links and nothing else.
fn cmd_reset(ctx: &Ctx) -> Result<()> {
    println!("\n*** Resetting theme to default ***");
    links::remove_current_theme(&ctx.config_dir)?;
    println!("Theme reset complete.");
    Ok(())
}

/// Print qualifying theme names under `themes_dir`; touches no links.
fn cmd_list(themes_dir: &std::path::Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nThemes in {}:", themes_dir.display())?;
    match theme::list_themes(themes_dir) {
        Ok(themes) => {
            for name in themes {
                writeln!(out, "- {name}")?;
            }
        }
        Err(e) => writeln!(out, "Error: {e:#}")?,
    }
    Ok(())
}

/// Interactive default path: pick a theme, then remove-and-relink.
fn cmd_apply(
    ctx: &Ctx,
    themes_dir: &std::path::Path,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let Some(name) = select::theme(themes_dir, input, out)? else {
        writeln!(out, "Operation cancelled.")?;
        return Ok(());
    };

    writeln!(out, "\n*** Applying theme: {name} ***")?;
    writeln!(out, "Removing previous theme...")?;
    links::remove_current_theme(&ctx.config_dir)?;

    writeln!(out, "Installing new theme...")?;
    links::set_new_theme(&themes_dir.join(&name), &ctx.config_dir);

    writeln!(out, "\nTheme applied successfully!")?;
    Ok(())
}
