//! Symlink management for the active theme.
//!
//! The active theme is nothing but a fixed set of symlinks under
//! `~/.config`; installing a theme is remove-then-relink, and resetting
//! is just the remove half.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Relative fragments that make up one installed theme. Order is only
/// cosmetic (log lines come out in this order).
pub const THEME_ITEMS: &[&str] = &[
    "gtk-4.0/gtk.css",
    "gtk-4.0/gtk-dark.css",
    "gtk-4.0/assets",
    "assets",
];

/// Remove whatever theme object sits at `path`, if any.
///
/// A symlink is unlinked (its target is left alone); a plain directory
/// is removed recursively, since an unpacked theme may have been copied
/// there instead of linked. Anything else is left untouched.
pub fn remove_if_exists(path: &Path) -> Result<()> {
    let Ok(meta) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if meta.is_symlink() {
        println!("Removing link {}", path.display());
        fs::remove_file(path).with_context(|| format!("remove link {}", path.display()))
    } else if meta.is_dir() {
        println!("Removing directory {}", path.display());
        fs::remove_dir_all(path).with_context(|| format!("remove dir {}", path.display()))
    } else {
        Ok(())
    }
}

/// Remove every installed theme item under `config_dir`.
///
/// Idempotent: absent items are silent no-ops.
pub fn remove_current_theme(config_dir: &Path) -> Result<()> {
    for item in THEME_ITEMS {
        remove_if_exists(&config_dir.join(item))?;
    }
    Ok(())
}

/// Link every present item of `theme_dir` into `config_dir`.
///
/// Items are best-effort: a missing source or a failed link is reported
/// and the remaining items still run.
pub fn set_new_theme(theme_dir: &Path, config_dir: &Path) {
    for item in THEME_ITEMS {
        let source = theme_dir.join(item);
        let target = config_dir.join(item);

        if !source.exists() {
            eprintln!("warn: {} not found, skipping", source.display());
            continue;
        }

        if let Err(e) = link_item(&source, &target) {
            eprintln!("warn: link {item} failed: {e:#}");
        }
    }
}

/// Create the symlink `target -> source`, clearing the way first.
///
/// Ensures the parent directory exists and removes any stale theme
/// object already at `target`.
#[cfg(unix)]
fn link_item(source: &Path, target: &Path) -> Result<()> {
    use std::os::unix::fs::symlink;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir {}", parent.display()))?;
    }

    remove_if_exists(target)?;

    symlink(source, target)
        .with_context(|| format!("symlink {} -> {}", target.display(), source.display()))?;

    println!("Linked {}", target.display());
    Ok(())
}

#[cfg(not(unix))]
fn link_item(_source: &Path, _target: &Path) -> Result<()> {
    anyhow::bail!("symlinks are not supported on this platform")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PathBuf, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let theme_dir = tmp.path().join("themes/Nord");
        let config_dir = tmp.path().join(".config");
        fs::create_dir_all(&theme_dir).unwrap();
        fs::create_dir_all(&config_dir).unwrap();
        (tmp, theme_dir, config_dir)
    }

    fn populate_theme(theme_dir: &Path, items: &[&str]) {
        for item in items {
            let p = theme_dir.join(item);
            if item.ends_with(".css") {
                fs::create_dir_all(p.parent().unwrap()).unwrap();
                fs::write(&p, "/* css */").unwrap();
            } else {
                fs::create_dir_all(&p).unwrap();
            }
        }
    }

    #[test]
    fn set_links_every_present_item_to_its_source() {
        let (_tmp, theme_dir, config_dir) = fixture();
        populate_theme(&theme_dir, THEME_ITEMS);

        remove_current_theme(&config_dir).unwrap();
        set_new_theme(&theme_dir, &config_dir);

        for item in THEME_ITEMS {
            let target = config_dir.join(item);
            assert!(target.symlink_metadata().unwrap().is_symlink(), "{item}");
            assert_eq!(fs::read_link(&target).unwrap(), theme_dir.join(item));
        }
    }

    #[test]
    fn missing_source_is_skipped_others_still_link() {
        let (_tmp, theme_dir, config_dir) = fixture();
        // Everything except the top-level assets dir.
        populate_theme(
            &theme_dir,
            &["gtk-4.0/gtk.css", "gtk-4.0/gtk-dark.css", "gtk-4.0/assets"],
        );

        set_new_theme(&theme_dir, &config_dir);

        for item in &["gtk-4.0/gtk.css", "gtk-4.0/gtk-dark.css", "gtk-4.0/assets"] {
            assert!(config_dir.join(item).symlink_metadata().unwrap().is_symlink());
        }
        assert!(config_dir.join("assets").symlink_metadata().is_err());
    }

    #[test]
    fn stale_directory_at_target_is_replaced() {
        let (_tmp, theme_dir, config_dir) = fixture();
        populate_theme(&theme_dir, THEME_ITEMS);

        // A previously copied (not linked) theme left a real tree behind.
        fs::create_dir_all(config_dir.join("assets/icons")).unwrap();
        fs::write(config_dir.join("assets/icons/x.svg"), "<svg/>").unwrap();

        set_new_theme(&theme_dir, &config_dir);

        let target = config_dir.join("assets");
        assert!(target.symlink_metadata().unwrap().is_symlink());
        assert_eq!(fs::read_link(&target).unwrap(), theme_dir.join("assets"));
    }

    #[test]
    fn reapply_replaces_links_from_previous_theme() {
        let (tmp, theme_dir, config_dir) = fixture();
        populate_theme(&theme_dir, THEME_ITEMS);
        let other = tmp.path().join("themes/Gruvbox");
        populate_theme(&other, THEME_ITEMS);

        set_new_theme(&other, &config_dir);
        remove_current_theme(&config_dir).unwrap();
        set_new_theme(&theme_dir, &config_dir);

        for item in THEME_ITEMS {
            assert_eq!(
                fs::read_link(config_dir.join(item)).unwrap(),
                theme_dir.join(item)
            );
        }
    }

    #[test]
    fn remove_unlinks_without_touching_the_theme() {
        let (_tmp, theme_dir, config_dir) = fixture();
        populate_theme(&theme_dir, THEME_ITEMS);
        set_new_theme(&theme_dir, &config_dir);

        remove_current_theme(&config_dir).unwrap();

        for item in THEME_ITEMS {
            assert!(config_dir.join(item).symlink_metadata().is_err());
            assert!(theme_dir.join(item).exists(), "source {item} must survive");
        }
        // gtk-4.0/ itself stays behind; only the items are managed.
        assert!(config_dir.join("gtk-4.0").is_dir());
    }

    #[test]
    fn remove_is_idempotent() {
        let (_tmp, _theme_dir, config_dir) = fixture();
        remove_current_theme(&config_dir).unwrap();
        remove_current_theme(&config_dir).unwrap();
        assert!(fs::read_dir(&config_dir).unwrap().next().is_none());
    }

    #[test]
    fn plain_file_at_item_path_is_left_alone() {
        let (_tmp, _theme_dir, config_dir) = fixture();
        let file = config_dir.join("assets");
        fs::write(&file, "not a theme").unwrap();

        remove_current_theme(&config_dir).unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "not a theme");
    }

    #[test]
    fn removing_a_link_keeps_its_target() {
        let (_tmp, theme_dir, config_dir) = fixture();
        populate_theme(&theme_dir, &["assets"]);
        set_new_theme(&theme_dir, &config_dir);

        remove_if_exists(&config_dir.join("assets")).unwrap();

        assert!(theme_dir.join("assets").is_dir());
    }
}
