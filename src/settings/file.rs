//! Settings file persistence.
//!
//! One line: `length,lowercase,uppercase,digits,symbols,clipboard`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 6;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{}\n",
        settings.length,
        settings.lowercase,
        settings.uppercase,
        settings.digits,
        settings.symbols,
        settings.to_clipboard,
    );

    file.write_all(data.as_bytes())?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, writing defaults");
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    match parse_line(line.trim()) {
        Some(parsed) => *settings = parsed,
        None => {
            tracing::warn!(path = %path.display(), "malformed settings file, resetting");
            *settings = Settings::default();
            save(settings, path)?;
        }
    }

    Ok(())
}

fn parse_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return None;
    }

    // Length stays raw; the form validates it like typed input.
    if !parts[0].chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(Settings {
        length: parts[0].to_string(),
        lowercase: parts[1].parse().ok()?,
        uppercase: parts[2].parse().ok()?,
        digits: parts[3].parse().ok()?,
        symbols: parts[4].parse().ok()?,
        to_clipboard: parts[5].parse().ok()?,
    })
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passform/settings")
}
