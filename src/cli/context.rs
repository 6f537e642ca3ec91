//! CLI context - bundles settings, flags, and clipboard output.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use zeroize::Zeroizing;

use super::{CliFlags, prompts, quiet};
use crate::clipboard;
use crate::form::{FormError, validate_length, validate_request};
use crate::pass::{self, Alphabet, ClassSet, entropy};
use crate::rng::{IndexSource, RngIndex};
use crate::settings::{Settings, default_path};

/// Largest batch held in memory for the clipboard.
pub const CLIPBOARD_MAX_PASSWORDS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Failed to write passwords: {0}")]
    Output(#[from] io::Error),
}

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    pub settings: Settings,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = super::load_settings(flags.defaults);
        Self { flags, settings }
    }

    /// Explicit class flags win over saved defaults.
    pub fn classes(&self) -> ClassSet {
        self.flags
            .explicit_classes()
            .unwrap_or_else(|| self.settings.classes())
    }

    pub fn length_input(&self) -> Option<&str> {
        self.flags
            .length
            .as_deref()
            .or(Some(self.settings.length.as_str()).filter(|s| !s.is_empty()))
    }

    pub fn to_clipboard(&self) -> bool {
        self.flags.clipboard || self.settings.to_clipboard
    }

    /// Validated alphabet and length, or the first reason generation is blocked.
    pub fn request(&self) -> Result<(Alphabet, usize), FormError> {
        validate_request(self.length_input(), self.classes())
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        quiet::set(self.flags.quiet);

        if self.flags.save {
            self.save_defaults(&default_path())?;
            return Ok(());
        }

        let (alphabet, length) = self.request()?;
        match self.flags.seed {
            Some(seed) => self.emit(&alphabet, length, &mut RngIndex::seeded(seed))?,
            None => self.emit(&alphabet, length, &mut RngIndex::os())?,
        }
        Ok(())
    }

    /// Store the given length and classes. `-b` turns the clipboard default on;
    /// without it the saved preference is kept.
    fn save_defaults(&mut self, path: &Path) -> Result<(), FormError> {
        if let Some(raw) = self.flags.length.as_deref() {
            self.settings.length = validate_length(Some(raw))?.to_string();
        }
        if let Some(classes) = self.flags.explicit_classes() {
            self.settings.set_classes(classes);
        }
        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }

        match self.settings.save_to(path) {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::error(&format!("Failed to save settings: {e}")),
        }
        Ok(())
    }

    fn emit<S: IndexSource>(
        &self,
        alphabet: &Alphabet,
        length: usize,
        source: &mut S,
    ) -> io::Result<()> {
        let count = self.flags.number;
        if self.flags.entropy {
            prompts::entropy(&entropy::estimate(alphabet, length), source.name());
        }

        if self.to_clipboard() {
            if count > CLIPBOARD_MAX_PASSWORDS {
                prompts::clipboard_batch_too_large(count, CLIPBOARD_MAX_PASSWORDS);
            } else {
                let mut batch = Zeroizing::new(Vec::with_capacity((length + 1) * count as usize));
                write_batch(&mut *batch, alphabet, length, count, source)?;
                let text = std::str::from_utf8(&batch)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                match clipboard::copy(text) {
                    Ok(()) => {
                        prompts::clipboard_copied(count);
                        return Ok(());
                    }
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
                return write_stdout(&batch);
            }
        }

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_batch(&mut out, alphabet, length, count, source)?;
        out.flush()
    }
}

fn write_stdout(bytes: &[u8]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(bytes)?;
    out.flush()
}

/// Write `count` passwords, one per line, as each is generated.
fn write_batch<W: Write, S: IndexSource>(
    out: &mut W,
    alphabet: &Alphabet,
    length: usize,
    count: u32,
    source: &mut S,
) -> io::Result<()> {
    for _ in 0..count {
        let pass = pass::generate(alphabet, length, source);
        out.write_all(pass.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::form::LengthError;
    use crate::pass::CharacterClass;

    fn context(args: &[&str], settings: Settings) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("passform").chain(args.iter().copied()))
                .unwrap();
        Context { flags, settings }
    }

    #[test]
    fn flags_override_saved_classes() {
        let ctx = context(&["-S"], Settings::default());
        assert_eq!(ctx.classes(), ClassSet::only(CharacterClass::Symbol));

        let ctx = context(&[], Settings::default());
        assert_eq!(ctx.classes(), ClassSet::only(CharacterClass::Lowercase));
    }

    #[test]
    fn saved_length_is_used_when_flag_absent() {
        let settings = Settings {
            length: "10".into(),
            ..Settings::default()
        };
        let ctx = context(&["-D"], settings);
        let (alphabet, length) = ctx.request().unwrap();
        assert_eq!(length, 10);
        assert_eq!(alphabet.len(), 10);
    }

    #[test]
    fn missing_length_is_reported() {
        let ctx = context(&["-U"], Settings::default());
        assert_eq!(
            ctx.request().unwrap_err(),
            FormError::Length(LengthError::Missing)
        );
    }

    #[test]
    fn empty_saved_classes_are_rejected() {
        let settings = Settings {
            lowercase: false,
            ..Settings::default()
        };
        let ctx = context(&["-l", "8"], settings);
        assert_eq!(ctx.request().unwrap_err(), FormError::NoCharacterClass);
    }

    #[test]
    fn batch_has_one_password_per_line() {
        let ctx = context(&["-l", "12", "-U", "-D", "-n", "5"], Settings::default());
        let (alphabet, length) = ctx.request().unwrap();
        let mut buf = Vec::new();
        write_batch(&mut buf, &alphabet, length, 5, &mut RngIndex::seeded(5)).unwrap();

        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.len(), 12);
            assert!(line.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn seeded_batches_repeat() {
        let ctx = context(&["-l", "16", "-L", "-S"], Settings::default());
        let (alphabet, length) = ctx.request().unwrap();
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_batch(&mut a, &alphabet, length, 3, &mut RngIndex::seeded(77)).unwrap();
        write_batch(&mut b, &alphabet, length, 3, &mut RngIndex::seeded(77)).unwrap();
        assert_eq!(a, b);
    }

    /// Accepts `room` writes, then fails like a closed pipe.
    struct ClosedAfter {
        room: usize,
        written: usize,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written == self.room {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            self.written += 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_stop_the_batch() {
        let ctx = context(&["-l", "8"], Settings::default());
        let (alphabet, length) = ctx.request().unwrap();
        let mut out = ClosedAfter { room: 4, written: 0 };
        let err = write_batch(&mut out, &alphabet, length, u32::MAX, &mut RngIndex::seeded(1))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(out.written, 4);
    }

    #[test]
    fn output_errors_map_to_cli_error() {
        let err = CliError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(matches!(err, CliError::Output(_)));
        let err = CliError::from(FormError::NoCharacterClass);
        assert_eq!(err.to_string(), "Select at least one character class");
    }

    #[test]
    fn save_keeps_clipboard_preference_unless_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let saved = Settings {
            to_clipboard: true,
            ..Settings::default()
        };

        let mut ctx = context(&["--save", "-l", "10"], saved);
        ctx.save_defaults(&path).unwrap();
        let reloaded = Settings::load_from(&path).unwrap();
        assert_eq!(reloaded.length, "10");
        assert!(reloaded.to_clipboard);

        let mut ctx = context(&["--save", "-b"], Settings::default());
        ctx.save_defaults(&path).unwrap();
        assert!(Settings::load_from(&path).unwrap().to_clipboard);
    }

    #[test]
    fn save_rejects_invalid_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let mut ctx = context(&["--save", "-l", "3"], Settings::default());
        assert_eq!(
            ctx.save_defaults(&path).unwrap_err(),
            FormError::Length(LengthError::TooShort)
        );
        assert!(!path.exists());
    }
}
