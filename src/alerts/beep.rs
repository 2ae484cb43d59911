use std::io::{self, Write};
use thiserror::Error;

#[cfg(windows)]
use std::process::{Command, Stdio};

const TONE_FREQUENCY_HZ: u32 = 1000;
const TONE_DURATION_MS: u32 = 500;
const BELL: &[u8] = b"\x07";

/// Something that can make the user notice a change.
///
/// Implementations must swallow their own failures.
pub trait AlertSink {
    fn alert(&mut self);
}

#[derive(Debug, Error)]
pub enum ToneError {
    #[error("no native tone facility on this platform")]
    Unavailable,
    #[error("native tone failed: {0}")]
    Failed(#[from] io::Error),
}

/// Platform tone generator. Windows plays the tone through the console
/// speaker via PowerShell; elsewhere there is no native facility.
pub fn native_tone(frequency_hz: u32, duration_ms: u32) -> Result<(), ToneError> {
    #[cfg(windows)]
    {
        let status = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command"])
            .arg(format!("[console]::beep({frequency_hz},{duration_ms})"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(ToneError::Failed(io::Error::other(format!(
                "powershell exited with {status}"
            ))));
        }
        Ok(())
    }

    #[cfg(not(windows))]
    {
        let _ = (frequency_hz, duration_ms);
        Err(ToneError::Unavailable)
    }
}

/// Writes the terminal bell control character and flushes right away.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn ring(&mut self) -> io::Result<()> {
        self.out.write_all(BELL)?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Native tone first, terminal bell second, silence last.
pub struct Beeper<W: Write> {
    bell: TerminalBell<W>,
    native: fn(u32, u32) -> Result<(), ToneError>,
}

impl Beeper<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Beeper<io::Stderr> {
    /// Keeps the bell byte out of stdout when stdout carries machine-readable lines.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Beeper<W> {
    pub fn new(out: W) -> Self {
        Self {
            bell: TerminalBell::new(out),
            native: native_tone,
        }
    }

    pub fn with_native(mut self, native: fn(u32, u32) -> Result<(), ToneError>) -> Self {
        self.native = native;
        self
    }

    pub fn beep(&mut self) {
        match (self.native)(TONE_FREQUENCY_HZ, TONE_DURATION_MS) {
            Ok(()) => return,
            Err(ToneError::Unavailable) => {}
            Err(e) => tracing::debug!("{e}, falling back to terminal bell"),
        }

        if let Err(e) = self.bell.ring() {
            tracing::debug!("Terminal bell failed: {e}");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.bell.into_inner()
    }
}

impl<W: Write> AlertSink for Beeper<W> {
    fn alert(&mut self) {
        self.beep();
    }
}

/// Used with `--no-beep`.
pub struct Silent;

impl AlertSink for Silent {
    fn alert(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable(_: u32, _: u32) -> Result<(), ToneError> {
        Err(ToneError::Unavailable)
    }

    fn broken(_: u32, _: u32) -> Result<(), ToneError> {
        Err(ToneError::Failed(io::Error::other("device busy")))
    }

    fn works(_: u32, _: u32) -> Result<(), ToneError> {
        Ok(())
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_falls_back_to_bell() {
        let mut beeper = Beeper::new(Vec::new()).with_native(unavailable);
        beeper.alert();
        assert_eq!(beeper.into_inner(), b"\x07");
    }

    #[test]
    fn test_failed_tone_falls_back_to_bell() {
        let mut beeper = Beeper::new(Vec::new()).with_native(broken);
        beeper.alert();
        assert_eq!(beeper.into_inner(), b"\x07");
    }

    #[test]
    fn test_native_tone_skips_bell() {
        let mut beeper = Beeper::new(Vec::new()).with_native(works);
        beeper.alert();
        assert!(beeper.into_inner().is_empty());
    }

    #[test]
    fn test_bell_failure_is_swallowed() {
        let mut beeper = Beeper::new(FailingWriter).with_native(unavailable);
        beeper.alert();
        beeper.alert();
    }

    #[cfg(not(windows))]
    #[test]
    fn test_no_native_tone_off_windows() {
        assert!(matches!(native_tone(1000, 10), Err(ToneError::Unavailable)));
    }
}
