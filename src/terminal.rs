use crate::client::{DisplayField, FileSource, ModeSelector, ResultDisplay};
use crate::models::{Mode, SelectedFile};
use std::{
    io::{self, Write},
    path::Path,
};
use tracing::warn;

/// A file picked up front, e.g. from a command line argument.
#[derive(Debug, Clone, Default)]
pub struct FixedFile(pub Option<SelectedFile>);

impl FixedFile {
    pub fn read(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self(Some(SelectedFile::new(filename, contents))))
    }
}

impl FileSource for FixedFile {
    fn selected_file(&self) -> Option<SelectedFile> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedMode(pub Mode);

impl ModeSelector for FixedMode {
    fn mode(&self) -> Mode {
        self.0
    }
}

/// Prints every display update as a `label: text` line.
pub struct TerminalDisplay<W> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultDisplay for TerminalDisplay<W> {
    fn set_field(&mut self, field: DisplayField, text: &str) {
        if let Err(err) = writeln!(self.out, "{}: {text}", field.label()) {
            warn!(field = field.label(), "failed to write display field: {err}");
        }
    }

    fn set_markup(&mut self, markup: &str) {
        if let Err(err) = writeln!(self.out, "{markup}") {
            warn!("failed to write markup: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_writes_labelled_lines() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.set_field(DisplayField::Words, "42");
        display.set_markup("<p>ok</p>");
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(out, "words: 42\n<p>ok</p>\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn display_survives_write_errors() {
        let mut display = TerminalDisplay::new(ClosedPipe);
        display.set_field(DisplayField::Lines, "3");
        display.set_markup("<p>ok</p>");
    }

    #[test]
    fn fixed_file_uses_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, b"one two").unwrap();

        let file = FixedFile::read(&path).unwrap().selected_file().unwrap();
        assert_eq!(file.filename, "report.txt");
        assert_eq!(file.contents, b"one two");
    }
}
