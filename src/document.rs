use failure::Fail;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Fail)]
pub enum GradesError {
    #[fail(display = "'{}' doesn't exist", _0)]
    MissingInput(String),
    #[fail(display = "couldn't read '{}': {}", _0, _1)]
    Read(String, #[cause] io::Error),
    #[fail(display = "couldn't write '{}': {}", _0, _1)]
    Write(String, #[cause] io::Error),
}

/// Line terminator used by a grades file, kept when writing the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else if text.contains('\r') {
            LineEnding::Cr
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// Converts any mix of terminators to `\n`.
    pub fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// Converts `\n` terminated text to this ending.
    pub fn apply(self, text: &str) -> String {
        match self {
            LineEnding::Lf => text.to_string(),
            _ => text.replace('\n', self.as_str()),
        }
    }
}

/// Reads a whole grades file, returning `\n` terminated text and the
/// file's original line ending.
pub fn read(path: &Path) -> Result<(String, LineEnding), GradesError> {
    if !path.exists() {
        return Err(GradesError::MissingInput(path.display().to_string()));
    }
    let raw =
        fs::read_to_string(path).map_err(|e| GradesError::Read(path.display().to_string(), e))?;
    let ending = LineEnding::detect(&raw);
    Ok((LineEnding::normalize(&raw), ending))
}

pub fn write(path: &Path, text: &str) -> Result<(), GradesError> {
    fs::write(path, text).map_err(|e| GradesError::Write(path.display().to_string(), e))
}

pub fn print(text: &str) -> Result<(), GradesError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| GradesError::Write("<stdout>".to_string(), e))
}
