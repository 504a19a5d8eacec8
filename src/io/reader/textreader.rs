/*! Line reading facilities

[LineReader] implements [Iterator] over the meaningful lines of a corpus:
lines are trimmed, and blank lines as well as `#` comments are skipped.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::Path,
};

use crate::error::Error;

/// Comment marker, checked on trimmed lines.
pub const COMMENT: char = '#';

/// Reader that yields trimmed, non-blank, non-comment lines.
#[derive(Debug)]
pub struct LineReader<T> {
    lines: Lines<BufReader<T>>,
}

impl LineReader<File> {
    /// Open `src` for reading.
    ///
    /// A missing file is reported as [Error::InputNotFound].
    pub fn new(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::InputNotFound(src.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Ok(Self::from_reader(handle))
    }
}

impl<T> LineReader<T>
where
    T: Read,
{
    /// Wrap an arbitrary reader.
    pub fn from_reader(reader: T) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }
}

impl<T> Iterator for LineReader<T>
where
    T: Read,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };

            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT) {
                continue;
            }

            return Some(Ok(line.to_string()));
        }

        None
    }
}
