/*! Corpus reader

Reads a whole corpus file into [Sentence]s.
Parsing is all-or-nothing: the first faulty line aborts the read.
!*/
use std::path::Path;

use log::debug;

use crate::{error::Error, sentence::Sentence};

use super::textreader::LineReader;

/// Parse every sentence of the corpus located at `src`.
///
/// The file is closed when this function returns, whether it succeeded or not.
pub fn read_corpus(src: &Path) -> Result<Vec<Sentence>, Error> {
    let reader = LineReader::new(src)?;
    let sentences = parse_lines(reader)?;
    debug!("read {} sentences from {:?}", sentences.len(), src);
    Ok(sentences)
}

/// Parse sentences from an iterator of (already filtered) lines.
pub fn parse_lines<I>(lines: I) -> Result<Vec<Sentence>, Error>
where
    I: IntoIterator<Item = Result<String, Error>>,
{
    lines
        .into_iter()
        .map(|line| line.and_then(|line| line.parse()))
        .collect()
}
