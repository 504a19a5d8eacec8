/*! Corpus reading utilities

[textreader] deals with raw lines, [corpus] turns them into sentences.
!*/
pub mod corpus;
mod textreader;

pub use corpus::{parse_lines, read_corpus};
pub use textreader::LineReader;
