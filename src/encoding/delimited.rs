//! Delimiter-separated encoders.
//!
//! Fields are written verbatim: a delimiter inside a sentence is not escaped.
use itertools::Itertools;

use crate::processing::Pairing;

const CSV_HEADER: &str = "old,modern";

fn lines<'a>(pairings: &'a [Pairing], delimiter: &'a str) -> impl Iterator<Item = String> + 'a {
    pairings
        .iter()
        .map(move |p| format!("{}{}{}", p.old, delimiter, p.modern))
}

/// One `old\tmodern` line per pairing, no trailing newline.
pub fn tab_separated(pairings: &[Pairing]) -> String {
    lines(pairings, "\t").join("\n")
}

/// `old,modern` header followed by one line per pairing, no trailing newline.
pub fn csv(pairings: &[Pairing]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(lines(pairings, ","))
        .join("\n")
}
