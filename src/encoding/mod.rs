/*! Output encoders.

The set of output formats is closed: see [Encoder].
Encoders only build the output string, writing it is up to the caller.
!*/
mod delimited;
mod json;

use std::{fmt, str::FromStr};

use crate::{error::Error, processing::Pairing};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    /// Array of `{"old": .., "modern": ..}` objects.
    Json,
    /// One `old<TAB>modern` line per pairing.
    TabSeparated,
    /// `old,modern` header then one `old,modern` line per pairing. Fields are not quoted.
    Csv,
}

impl Encoder {
    /// Every available encoder, in the same order as [Encoder::NAMES].
    pub const ALL: [Encoder; 3] = [Encoder::Json, Encoder::TabSeparated, Encoder::Csv];

    /// Names accepted on the command line.
    pub const NAMES: [&'static str; 3] = ["json", "tab_separated", "csv"];

    pub fn name(&self) -> &'static str {
        match self {
            Encoder::Json => "json",
            Encoder::TabSeparated => "tab_separated",
            Encoder::Csv => "csv",
        }
    }

    /// Encode pairings, keeping their order.
    pub fn encode(&self, pairings: &[Pairing]) -> Result<String, Error> {
        match self {
            Encoder::Json => json::encode(pairings),
            Encoder::TabSeparated => Ok(delimited::tab_separated(pairings)),
            Encoder::Csv => Ok(delimited::csv(pairings)),
        }
    }
}

impl FromStr for Encoder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|encoder| encoder.name() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
