/*! Corpus sentences.

Each meaningful corpus line holds one [Sentence]:

```text
<id>:<source>:<contents>
```

Only the first two `:` are structural, `contents` may contain colons too.
!*/
use std::{fmt, str::FromStr};

use crate::error::Error;

/// Origin of a sentence variant.
///
/// Sources are a closed set: `1` is the old text, `2` and `3` are modern renditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Old,
    Modern,
    ModernAlt,
}

impl Source {
    /// every known source along with its tag.
    pub const TABLE: [(i64, Source); 3] = [
        (1, Source::Old),
        (2, Source::Modern),
        (3, Source::ModernAlt),
    ];

    /// Integer tag used in corpus files.
    pub fn tag(self) -> i64 {
        match self {
            Source::Old => 1,
            Source::Modern => 2,
            Source::ModernAlt => 3,
        }
    }

    pub fn is_modern(self) -> bool {
        match self {
            Source::Old => false,
            Source::Modern | Source::ModernAlt => true,
        }
    }

    /// Look a source up by its corpus field.
    ///
    /// Only the canonical tag text matches: `01` or `+2` are not sources.
    pub fn from_field(field: &str) -> Option<Source> {
        Self::TABLE
            .iter()
            .find(|(tag, _)| tag.to_string() == field)
            .map(|(_, source)| *source)
    }
}

/// One sentence of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    id: i64,
    source: Source,
    contents: String,
}

impl Sentence {
    pub fn new(id: i64, source: Source, contents: String) -> Self {
        Self {
            id,
            source,
            contents,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn is_modern(&self) -> bool {
        self.source.is_modern()
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl FromStr for Sentence {
    type Err = Error;

    /// Parse a corpus line.
    ///
    /// The whole line is kept in errors so that it can be shown to the user.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.splitn(3, ':');
        let (id, source, contents) = match (fields.next(), fields.next(), fields.next()) {
            (Some(id), Some(source), Some(contents)) => (id, source, contents),
            _ => return Err(Error::MalformedRecord(line.to_string())),
        };

        let parse_int = |field: &str| {
            field
                .parse::<i64>()
                .map_err(|source| Error::MalformedIdentifier {
                    line: line.to_string(),
                    source,
                })
        };

        let id = parse_int(id)?;
        let tag = parse_int(source)?;
        let source = Source::from_field(source).ok_or_else(|| Error::UnknownSource {
            tag,
            line: line.to_string(),
        })?;

        Ok(Sentence::new(id, source, contents.to_string()))
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.id, self.source.tag(), self.contents)
    }
}
