/*! Compile pipeline

read corpus → pair sentences → encode.

The pipeline does not write anything: the encoded corpus is returned to the caller.
!*/
use std::path::PathBuf;

use log::info;

use crate::{
    encoding::Encoder, error::Error, io::reader::read_corpus, processing::pair_sentences,
    progress::Progress,
};

/// Default corpus location, relative to the working directory.
pub const DEFAULT_CORPUS: &str = "corpus.dat";

pub struct Compile {
    src: PathBuf,
    encoder: Encoder,
}

impl Compile {
    pub fn new(src: PathBuf, encoder: Encoder) -> Self {
        Self { src, encoder }
    }

    /// Run the pipeline, returning the encoded pairings.
    ///
    /// Any parsing error aborts the run, no partial output is produced.
    pub fn run(&self, progress: &mut dyn Progress) -> Result<String, Error> {
        info!("reading corpus from {:?}", self.src);
        let sentences = read_corpus(&self.src)?;

        let pairings = pair_sentences(sentences, progress);

        info!("encoding {} pairings as {}", pairings.len(), self.encoder);
        self.encoder.encode(&pairings)
    }
}
