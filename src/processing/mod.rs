/*! Content processing

Contains the transformation from parsed sentences to old/modern pairings.
!*/
pub mod pairing;

pub use pairing::{pair_sentences, Pairing};
