//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use corpus_compile::{encoding::Encoder, pipeline::DEFAULT_CORPUS};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "compile",
    about = "Compile the corpus into a machine-readable format"
)]
/// Compile command and parameters.
///
/// ```sh
/// compile 0.1.0
/// Compile the corpus into a machine-readable format
///
/// USAGE:
///     compile [OPTIONS] <output-type>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -c, --corpus <corpus>    corpus location [default: corpus.dat]
///
/// ARGS:
///     <output-type>    The desired output format [possible values: json, tab_separated, csv]
/// ```
pub struct Compile {
    #[structopt(help = "The desired output format", possible_values = &Encoder::NAMES)]
    pub output_type: Encoder,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "corpus",
        help = "corpus location",
        default_value = DEFAULT_CORPUS
    )]
    pub corpus: PathBuf,
}
