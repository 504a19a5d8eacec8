//! # compile
//!
//! Compiles a corpus of old/modern sentence variants into every old/modern pairing,
//! in a machine-readable format.
//!
//! ```sh
//! compile tab_separated > pairings.tsv
//! ```
//!
//! The corpus is read from `corpus.dat` in the working directory unless `--corpus` is given.
//! Set `NO_PROGRESS` to disable the progress bar, and `RUST_LOG` to get logs.
use std::io::Write;

use corpus_compile::{error::Error, pipeline, progress};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() {
    env_logger::init();

    let opt = cli::Compile::from_args();
    debug!("cli args\n{:#?}", opt);

    let compile = pipeline::Compile::new(opt.corpus, opt.output_type);
    let mut progress = progress::from_env();

    let result = compile.run(progress.as_mut()).and_then(|encoded| {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", encoded)?;
        Ok(())
    });

    if let Err(e) = result {
        match e {
            Error::InputNotFound(_) => eprintln!("{}", e),
            e => eprintln!("Error parsing corpus:\n{}", e),
        }
        eprintln!("Unable to load sentences");
        std::process::exit(1);
    }
}
