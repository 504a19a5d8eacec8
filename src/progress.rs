//! Optional progress reporting while pairing.
//!
//! Progress is purely cosmetic: whichever [Progress] is used, pairing output stays the same.
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

/// Presence of this environment variable (whatever its value) disables the progress bar.
pub const NO_PROGRESS: &str = "NO_PROGRESS";

const TEMPLATE: &str = "[{elapsed_precise}] [{bar:40.cyan/blue}] {human_pos}/{human_len} groups";

/// Receives pairing progress, one tick per sentence group.
pub trait Progress {
    fn start(&mut self, _groups: u64) {}
    fn tick(&mut self) {}
    fn finish(&mut self) {}
}

/// Does nothing.
#[derive(Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Progress bar drawn on stderr.
pub struct Bar {
    bar: ProgressBar,
}

impl Bar {
    pub fn new() -> Result<Self, indicatif::style::TemplateError> {
        let style = ProgressStyle::with_template(TEMPLATE)?.progress_chars("█▓▒░-");
        Ok(Self {
            bar: ProgressBar::new(0).with_style(style),
        })
    }
}

impl Progress for Bar {
    fn start(&mut self, groups: u64) {
        self.bar.set_length(groups);
    }

    fn tick(&mut self) {
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Whether [NO_PROGRESS] is set.
pub fn disabled() -> bool {
    std::env::var_os(NO_PROGRESS).is_some()
}

/// Get a progress reporter according to the environment.
///
/// Failing to build the progress bar is not an error, we just proceed without it.
pub fn from_env() -> Box<dyn Progress> {
    if disabled() {
        return Box::new(NoProgress);
    }

    match Bar::new() {
        Ok(bar) => Box::new(bar),
        Err(e) => {
            warn!("Unable to set up progress bar ({}). Proceeding without.", e);
            Box::new(NoProgress)
        }
    }
}
