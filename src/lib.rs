pub mod encoding;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod processing;
pub mod progress;
pub mod sentence;
