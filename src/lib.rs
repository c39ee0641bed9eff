pub mod api;
pub mod ast;
pub mod config;
pub mod error;
pub mod header;
pub mod progression;
pub mod render;
pub mod symbol;
pub mod transport;

pub use api::{parse, parse_playlist, parse_song};
pub use ast::*;
pub use config::Config;
pub use error::*;
pub use progression::decode_progression;
pub use render::{render, OutputFormat, Report};

/// Decode a payload and render it, warnings included.
/// This is the one-call entry point used by the command line.
pub fn convert(input: &str, config: &Config, format: OutputFormat) -> Result<String, IrealError> {
    let decoded = parse(input, config);
    render(&Report::from(&decoded), format)
}
