pub mod check;
pub mod compile;
pub mod completions;
pub mod inspect;

use clap::{Parser, Subcommand};

use crate::error::{NinePatchError, Result};

/// ninepatch - inspect, validate and compile nine-patch images
#[derive(Parser, Debug)]
#[command(name = "ninepatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show ticks, chunks, content area and projections of a nine-patch
    Inspect(inspect::InspectArgs),

    /// Validate nine-patch files and report malformed borders
    Check(check::CheckArgs),

    /// Print the compiled chunk table of a nine-patch as JSON
    Compile(compile::CompileArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Parse a "WxH" size string into (width, height).
pub fn parse_size(s: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = s.splitn(2, |c| c == 'x' || c == 'X').collect();
    if parts.len() != 2 {
        return Err(NinePatchError::Parse {
            message: format!("Invalid size '{}': expected WxH (e.g. 48x32)", s),
            help: Some("Use the format WxH, for example: 48x32".to_string()),
        });
    }

    let w: u32 = parts[0].trim().parse().map_err(|_| NinePatchError::Parse {
        message: format!("Invalid width '{}' in size '{}'", parts[0], s),
        help: Some("Width must be a non-negative integer".to_string()),
    })?;

    let h: u32 = parts[1].trim().parse().map_err(|_| NinePatchError::Parse {
        message: format!("Invalid height '{}' in size '{}'", parts[1], s),
        help: Some("Height must be a non-negative integer".to_string()),
    })?;

    Ok((w, h))
}
