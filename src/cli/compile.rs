//! Compile command implementation.
//!
//! Prints the runtime chunk table of a nine-patch as JSON on stdout.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_image;
use crate::engine::{ChunkTable, ScanOptions};
use crate::error::{NinePatchError, Result};
use crate::output::{display_path, plural, Printer};

/// Print the compiled chunk table of a nine-patch as JSON
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Nine-patch PNG to compile
    #[arg(required = true)]
    pub file: PathBuf,

    /// Per-channel marker colour tolerance
    #[arg(long, default_value = "0")]
    pub tolerance: u8,
}

/// Serialize a chunk table as pretty JSON.
pub fn to_json(table: &ChunkTable) -> Result<String> {
    serde_json::to_string_pretty(table).map_err(|e| NinePatchError::Validation {
        message: format!("Failed to serialize chunk table: {}", e),
        help: None,
    })
}

pub fn run(args: CompileArgs, printer: &Printer) -> Result<()> {
    let display = display_path(&args.file);
    printer.status("Compiling", &display);

    let mut image = load_image(&args.file, ScanOptions { tolerance: args.tolerance })?;
    let table = image.chunk_table()?;

    println!("{}", to_json(&table)?);

    printer.success(
        "Finished",
        &format!(
            "{} ({} stretch columns, {} stretch rows)",
            plural(table.colours.len(), "chunk", "chunks"),
            table.x_divs.len() / 2,
            table.y_divs.len() / 2
        ),
    );
    Ok(())
}
