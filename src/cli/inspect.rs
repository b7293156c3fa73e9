//! Inspect command implementation.
//!
//! Loads one nine-patch and reports everything the engine derives from it.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::load_image;
use crate::engine::{NinePatchImage, Padding, Projections, ScanOptions};
use crate::error::{NinePatchError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{ChunkGrid, Edge, Rect, TickColour, TickSet};
use crate::validation::validate_image;

/// Show ticks, chunks, content area and projections of a nine-patch
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Nine-patch PNG to inspect
    #[arg(required = true)]
    pub file: PathBuf,

    /// Destination size to project onto, as WxH (e.g. 48x32)
    #[arg(long)]
    pub size: Option<String>,

    /// Per-channel marker colour tolerance
    #[arg(long, default_value = "0")]
    pub tolerance: u8,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Everything derived from one nine-patch.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub file: String,
    pub size: (u32, u32),
    pub interior: (u32, u32),
    pub ticks: TickSet,
    pub grid: ChunkGrid,
    pub corrupt: Vec<(usize, usize)>,
    pub content: Rect,
    pub padding: Padding,
    pub bad_patches: Vec<(usize, usize)>,
    /// Interior regions named by validation findings.
    pub flagged: Vec<Rect>,
    pub projections: Option<Projections>,
}

impl InspectReport {
    /// Collect the report, projecting onto `size` when given.
    pub fn collect(image: &mut NinePatchImage, file: &str, size: Option<(u32, u32)>) -> Self {
        let bitmap_size = (image.bitmap().width(), image.bitmap().height());
        let interior = image.bitmap().interior_size();

        Self {
            file: file.to_string(),
            size: bitmap_size,
            interior,
            ticks: image.ticks().clone(),
            grid: image.chunk_grid().clone(),
            corrupt: image.corrupt_chunks(),
            content: image.content_area(),
            padding: image.padding(),
            bad_patches: image.bad_patches(),
            flagged: validate_image(image).regions(),
            projections: size.map(|(w, h)| image.projections(w, h).clone()),
        }
    }

    /// Human-readable rendering.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{} ({}x{}, interior {}x{})",
            self.file, self.size.0, self.size.1, self.interior.0, self.interior.1
        );

        let _ = writeln!(out, "ticks:");
        for edge in Edge::ALL {
            let _ = writeln!(out, "  {:<7}{}", edge.to_string(), tick_summary(&self.ticks, edge));
        }

        let _ = writeln!(
            out,
            "grid: {} x {}",
            plural(self.grid.row_count(), "row", "rows"),
            plural(self.grid.col_count(), "column", "columns")
        );
        for line in self.grid.to_string().lines() {
            let _ = writeln!(out, "  {}", line);
        }

        if self.corrupt.is_empty() {
            let _ = writeln!(out, "corrupt: none");
        } else {
            let cells: Vec<String> = self
                .corrupt
                .iter()
                .map(|(r, c)| format!("({}, {})", r, c))
                .collect();
            let _ = writeln!(out, "corrupt: {}", cells.join(", "));
        }

        if !self.flagged.is_empty() {
            let regions: Vec<String> = self.flagged.iter().map(Rect::to_string).collect();
            let _ = writeln!(out, "flagged: {}", regions.join(", "));
        }

        let p = self.padding;
        let _ = writeln!(
            out,
            "content: {} (padding l{} t{} r{} b{})",
            self.content, p.left, p.top, p.right, p.bottom
        );

        if let Some(projections) = &self.projections {
            let (rw, rh) = projections.requested_size();
            let (cw, ch) = projections.size();
            let _ = writeln!(out, "projection {}x{} (covers {}x{}):", rw, rh, cw, ch);
            for (r, row) in projections.rows().iter().enumerate() {
                for (c, p) in row.iter().enumerate() {
                    let _ = writeln!(out, "  ({}, {}) {} -> {}", r, c, p.src, p.dest);
                }
            }
        }

        out
    }
}

fn tick_summary(ticks: &TickSet, edge: Edge) -> String {
    let marked: Vec<String> = ticks
        .edge(edge)
        .iter()
        .filter(|t| !t.colour.is_transparent())
        .map(|t| {
            let label = match t.colour {
                TickColour::Black => "black",
                TickColour::Red => "red",
                TickColour::Other => "other",
                TickColour::Transparent => "transparent",
            };
            format!("{} {}..{}", label, t.start, t.end())
        })
        .collect();

    if marked.is_empty() {
        "-".to_string()
    } else {
        marked.join(", ")
    }
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let size = args.size.as_deref().map(super::parse_size).transpose()?;
    let display = display_path(&args.file);

    printer.status("Loading", &display);
    let mut image = load_image(&args.file, ScanOptions { tolerance: args.tolerance })?;

    if let Some((w, h)) = size {
        printer.info("Projecting", &format!("onto {}x{}", w, h));
    }
    let report = InspectReport::collect(&mut image, &display, size);

    if !report.corrupt.is_empty() {
        printer.warning(
            "Warning",
            &format!(
                "{} has {}",
                display,
                plural(report.corrupt.len(), "corrupt chunk", "corrupt chunks")
            ),
        );
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| NinePatchError::Validation {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
