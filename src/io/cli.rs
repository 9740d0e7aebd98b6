//! Command-line interface for tiling PNG layouts

use crate::algorithm::border::classify_borders;
use crate::algorithm::tiler::Tiler;
use crate::io::configuration::{BORDERS_SUFFIX, DEFAULT_SEED, LAYOUT_CELL_SIZE, TILES_SUFFIX};
use crate::io::error::{Result, file_system, invalid_path};
use crate::io::layout::{Layout, palette_tile_set, render_border_map, render_tile_map, save_map};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::GridConfig;
use crate::spatial::occupancy::OccupancyGrid;
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ghostgrid")]
#[command(
    author,
    version,
    about = "Classify PNG cell layouts into autotiles and border maps"
)]
/// Command-line arguments for the layout tiling tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for tile variant selection
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Also write a border map (interior cells dimmed)
    #[arg(short, long)]
    pub borders: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of layout files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments, returning how many were written
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<usize> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(0);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_png(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_path(&self.cli.target, "Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let read_error = |e| file_system(&self.cli.target, "read directory", e);
            for entry in std::fs::read_dir(&self.cli.target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if is_png(&path) && !is_generated(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_path(&self.cli.target, "Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = tiles_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let layout = Layout::from_png(input_path)?;
        let config = GridConfig::new(LAYOUT_CELL_SIZE);
        let occupancy = OccupancyGrid::from_elements(layout.elements(), config.cell_size);

        let tiler = Tiler::new(config).with_seed(self.cli.seed);
        let Ok(placements) = tiler.tile_all(layout.elements(), &palette_tile_set(), &occupancy);
        debug!(
            "{}: {} of {} cells tiled",
            input_path.display(),
            placements.len(),
            layout.elements().len()
        );
        save_map(&render_tile_map(&layout, &placements), &tiles_path(input_path))?;

        if self.cli.borders {
            let Ok(classes) = classify_borders(layout.elements(), &config, &occupancy);
            save_map(
                &render_border_map(&layout, &classes),
                &borders_path(input_path),
            )?;
        }

        info!(
            "{} processed in {:?}",
            input_path.display(),
            start_time.elapsed()
        );
        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(input_path, start_time.elapsed());
        }

        Ok(())
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

// Maps written next to their layouts must not be picked up as layouts
fn is_generated(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy())
        .is_some_and(|stem| stem.ends_with(TILES_SUFFIX) || stem.ends_with(BORDERS_SUFFIX))
}

fn suffixed_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{suffix}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Output path of the tile-class map for a layout
pub fn tiles_path(input_path: &Path) -> PathBuf {
    suffixed_path(input_path, TILES_SUFFIX)
}

/// Output path of the border map for a layout
pub fn borders_path(input_path: &Path) -> PathBuf {
    suffixed_path(input_path, BORDERS_SUFFIX)
}
