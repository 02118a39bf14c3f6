use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use huntpath::config::{DEFAULT_DATA_FILE, DEFAULT_MAPS_DIR, DEFAULT_OUTPUT_DIR};
use huntpath::report::format_path;
use huntpath::{Catalog, DetectionPipeline, Expansion, PathGenerator};

#[derive(Parser)]
#[command(name = "huntpath")]
#[command(about = "Detect hunt mark spawn circles on a map and plot a route through them")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Save intermediate detection images to directory (must be empty)
    #[arg(long, value_name = "DIR", global = true)]
    debug_out: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a path for a map screenshot
    Image {
        /// Path to input map image
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Label used for the output file name
        #[arg(long)]
        name: String,

        /// Directory for annotated maps
        #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,
    },

    /// Generate a path for a hunt mark from the data file
    Mark {
        #[arg(long, value_enum, ignore_case = true)]
        expansion: Expansion,

        /// Map code of the hunt mark within its expansion
        #[arg(long)]
        map_code: u32,

        /// Hunt mark data (JSON)
        #[arg(long, value_name = "FILE", default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,

        /// Directory holding the map screenshots
        #[arg(long, value_name = "DIR", default_value = DEFAULT_MAPS_DIR)]
        maps_dir: PathBuf,

        /// Directory for annotated maps
        #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,
    },

    /// List hunt marks, grouped by expansion
    List {
        /// Only list one expansion
        #[arg(long, value_enum, ignore_case = true)]
        expansion: Option<Expansion>,

        /// Hunt mark data (JSON)
        #[arg(long, value_name = "FILE", default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut detector = DetectionPipeline::new();
    if let Some(dir) = &args.debug_out {
        detector = detector.with_debug(dir);
    }

    match args.command {
        Command::Image {
            image_path,
            name,
            out_dir,
        } => run_path(&image_path, &name, detector, out_dir),
        Command::Mark {
            expansion,
            map_code,
            data,
            maps_dir,
            out_dir,
        } => {
            let catalog = Catalog::load(&data)?;
            let mark = catalog.find(expansion, map_code)?;
            println!("Selected: {} (ID: {})", mark.name, mark.map_code);

            let map_image = mark.map_path(&maps_dir);
            if !map_image.exists() {
                anyhow::bail!("Map image not found at {}", map_image.display());
            }
            println!("Processing map: {}", map_image.display());

            run_path(&map_image, &mark.name, detector, out_dir)
        }
        Command::List { expansion, data } => {
            let catalog = Catalog::load(&data)?;
            let expansions = match expansion {
                Some(e) => vec![e],
                None => catalog.expansions(),
            };
            for expansion in expansions {
                println!("{expansion}:");
                for mark in catalog.marks_for(expansion) {
                    println!("  {}. {}", mark.map_code, mark.name);
                }
            }
            Ok(())
        }
    }
}

fn run_path(image_path: &Path, label: &str, detector: DetectionPipeline, out_dir: PathBuf) -> anyhow::Result<()> {
    let generator = PathGenerator::new(out_dir).with_detector(detector);

    match generator.generate(image_path, label) {
        Ok(result) => {
            println!("\nFiltered {} outlier points", result.excluded);
            println!("\n{}", format_path(&result.path));
            println!("Path visualization saved to: {}", result.output.display());
            Ok(())
        }
        Err(e) if e.is_no_markers() => {
            tracing::warn!("{e}");
            println!("No circles detected!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
