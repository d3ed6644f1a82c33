use clap::{Parser, Subcommand};
use fill_resize::config::{self, DEFAULT_CONFIG_FILE};
use fill_resize::imaging::{
    Dimensions, FillError, FillRequest, RustBackend, Source, TargetSize, fill_resize, plan_fill,
};
use fill_resize::output;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fill-resize")]
#[command(about = "Crop to aspect ratio, then resize to exact dimensions")]
#[command(long_about = "\
Crop to aspect ratio, then resize to exact dimensions

The source is cropped to the target's width:height ratio, centered, and the
crop is scaled to exactly the requested size. Nothing is stretched and nothing
is padded.

Sources:
  photo.jpg                  Local file (format sniffed from content)
  https://host/photo.jpg     Fetched over HTTP(S); non-2xx responses fail
  -                          Encoded image read from stdin

Output format follows the --output extension:
  jpg, jpeg, png, tif, tiff, webp, gif, avif

Run 'fill-resize gen-config' to print a documented fill-resize.toml.")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./fill-resize.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill-resize one image
    Resize {
        /// Local path, http(s) URL, or '-' for stdin
        source: String,
        /// Target width in pixels
        #[arg(long, allow_negative_numbers = true)]
        width: i64,
        /// Target height in pixels
        #[arg(long, allow_negative_numbers = true)]
        height: i64,
        /// Where to write the result
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the crop box for given dimensions without touching any image
    Plan {
        /// Source image width
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        source_width: u32,
        /// Source image height
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        source_height: u32,
        /// Target width in pixels
        #[arg(long, allow_negative_numbers = true)]
        width: i64,
        /// Target height in pixels
        #[arg(long, allow_negative_numbers = true)]
        height: i64,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock fill-resize.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Resize {
            source,
            width,
            height,
            output: save_to,
        } => {
            let config =
                config::load_config(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
            let source = resolve_source(&source)?;
            let fetcher = config.http_fetcher()?;
            let request = FillRequest {
                source,
                width,
                height,
                save_to,
            };
            let outcome = fill_resize(
                &RustBackend::new(),
                &fetcher,
                &request,
                config.fill_options(),
            )?;
            output::print_resize(
                &request.source,
                outcome.saved_to.as_deref(),
                &outcome.plan,
            );
        }
        Command::Plan {
            source_width,
            source_height,
            width,
            height,
            json,
        } => {
            let target = TargetSize::new(width, height).map_err(FillError::from)?;
            let plan = plan_fill(Dimensions::new(source_width, source_height), target);
            if json {
                println!("{}", output::format_plan_json(&plan)?);
            } else {
                output::print_plan(&plan);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for results.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "fill_resize=warn",
        1 => "fill_resize=debug",
        _ => "fill_resize=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Turn the command-line reference into a tagged source, reading stdin for `-`.
fn resolve_source(reference: &str) -> std::io::Result<Source> {
    if reference == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(Source::Bytes(bytes));
    }
    Ok(Source::from_reference(reference))
}
