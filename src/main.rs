use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use edgelab::{
    EdgeKind, EditorConfig, EditorSession, FilterKind, Pipeline, ProcessingParams,
};

#[derive(Parser)]
#[command(name = "edgelab")]
#[command(about = "Smooth images and run edge detectors on them")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive editor (default)
    Gui(GuiArgs),
    /// Load an image, apply one processing pass and save the result
    Process(ProcessArgs),
}

#[derive(Args, Default)]
struct GuiArgs {
    /// Keep at most this many undo steps (unbounded by default)
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    undo_depth: Option<usize>,

    /// Stretch Sobel/Laplacian output to the full range in the preview
    #[arg(long)]
    normalize_preview: bool,
}

#[derive(Args)]
struct ProcessArgs {
    /// Path to input image file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output path; the extension picks the format
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = FilterKind::None)]
    filter: FilterKind,

    #[arg(long, value_enum, default_value_t = EdgeKind::None)]
    edge: EdgeKind,

    /// Blur kernel side and Sobel aperture (even values are bumped to odd)
    #[arg(short, long, default_value_t = 1)]
    kernel_size: u32,

    #[arg(long, default_value_t = 0)]
    canny_low: u8,

    #[arg(long, default_value_t = 0)]
    canny_high: u8,

    /// Save every intermediate step to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    match args.command {
        Some(Command::Process(process)) => run_process(process, args.verbose),
        Some(Command::Gui(gui)) => run_gui(gui, args.verbose),
        None => run_gui(GuiArgs::default(), args.verbose),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "edgelab=debug" } else { "edgelab=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_process(args: ProcessArgs, verbose: bool) -> anyhow::Result<()> {
    let mut session = EditorSession::new(EditorConfig::default().with_verbose(verbose));

    if !session.load(&args.input)?.is_changed() {
        anyhow::bail!("no input image given");
    }

    let params = ProcessingParams::new(args.filter, args.edge)
        .with_kernel_size(args.kernel_size)
        .with_canny_thresholds(args.canny_low, args.canny_high);

    match args.debug_out {
        Some(debug_dir) => {
            let pipeline = Pipeline::from_params(&params)
                .with_verbose(verbose)
                .with_debug(debug_dir)?;
            session.apply_pipeline(&pipeline)?;
        }
        None => {
            session.apply(&params)?;
        }
    }

    if !session.save(&args.output)?.is_changed() {
        anyhow::bail!("no output path given");
    }

    if let Some(frame) = session.processed() {
        info!(
            width = frame.width(),
            height = frame.height(),
            channels = frame.channels(),
            gradient = frame.is_gradient(),
            "done"
        );
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(args: GuiArgs, verbose: bool) -> anyhow::Result<()> {
    let config = EditorConfig::default()
        .with_max_undo_depth(args.undo_depth)
        .with_normalized_gradient_preview(args.normalize_preview)
        .with_verbose(verbose);
    edgelab::gui::run(config).map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_args: GuiArgs, _verbose: bool) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; use the `process` subcommand")
}
