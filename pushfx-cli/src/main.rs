use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use pushfx::{
    Image, PngSequenceSink, Point, Rect, RenderThreading, TransitionInputs, TransitionKind,
    TransitionSpec,
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "pushfx", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` is honored too.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single transition frame as a PNG.
    Frame(FrameArgs),
    /// Render a whole transition as a PNG sequence.
    Sequence(SequenceArgs),
    /// Print the parameter schema of one or all transitions as JSON.
    Describe(DescribeArgs),
}

#[derive(Args, Debug)]
struct LayerArgs {
    /// Source image: a path to a PNG/JPEG or a `#RRGGBB[AA]` color.
    #[arg(long = "from")]
    from: String,

    /// Destination image: a path to a PNG/JPEG or a `#RRGGBB[AA]` color.
    #[arg(long = "to")]
    to: String,

    /// Extent width in pixels.
    #[arg(long)]
    width: u32,

    /// Extent height in pixels.
    #[arg(long)]
    height: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Transition kind (navigation|push, spread, genie, tab).
    #[arg(long)]
    kind: TransitionKind,

    /// Transition time in [0, 1].
    #[arg(long)]
    time: f64,

    /// Play the transition backwards.
    #[arg(long, default_value_t = false)]
    reverse: bool,

    /// Focal point `X,Y` (spread only; defaults to the extent center).
    #[arg(long, value_parser = parse_point)]
    center: Option<Point>,

    #[command(flatten)]
    layers: LayerArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Transition spec JSON.
    #[arg(long)]
    spec: PathBuf,

    #[command(flatten)]
    layers: LayerArgs,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Rasterize rows on a single thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    /// Transition kind; all kinds when omitted.
    #[arg(long)]
    kind: Option<TransitionKind>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Describe(args) => cmd_describe(args),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pushfx={level},pushfx_cli={level}")));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(format!("center must be finite, got '{s}'"));
    }
    Ok(Point::new(x, y))
}

fn extent_of(layers: &LayerArgs) -> anyhow::Result<Rect> {
    if layers.width == 0 || layers.height == 0 {
        bail!("--width and --height must be > 0");
    }
    Ok(Rect::new(
        0.0,
        0.0,
        f64::from(layers.width),
        f64::from(layers.height),
    ))
}

fn load_layer(arg: &str, extent: Rect) -> anyhow::Result<Image> {
    if arg.starts_with('#') {
        let color = pushfx::parse_hex_color(arg)?;
        return Ok(pushfx::solid_layer(color, extent)?);
    }
    let path = Path::new(arg);
    let img = image::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .to_rgba8();
    tracing::debug!(path = %path.display(), width = img.width(), height = img.height(), "loaded layer");
    Ok(Image::from_rgba_image(&img))
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let extent = extent_of(&args.layers)?;
    let source = load_layer(&args.layers.from, extent)?;
    let destination = load_layer(&args.layers.to, extent)?;

    let inputs = TransitionInputs::new(source, destination, extent)
        .with_time(args.time)
        .with_reverse(args.reverse)
        .with_center(args.center.unwrap_or_else(|| extent.center()));
    let Some(frame) = pushfx::render_frame(args.kind, &inputs, &RenderThreading::default())?
    else {
        bail!("{} transition produced no output", args.kind);
    };

    ensure_parent(&args.out)?;
    frame
        .to_rgba_image()?
        .save(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let spec = TransitionSpec::from_path(&args.spec)?;
    let extent = extent_of(&args.layers)?;
    let source = load_layer(&args.layers.from, extent)?;
    let destination = load_layer(&args.layers.to, extent)?;

    let threading = RenderThreading {
        parallel: !args.sequential,
        threads: args.threads,
    };
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = pushfx::render_transition_with(
        &spec,
        &source,
        &destination,
        extent,
        &mut sink,
        &threading,
    )?;

    eprintln!(
        "wrote {} frames to {} ({} skipped)",
        stats.frames_rendered,
        args.out_dir.display(),
        stats.frames_skipped
    );
    Ok(())
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let json = match args.kind {
        Some(kind) => kind.attributes().to_json_pretty()?,
        None => {
            let all: Vec<_> = TransitionKind::ALL
                .iter()
                .map(|k| k.attributes())
                .collect();
            serde_json::to_string_pretty(&all).context("serialize transition schemas")?
        }
    };
    println!("{json}");
    Ok(())
}
