use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use goldspiral::{FrameIndex, FrameRange, Presentation, SceneConfig};

#[derive(Parser, Debug)]
#[command(name = "goldspiral", version)]
struct Cli {
    /// Raise log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated geometry as JSON.
    Geometry(DumpArgs),
    /// Print the stage list with start times and durations as JSON.
    Timeline(DumpArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the presentation to MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Render the presentation as a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct ConfigArg {
    /// Scene configuration JSON; defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DumpArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Frame index (0-based).
    #[arg(long, conflicts_with = "time")]
    frame: Option<u64>,

    /// Presentation time in seconds; rounded down to a frame.
    #[arg(long)]
    time: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive); defaults to the end of the presentation.
    #[arg(long)]
    end: Option<u64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    config: ConfigArg,

    #[command(flatten)]
    range: RangeArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    config: ConfigArg,

    #[command(flatten)]
    range: RangeArgs,

    /// Output directory.
    #[arg(long)]
    dir: PathBuf,

    /// File name prefix.
    #[arg(long, default_value = "frame_")]
    prefix: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Geometry(args) => cmd_geometry(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(arg: &ConfigArg) -> anyhow::Result<SceneConfig> {
    match &arg.config {
        Some(path) => Ok(SceneConfig::load_json(path)?),
        None => Ok(SceneConfig::default()),
    }
}

fn write_json(value: &serde_json::Value, out: Option<&Path>) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize json")?;
    match out {
        Some(path) => {
            goldspiral::encode::ensure_parent_dir(path)?;
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_geometry(args: DumpArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let gs = goldspiral::build_golden_scene(&cfg)?;
    let value = serde_json::json!({
        "constants": gs.constants,
        "boundary": gs.boundary,
        "segments": gs.segments,
        "arcs": gs.arc_specs,
    });
    write_json(&value, args.out.as_deref())
}

fn cmd_timeline(args: DumpArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let gs = goldspiral::build_golden_scene(&cfg)?;
    let tl = goldspiral::golden_script(&gs, &cfg)?;
    let value = serde_json::json!({
        "duration": tl.duration(),
        "stages": tl.schedule(),
    });
    write_json(&value, args.out.as_deref())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let bg = cfg.background;
    let mut pres = Presentation::new(cfg)?;

    let frame = match (args.frame, args.time) {
        (Some(f), _) => FrameIndex(f),
        (None, Some(t)) => {
            anyhow::ensure!(t.is_finite() && t >= 0.0, "--time must be finite and >= 0");
            FrameIndex((t * pres.config().fps.as_f64()).floor() as u64)
        }
        (None, None) => FrameIndex(0),
    };

    let rendered = pres.render_frame(frame)?;
    goldspiral::encode::png::write_frame_png(&args.out, &rendered, bg.to_array())
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn resolve_range(pres: &Presentation, args: &RangeArgs) -> anyhow::Result<FrameRange> {
    let end = args.end.unwrap_or_else(|| pres.total_frames());
    Ok(FrameRange::new(FrameIndex(args.start), FrameIndex(end))?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let bg = cfg.background;
    let mut pres = Presentation::new(cfg)?;
    let range = resolve_range(&pres, &args.range)?;

    let mut opts = goldspiral::FfmpegSinkOpts::new(&args.out);
    opts.bg_rgb = bg.to_array();
    let mut sink = goldspiral::FfmpegSink::new(opts);
    let stats = pres.render_range(range, &mut sink)?;

    eprintln!(
        "wrote {} ({} frames, {} rendered)",
        args.out.display(),
        stats.frames_total,
        stats.frames_rendered
    );
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let bg = cfg.background;
    let mut pres = Presentation::new(cfg)?;
    let range = resolve_range(&pres, &args.range)?;

    let mut sink = goldspiral::PngSequenceSink::new(&args.dir, args.prefix, bg.to_array());
    let stats = pres.render_range(range, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_total,
        args.dir.display()
    );
    Ok(())
}
