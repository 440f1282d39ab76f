use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reel", version, about = "Script and inspect the portfolio reel")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Portfolio content JSON replacing the built-in profile.
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Render config JSON (quality, seed, pauses, background).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the config's quality preset (low, medium, high, production, 4k).
    #[arg(long, global = true)]
    quality: Option<reel::Quality>,

    /// Override the config's particle seed.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the realized timeline as JSON.
    Script(ScriptArgs),
    /// Print the evaluated state of one frame as JSON.
    Frame(FrameArgs),
    /// Stream evaluated frames as JSON lines.
    Frames(FramesArgs),
    /// Print scene spans and the timeline fingerprint.
    Summary,
}

#[derive(Args, Debug)]
struct ScriptArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FramesArgs {
    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the end of the reel when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Emit every n-th frame.
    #[arg(long, default_value_t = 1)]
    stride: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.common.quiet);

    let director = load_director(&cli.common)?;
    tracing::info!(
        name = %director.content().intro.name,
        quality = ?director.config().quality,
        seed = director.config().seed,
        "building reel"
    );
    let timeline = director
        .build_timeline()
        .context("build reel timeline")?;

    match cli.cmd {
        Command::Script(args) => cmd_script(&timeline, &args),
        Command::Frame(args) => cmd_frame(&timeline, &args),
        Command::Frames(args) => cmd_frames(&timeline, &args),
        Command::Summary => cmd_summary(&timeline),
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_director(args: &CommonArgs) -> anyhow::Result<reel::Director> {
    let mut config = match &args.config {
        Some(path) => reel::ReelConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => reel::ReelConfig::default(),
    };
    if let Some(q) = args.quality {
        config.quality = q;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let content = match &args.profile {
        Some(path) => reel::Portfolio::from_path(path)
            .with_context(|| format!("load profile '{}'", path.display()))?,
        None => reel::Portfolio::default(),
    };
    Ok(reel::Director::new(config, content))
}

fn create_out(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn cmd_script(timeline: &reel::Timeline, args: &ScriptArgs) -> anyhow::Result<()> {
    let json = timeline.to_json_pretty()?;
    let mut out = create_out(&args.out)?;
    out.write_all(json.as_bytes())
        .and_then(|()| out.flush())
        .with_context(|| format!("write '{}'", args.out.display()))?;
    tracing::info!(
        path = %args.out.display(),
        frames = timeline.duration.0,
        elements = timeline.elements.len(),
        "timeline written"
    );
    Ok(())
}

fn cmd_frame(timeline: &reel::Timeline, args: &FrameArgs) -> anyhow::Result<()> {
    let state = reel::Evaluator::eval_frame(timeline, reel::FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&state).context("serialize frame state")?;
    match &args.out {
        Some(path) => {
            let mut out = create_out(path)?;
            out.write_all(json.as_bytes())
                .and_then(|()| out.flush())
                .with_context(|| format!("write '{}'", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frames(timeline: &reel::Timeline, args: &FramesArgs) -> anyhow::Result<()> {
    let range = reel::FrameRange {
        start: reel::FrameIndex(args.start),
        end: reel::FrameIndex(args.end.unwrap_or(timeline.duration.0)),
    };
    let mut sink = reel::JsonLinesSink::new(create_out(&args.out)?);
    let stats = reel::render_frames(timeline, range, args.stride, &mut sink)
        .with_context(|| format!("stream frames to '{}'", args.out.display()))?;
    tracing::info!(
        path = %args.out.display(),
        pushed = stats.frames_pushed,
        "frames written"
    );
    Ok(())
}

fn cmd_summary(timeline: &reel::Timeline) -> anyhow::Result<()> {
    let fp = reel::fingerprint_timeline(timeline)?;
    let fps = timeline.fps;
    println!(
        "{}x{} @ {} fps, {} frames ({:.2}s), seed {}",
        timeline.canvas.width,
        timeline.canvas.height,
        fps.as_f64(),
        timeline.duration.0,
        fps.frames_to_secs(timeline.duration.0),
        timeline.seed
    );
    for span in &timeline.scenes {
        println!(
            "{:<10} {:>6}..{:<6} {:>6.2}s..{:.2}s",
            span.name,
            span.range.start.0,
            span.range.end.0,
            fps.frames_to_secs(span.range.start.0),
            fps.frames_to_secs(span.range.end.0)
        );
    }
    println!("fingerprint {fp}");
    Ok(())
}
