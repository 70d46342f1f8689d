use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "barrace", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out every frame transition and write the descriptors as JSON.
    Layout(LayoutArgs),
    /// Write an SVG snapshot of the transition into one frame.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target frame index (0-based); the transition starts at the frame before it.
    #[arg(long)]
    frame: usize,

    /// Eased transition progress in [0, 1].
    #[arg(long, conflicts_with = "elapsed")]
    progress: Option<f64>,

    /// Seconds since the transition started; eased with the chart's timing.
    #[arg(long)]
    elapsed: Option<f64>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<(barrace::ChartSpec, barrace::RaceLayout)> {
    let spec = barrace::ChartSpec::from_path(path)
        .with_context(|| format!("load chart '{}'", path.display()))?;
    let engine = barrace::RaceLayout::from_spec(&spec)?;
    Ok((spec, engine))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let (spec, engine) = load(&args.in_path)?;
    let frames = engine.layout_sequence(&spec.frames)?;

    #[derive(serde::Serialize)]
    struct Output<'a> {
        legend: Vec<barrace::LegendEntry>,
        axis: Vec<barrace::AxisTick>,
        timing: barrace::Timing,
        frames: &'a [barrace::FrameLayout],
    }
    let out = Output {
        legend: engine.legend(),
        axis: engine.axis()?,
        timing: spec.timing,
        frames: &frames,
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };

    match &args.out {
        Some(path) => {
            ensure_parent_dir(path)?;
            std::fs::write(path, json)
                .with_context(|| format!("write layout '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write layout to stdout")?;
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (spec, engine) = load(&args.in_path)?;
    let current = spec.frames.get(args.frame).with_context(|| {
        format!(
            "frame {} out of range (chart has {} frames)",
            args.frame,
            spec.frames.len()
        )
    })?;
    let previous = args
        .frame
        .checked_sub(1)
        .and_then(|i| spec.frames.get(i));

    let progress = match (args.progress, args.elapsed) {
        (Some(p), _) => {
            anyhow::ensure!((0.0..=1.0).contains(&p), "--progress must be in [0, 1]");
            p
        }
        (None, Some(secs)) => spec.timing.progress_at(secs),
        (None, None) => 1.0,
    };

    let layout = engine.layout(previous, current)?;
    let legend = engine.legend();
    let axis = engine.axis()?;
    let cfg = engine.config();
    let chrome = barrace::Chrome {
        config: cfg,
        legend: &legend,
        axis: &axis,
        title: spec.title.as_deref(),
    };

    let mut surface = barrace::SvgSurface::new(
        cfg.canvas_width,
        cfg.canvas_height,
        Some(barrace::Color::from_rgb8(255, 255, 255)),
    );
    barrace::paint_frame(&layout, &chrome, progress, &mut surface);

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, surface.finish())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn ensure_parent_dir(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
