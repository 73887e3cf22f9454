use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use protoviz::{
    Category, Clock as _, Config, DrawList, Ease, FrameBackend as _, ManualClock, ProgressMode,
    Rasterizer, Registry, SvgBackend, Surface, SystemClock, Theme, VisualizationPage,
    render_frame_at,
};

#[derive(Parser, Debug)]
#[command(name = "protoviz", version)]
struct Cli {
    /// Optional JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in protocols.
    List(ListArgs),
    /// Print the steps of one protocol.
    Steps(ProtocolArg),
    /// Print the scene script of one protocol as JSON.
    Scene(ProtocolArg),
    /// Render a single step as SVG or PNG (chosen by the output extension).
    Frame(FrameArgs),
    /// Render a full playback run as a numbered frame sequence.
    Animate(AnimateArgs),
    /// Play a protocol to completion on a simulated clock and export its log.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Only protocols in this category (e.g. `transport`, `data-link`).
    #[arg(long)]
    category: Option<Category>,
}

#[derive(Parser, Debug)]
struct ProtocolArg {
    /// Protocol id, e.g. `tcp-handshake`.
    id: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    id: String,

    /// Step index (0-based).
    #[arg(long, default_value_t = 0)]
    step: usize,

    /// Output path ending in `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// Use the light theme.
    #[arg(long)]
    light: bool,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    id: String,

    /// Directory for `frame_NNNNN.<format>` files.
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, default_value_t = 10)]
    fps: u32,

    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// `svg` or `png`.
    #[arg(long, default_value = "svg")]
    format: String,

    #[arg(long)]
    light: bool,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    id: String,

    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Write `<id>-simulation-log.txt` here; print only when omitted.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => Config::default(),
    };
    let registry = Registry::builtin().context("build protocol registry")?;

    match cli.cmd {
        Command::List(args) => cmd_list(registry, args),
        Command::Steps(args) => cmd_steps(registry, args),
        Command::Scene(args) => cmd_scene(registry, args),
        Command::Frame(args) => cmd_frame(registry, &config, args),
        Command::Animate(args) => cmd_animate(registry, &config, args),
        Command::Simulate(args) => cmd_simulate(registry, &config, args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PROTOVIZ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_list(registry: &Registry, args: ListArgs) -> anyhow::Result<()> {
    for def in registry
        .iter()
        .filter(|d| args.category.is_none_or(|c| d.category == c))
    {
        println!(
            "{:<18} {:<28} {:<13} {:<12} {} steps",
            def.id,
            def.name,
            def.category.label(),
            def.difficulty,
            def.steps.len()
        );
    }
    Ok(())
}

fn cmd_steps(registry: &Registry, args: ProtocolArg) -> anyhow::Result<()> {
    let def = registry.require(&args.id)?;
    println!("{}", def.name);
    for step in &def.steps {
        println!("{:>2}. {}: {}", step.ordinal, step.title, step.description);
    }
    Ok(())
}

fn cmd_scene(registry: &Registry, args: ProtocolArg) -> anyhow::Result<()> {
    let def = registry.require(&args.id)?;
    let json = serde_json::to_string_pretty(&def.scene).context("serialize scene")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(registry: &Registry, config: &Config, args: FrameArgs) -> anyhow::Result<()> {
    let def = registry.require(&args.id)?;
    if args.step > def.last_index() {
        anyhow::bail!(
            "step {} out of range: '{}' has {} steps",
            args.step,
            def.id,
            def.steps.len()
        );
    }
    let surface = Surface::new(
        args.width.unwrap_or(config.render.width),
        args.height.unwrap_or(config.render.height),
    );
    let theme = if args.light { Theme::LIGHT } else { config.theme };
    let list = render_frame_at(
        &def.scene,
        surface,
        args.step,
        false,
        &theme.palette(),
        ProgressMode::Snapshot,
        0,
    );
    if list.is_empty() {
        anyhow::bail!("surface {}x{} has no area", surface.width, surface.height);
    }

    let mut frames = FrameWriter::for_path(&args.out)?;
    frames.write(&list, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(
    registry: &'static Registry,
    config: &Config,
    args: AnimateArgs,
) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("fps must be > 0");
    }
    let clock = ManualClock::starting_at(0);
    let mut page = VisualizationPage::from_config(registry, &args.id, clock.clone(), config)?;
    if args.light {
        page.set_theme(Theme::LIGHT);
    }
    page.set_speed(args.speed)?;
    if page.progress_mode() == ProgressMode::Snapshot {
        let duration_ms = page.sequencer().tick_period_ms();
        page = page.with_progress_mode(ProgressMode::Elapsed {
            duration_ms,
            ease: Ease::EaseInOut,
        });
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let ext = args.format.to_ascii_lowercase();
    let mut frames = FrameWriter::for_extension(&ext)?;
    let frame_ms = (1_000 / u64::from(args.fps)).max(1);

    page.play();
    let mut index = 0usize;
    loop {
        let path = args.out_dir.join(format!("frame_{index:05}.{ext}"));
        frames.write(&page.frame(), &path)?;
        index += 1;
        if !page.sequencer().is_playing() {
            break;
        }
        clock.advance(frame_ms);
        page.pump();
    }
    page.teardown();

    eprintln!(
        "wrote {index} frames to {} ({} ms of playback)",
        args.out_dir.display(),
        clock.now().0
    );
    Ok(())
}

fn cmd_simulate(
    registry: &'static Registry,
    config: &Config,
    args: SimulateArgs,
) -> anyhow::Result<()> {
    // Simulated time, anchored at the real wall clock so log stamps read naturally.
    let clock = ManualClock::starting_at(SystemClock.now().0);
    let mut page = VisualizationPage::from_config(registry, &args.id, clock.clone(), config)?;
    page.set_speed(args.speed)?;
    page.play();
    while page.sequencer().is_playing() {
        clock.advance(page.sequencer().tick_period_ms());
        page.pump();
    }

    for line in page.sequencer().log().entries().iter().map(|e| e.line()) {
        println!("{line}");
    }
    if let Some(dir) = &args.out_dir {
        let path = page
            .save_log(dir)
            .with_context(|| format!("export log to '{}'", dir.display()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

/// Writes frames as SVG text or PNG, loading system fonts only when rasterizing.
enum FrameWriter {
    Svg(SvgBackend),
    Png(Rasterizer),
}

impl FrameWriter {
    fn for_path(path: &Path) -> anyhow::Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .with_context(|| format!("output '{}' has no extension", path.display()))?;
        Self::for_extension(&ext)
    }

    fn for_extension(ext: &str) -> anyhow::Result<Self> {
        match ext {
            "svg" => Ok(Self::Svg(SvgBackend)),
            "png" => Ok(Self::Png(Rasterizer::new())),
            other => anyhow::bail!("unsupported output format '{other}' (expected svg or png)"),
        }
    }

    fn write(&mut self, list: &DrawList, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        match self {
            Self::Svg(backend) => {
                let svg = backend.encode(list)?;
                std::fs::write(path, svg)
                    .with_context(|| format!("write svg '{}'", path.display()))?;
            }
            Self::Png(backend) => {
                let frame = backend.encode(list)?;
                protoviz::write_png(&frame, path)?;
            }
        }
        Ok(())
    }
}
