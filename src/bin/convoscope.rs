use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "convoscope", version, about = "Step-by-step discrete convolution")]
struct Cli {
    /// Session config JSON; flags below override its fields.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Input signal, e.g. "0.1, 0.5, 1, 1.5".
    #[arg(long = "x", global = true, allow_hyphen_values = true)]
    x: Option<String>,

    /// Impulse response, e.g. "1, 1, 1".
    #[arg(long = "h", global = true, allow_hyphen_values = true)]
    h: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full output y = x * h.
    Compute(ComputeArgs),
    /// Print the products that make up y[n].
    Step(StepArgs),
    /// Render one stage frame as PNG or SVG.
    Frame(FrameArgs),
    /// Render the whole sweep as an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Scan through the output in the terminal.
    Play(PlayArgs),
    /// Ask the assistant to explain step n.
    Explain(ExplainArgs),
    /// Ask the assistant for a signal matching a description.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct ComputeArgs {
    /// Print JSON instead of a plain list.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct StepArgs {
    /// Scanning index (defaults to the config's).
    #[arg(long, allow_hyphen_values = true)]
    n: Option<i64>,

    /// Which operand stays fixed.
    #[arg(long, value_enum, default_value_t = FramingChoice::InputFixed)]
    framing: FramingChoice,

    /// Print JSON instead of the breakdown text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scanning index (defaults to the config's).
    #[arg(long, allow_hyphen_values = true)]
    n: Option<i64>,

    /// Output path; `.svg` writes the document, anything else a PNG.
    #[arg(long)]
    out: PathBuf,

    /// Raster scale factor.
    #[arg(long)]
    scale: Option<f64>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Output frame rate.
    #[arg(long)]
    fps: Option<u32>,

    /// How long each index stays on screen.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Raster scale factor.
    #[arg(long)]
    scale: Option<f64>,

    /// Rasterize on the calling thread only.
    #[arg(long)]
    sequential: bool,

    /// Worker threads for rasterization.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Interval between ticks (defaults to the config's).
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Starting index (defaults to the config's).
    #[arg(long, allow_hyphen_values = true)]
    from: Option<i64>,

    /// Do not sleep between ticks.
    #[arg(long)]
    instant: bool,
}

#[derive(Parser, Debug)]
struct ExplainArgs {
    /// Scanning index (defaults to the config's).
    #[arg(long, allow_hyphen_values = true)]
    n: Option<i64>,

    /// Answer language (defaults to the config's).
    #[arg(long)]
    language: Option<String>,

    /// Use the built-in offline assistant.
    #[arg(long)]
    offline: bool,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Free-text description of the signal.
    description: String,

    /// Use the built-in offline assistant.
    #[arg(long)]
    offline: bool,

    /// Print JSON instead of a plain list.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FramingChoice {
    InputFixed,
    ImpulseFixed,
}

impl From<FramingChoice> for convoscope::Framing {
    fn from(c: FramingChoice) -> Self {
        match c {
            FramingChoice::InputFixed => Self::InputFixed,
            FramingChoice::ImpulseFixed => Self::ImpulseFixed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref(), cli.x.as_deref(), cli.h.as_deref())?;
    match cli.cmd {
        Command::Compute(args) => cmd_compute(&cfg, args),
        Command::Step(args) => cmd_step(&cfg, args),
        Command::Frame(args) => cmd_frame(cfg, args),
        Command::Render(args) => cmd_render(cfg, args),
        Command::Play(args) => cmd_play(cfg, args),
        Command::Explain(args) => cmd_explain(cfg, args),
        Command::Generate(args) => cmd_generate(&cfg, args),
    }
}

fn load_config(
    path: Option<&Path>,
    x: Option<&str>,
    h: Option<&str>,
) -> anyhow::Result<convoscope::SessionConfig> {
    let mut cfg = match path {
        Some(p) => convoscope::SessionConfig::load(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => convoscope::SessionConfig::default(),
    };
    if let Some(text) = x {
        cfg.x = convoscope::parse_signal(text).context("parse --x")?;
    }
    if let Some(text) = h {
        cfg.h = convoscope::parse_signal(text).context("parse --h")?;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_compute(cfg: &convoscope::SessionConfig, args: ComputeArgs) -> anyhow::Result<()> {
    let y = convoscope::convolve(&cfg.x, &cfg.h);
    if args.json {
        println!("{}", serde_json::to_string(&y)?);
    } else {
        println!("{}", convoscope::format_signal(&y));
    }
    Ok(())
}

fn cmd_step(cfg: &convoscope::SessionConfig, args: StepArgs) -> anyhow::Result<()> {
    let n = args.n.unwrap_or(cfg.n);
    let step = convoscope::decompose_step_framed(&cfg.x, &cfg.h, n, args.framing.into());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&step)?);
        return Ok(());
    }
    let breakdown = convoscope::Breakdown::build(&cfg.x, &cfg.h, &step);
    println!("{breakdown}");
    Ok(())
}

fn cmd_frame(mut cfg: convoscope::SessionConfig, args: FrameArgs) -> anyhow::Result<()> {
    if let Some(scale) = args.scale {
        cfg.render.scale = scale;
    }
    cfg.render.validate()?;
    let n = args.n.unwrap_or(cfg.n);

    let is_svg = args
        .out
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        let svg = convoscope::render_stage_svg(&cfg.x, &cfg.h, n, &cfg.render);
        convoscope::ensure_parent_dir(&args.out)?;
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    } else {
        let frame = convoscope::render_frame(&cfg.x, &cfg.h, n, &cfg.render)?;
        frame.write_png(&args.out)?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(mut cfg: convoscope::SessionConfig, args: RenderArgs) -> anyhow::Result<()> {
    if let Some(scale) = args.scale {
        cfg.render.scale = scale;
    }
    if let Some(fps) = args.fps {
        cfg.encode.fps = fps;
    }
    if let Some(ms) = args.interval_ms {
        cfg.interval_ms = ms;
    }
    cfg.validate()?;

    if !convoscope::is_ffmpeg_on_path() {
        anyhow::bail!("ffmpeg not found on PATH");
    }

    let opts = convoscope::SweepVideoOpts {
        fps: cfg.encode.fps,
        interval_ms: cfg.interval_ms,
        overwrite: true,
        threading: convoscope::RenderThreading {
            parallel: !args.sequential,
            threads: args.threads,
        },
    };
    let stats = convoscope::render_sweep_to_mp4(&cfg.x, &cfg.h, &cfg.render, &opts, &args.out)?;

    eprintln!(
        "wrote {} ({} indices, {} frames)",
        args.out.display(),
        stats.indices,
        stats.frames
    );
    Ok(())
}

fn cmd_play(mut cfg: convoscope::SessionConfig, args: PlayArgs) -> anyhow::Result<()> {
    if let Some(ms) = args.interval_ms {
        cfg.interval_ms = ms;
    }
    if let Some(n) = args.from {
        cfg.n = n;
    }
    cfg.validate()?;

    let mut session = cfg.into_session();
    let interval = session.scan().interval();
    session.play();
    loop {
        print_scan_line(&mut session);
        match session.tick() {
            convoscope::TickOutcome::Advanced(_) => {
                if !args.instant {
                    std::thread::sleep(interval);
                }
            }
            convoscope::TickOutcome::Stopped(_) | convoscope::TickOutcome::Idle => break,
        }
    }
    let (hits, misses) = session.cache_stats();
    tracing::debug!(hits, misses, "output cache");
    Ok(())
}

fn print_scan_line(session: &mut convoscope::Session) {
    let n = session.n();
    let step = session.current_step();
    let breakdown = convoscope::Breakdown::build(session.x(), session.h(), &step);
    let y = session
        .current_value()
        .map(convoscope::short_num)
        .unwrap_or_else(|| "-".to_string());
    println!("n={n:>3}  y[n]={y:>6}  {}", breakdown.headline());
}

fn make_assistant(
    cfg: &convoscope::AssistConfig,
    offline: bool,
) -> anyhow::Result<Arc<dyn convoscope::Assistant>> {
    if offline {
        return Ok(Arc::new(convoscope::OfflineAssistant));
    }
    #[cfg(feature = "assist")]
    {
        if cfg.api_key().is_some() {
            return Ok(Arc::new(convoscope::GeminiAssistant::from_env(cfg)?));
        }
        tracing::warn!("no assistant API key in the environment; using the offline assistant");
    }
    #[cfg(not(feature = "assist"))]
    {
        let _ = cfg;
        tracing::warn!("built without the `assist` feature; using the offline assistant");
    }
    Ok(Arc::new(convoscope::OfflineAssistant))
}

fn assist_deadline(cfg: &convoscope::AssistConfig) -> Duration {
    // a little past the HTTP timeout so transport errors win the race
    Duration::from_millis(cfg.timeout_ms.saturating_add(1_000))
}

fn cmd_explain(mut cfg: convoscope::SessionConfig, args: ExplainArgs) -> anyhow::Result<()> {
    if let Some(language) = args.language {
        cfg.assist.language = language;
    }
    if let Some(n) = args.n {
        cfg.n = n;
    }
    cfg.validate()?;

    let assistant = make_assistant(&cfg.assist, args.offline)?;
    let deadline = assist_deadline(&cfg.assist);
    let mut session = cfg.into_session();
    let req = convoscope::ExplainRequest::from_session(&mut session);

    let pending = convoscope::spawn_explain(assistant, req)?;
    let text = pending.wait_timeout(deadline).unwrap_or_else(|err| {
        tracing::error!(%err, "explanation did not arrive");
        convoscope::FALLBACK_FAILED_EXPLANATION.to_string()
    });
    session.set_explanation(text);
    if let Some(text) = session.explanation() {
        println!("{text}");
    }
    Ok(())
}

fn cmd_generate(cfg: &convoscope::SessionConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let assistant = make_assistant(&cfg.assist, args.offline)?;
    let pending = convoscope::spawn_generate(assistant, args.description)?;
    let signal = pending
        .wait_timeout(assist_deadline(&cfg.assist))
        .unwrap_or_else(|err| {
            tracing::error!(%err, "signal did not arrive");
            convoscope::Signal::from(convoscope::FALLBACK_FAILED_SIGNAL.to_vec())
        });
    if args.json {
        println!("{}", serde_json::to_string(&signal)?);
    } else {
        println!("{}", convoscope::format_signal(&signal));
    }
    Ok(())
}
