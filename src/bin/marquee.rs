use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "marquee", version)]
struct Cli {
    /// Log engine diagnostics at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step the engine through a scenario and write per-frame offsets as JSON.
    Simulate(SimulateArgs),
    /// Print the repeated content of each track.
    Text(TextArgs),
    /// Validate a configuration file.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Engine configuration JSON (stock two-track marquee when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scenario JSON.
    #[arg(long)]
    scenario: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Keep every Nth frame.
    #[arg(long, default_value_t = 1)]
    every: u64,
}

#[derive(Parser, Debug)]
struct TextArgs {
    /// Engine configuration JSON (stock two-track marquee when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print this track.
    #[arg(long)]
    track: Option<String>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Engine configuration JSON.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Text(args) => cmd_text(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<marquee::MarqueeConfig> {
    let cfg = match path {
        Some(p) => marquee::MarqueeConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => marquee::MarqueeConfig::default(),
    };
    cfg.validate().context("invalid config")?;
    Ok(cfg)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let scenario = marquee::Scenario::from_path(&args.scenario)
        .with_context(|| format!("load scenario '{}'", args.scenario.display()))?;
    let frames = marquee::simulate_with_opts(
        &cfg,
        &scenario,
        marquee::SimulateOpts { every: args.every },
    )?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &frames)
                .with_context(|| format!("write '{}'", out.display()))?;
            w.flush()?;
            eprintln!("wrote {} frames to {}", frames.len(), out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &frames).context("write stdout")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_text(args: TextArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let engine = marquee::MarqueeEngine::new(cfg)?;
    let mut matched = false;
    for track in engine.tracks() {
        if args.track.as_deref().is_some_and(|name| name != track.name()) {
            continue;
        }
        matched = true;
        println!("{}: {}", track.name(), track.content().text());
    }
    if let Some(name) = args.track.filter(|_| !matched) {
        anyhow::bail!("no track named '{name}'");
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = load_config(Some(&args.config))?;
    let spring = marquee::DampedSignalFilter::new(cfg.spring)?;
    println!(
        "ok: {} track(s), damping ratio {:.3}{}",
        cfg.tracks.len(),
        cfg.spring.damping_ratio(),
        if spring.is_overdamped_or_critical() {
            ""
        } else {
            " (underdamped)"
        }
    );
    Ok(())
}
