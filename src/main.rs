use clap::Parser;
use macroplay::mach::{Settings, DEFAULT_DELAY, DEFAULT_MAX_DEPTH};
use macroplay::term::{self, TraceBackend};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Replays a macro script of mouse and keyboard events
#[derive(Parser, Debug)]
#[command(name = "macroplay", version)]
struct Args {
    /// Macro script to run
    script: PathBuf,

    /// Target display, defaults to $DISPLAY
    display: Option<String>,

    /// Default event delay in milliseconds
    #[arg(long, short = 'd', default_value_t = DEFAULT_DELAY)]
    delay: u64,

    /// Multiply every absolute and relative coordinate by this factor
    #[arg(long, short = 's', default_value_t = 1.0)]
    scale: f32,

    /// Maximum depth of nested calls
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    stack_depth: usize,

    /// Log every command as it runs
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose {
        EnvFilter::new("macroplay=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("macroplay=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let target = args
        .display
        .or_else(|| std::env::var("DISPLAY").ok())
        .unwrap_or_default();
    tracing::info!(display = %target, "dry run");
    let settings = Settings::new(args.delay, args.scale).with_max_depth(args.stack_depth);
    let mut backend = TraceBackend::new(std::io::stdout());
    std::process::exit(term::main(&args.script, settings, &mut backend));
}
