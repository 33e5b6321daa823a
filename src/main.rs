use clap::Parser;
use log::{LevelFilter, debug, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use todos::core::config::{self, CliOverrides, LogLevel, LogTarget, ResolvedConfig, TodosConfig};
use todos::core::TodoList;
use todos::shell::input::Console;
use todos::shell::output::Renderer;
use todos::{SessionEnd, Shell};

#[derive(Parser)]
#[command(name = "todos", about = "In-memory todo list driven by a text menu")]
struct Args {
    /// Config file to read instead of ~/.todos/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Log file path, or "stderr"
    #[arg(long)]
    log_file: Option<String>,

    /// Plain output without colours
    #[arg(long)]
    no_color: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let source = config::config_source(args.config.as_deref());
    let (file_config, load_error) = match config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("Warning: {e}; using default settings");
            (TodosConfig::default(), Some(e))
        }
    };
    let cli = CliOverrides {
        log_level: args.log_level,
        log_file: args.log_file,
        no_color: args.no_color,
    };
    let resolved = config::resolve(&file_config, &cli);

    init_logging(&resolved);
    info!("Todos starting up");
    match (&source, &load_error) {
        (Some(path), Some(e)) => warn!("Ignoring config {}: {}", path.display(), e),
        (Some(path), None) => info!("Loaded config from {}", path.display()),
        (None, _) => info!("No config file found, using defaults"),
    }
    debug!("Config: {:?}", file_config);
    debug!("Resolved: {:?}", resolved);

    // The shell blocks on stdin, so it runs on a blocking thread while the
    // runtime waits for either the session to end or Ctrl-C.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let end = runtime.block_on(run_session(resolved));
    runtime.shutdown_background();

    info!("Todos shutting down: {:?}", end);
    end.map(|_| ())
}

fn init_logging(config: &ResolvedConfig) {
    if config.log_level == LevelFilter::Off {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match &config.log_target {
        LogTarget::Stderr => {
            let _ = WriteLogger::init(config.log_level, log_config, io::stderr());
        }
        LogTarget::File(path) => match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(config.log_level, log_config, log_file);
            }
            Err(e) => eprintln!("Warning: cannot open log file {}: {e}", path.display()),
        },
    }
}

async fn run_session(config: ResolvedConfig) -> io::Result<SessionEnd> {
    let renderer = Renderer::from_config(&config);
    let session = tokio::task::spawn_blocking(move || {
        let console = Console::new(io::stdin().lock(), io::stdout(), renderer);
        Shell::new(TodoList::default(), console).run()
    });

    tokio::select! {
        joined = session => joined.map_err(io::Error::other)?,
        _ = tokio::signal::ctrl_c() => {
            println!("\n\nInterrupted by user. Exiting...");
            info!("Session interrupted by signal");
            Ok(SessionEnd::Interrupted)
        }
    }
}
