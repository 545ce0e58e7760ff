//! Disha command-line front end.
//!
//! ```text
//! disha lattice              # drive the grid robot from stdin
//! disha drive                # drive the continuous robot from stdin
//! disha explore -n 5000      # run the autonomous explorer
//! disha init-config          # write a default disha.toml
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides `logging.level`); renders go to
//! stdout.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use disha::command::{DriveCommand, LatticeCommand};
use disha::config::{DEFAULT_CONFIG_PATH, DishaConfig};
use disha::explore::{ExplorationTask, FrameBuffer, StopSignal};
use disha::lattice::LatticeSnapshot;
use disha::session::{DriveSession, LatticeSession};
use disha::{DishaError, Result, RobotSnapshot};

/// Grid and continuous exploration robots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to ./disha.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Drive the grid robot with commands read from stdin
    Lattice,

    /// Drive the continuous robot with commands read from stdin
    Drive,

    /// Run the autonomous explorer until Ctrl-C or the iteration cap
    Explore {
        /// Stop after this many iterations (overrides explorer.max_iterations)
        #[arg(short = 'n', long)]
        iterations: Option<u64>,

        /// Status log interval in milliseconds
        #[arg(long, default_value = "500")]
        status_ms: u64,
    },

    /// Write the default configuration to a file
    InitConfig {
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    // Config errors surface before logging is set up, so report on stderr directly
    if let Err(e) = run() {
        eprintln!("disha: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DishaConfig::load(path)?,
        None => DishaConfig::load_default()?,
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Disha v{}", env!("CARGO_PKG_VERSION"));
    match &args.config {
        Some(path) => info!("Loaded configuration from {:?}", path),
        None => info!("Using {} or defaults", DEFAULT_CONFIG_PATH),
    }

    let stop = StopSignal::new();
    let handler_stop = stop.clone();
    ctrlc::set_handler(move || {
        if handler_stop.is_raised() {
            std::process::exit(130);
        }
        info!("Received shutdown signal (again to force quit)");
        handler_stop.raise();
    })
    .map_err(|e| DishaError::Thread(format!("Error setting Ctrl-C handler: {}", e)))?;

    match args.mode {
        Mode::Lattice => run_lattice(&config, &stop),
        Mode::Drive => run_drive(&config, &stop),
        Mode::Explore {
            iterations,
            status_ms,
        } => run_explore(&config, &stop, iterations, Duration::from_millis(status_ms)),
        Mode::InitConfig { path, force } => init_config(&config, &path, force),
    }
}

/// Feed trimmed, non-empty, non-comment stdin lines to `handle` until EOF or stop.
fn for_each_line<F>(stop: &StopSignal, mut handle: F) -> Result<()>
where
    F: FnMut(&str),
{
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if stop.is_raised() {
            break;
        }
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        handle(line);
    }
    Ok(())
}

fn write_lattice<W: Write>(out: &mut W, snapshot: &LatticeSnapshot) -> io::Result<()> {
    let counts = snapshot.map.counts();
    write!(out, "{}", snapshot.map)?;
    writeln!(
        out,
        "robot {} facing {} | obstacles {} mapped {}\n",
        snapshot.robot, snapshot.heading, counts.obstacle, counts.mapped
    )
}

fn write_robot<W: Write>(out: &mut W, snapshot: &RobotSnapshot) -> io::Result<()> {
    writeln!(
        out,
        "x {:.2} y {:.2} heading {:.1}° sensor {}",
        snapshot.position.x,
        snapshot.position.y,
        snapshot.heading.to_degrees(),
        snapshot.sensor
    )
}

/// Render sink writing to stdout; write failures are logged, not fatal.
fn stdout_sink<S>(write: fn(&mut io::StdoutLock<'static>, &S) -> io::Result<()>) -> impl FnMut(&S) {
    move |snapshot: &S| {
        if let Err(e) = write(&mut io::stdout().lock(), snapshot) {
            warn!("Failed to write render output: {}", e);
        }
    }
}

fn run_lattice(config: &DishaConfig, stop: &StopSignal) -> Result<()> {
    let mut session = LatticeSession::new(config.build_navigator()?);
    info!(
        "Lattice {}x{}, footprint {}",
        config.lattice.size, config.lattice.size, config.lattice.footprint
    );
    let mut sink = stdout_sink(write_lattice);
    sink(&session.navigator().snapshot());

    for_each_line(stop, |line| match line.parse::<LatticeCommand>() {
        Ok(command) => {
            session.apply(command, &mut sink);
        }
        Err(e) => warn!("{}", e),
    })
}

fn run_drive(config: &DishaConfig, stop: &StopSignal) -> Result<()> {
    let robot = config.build_robot()?;
    let mut session = DriveSession::new(
        robot,
        config.rotation.default_degrees,
        Duration::from_millis(config.rotation.step_delay_ms),
    );
    let mut sink = stdout_sink(write_robot);
    sink(&session.robot().snapshot());

    for_each_line(stop, |line| match line.parse::<DriveCommand>() {
        Ok(command) => {
            session.apply(command, stop, &mut sink);
        }
        Err(e) => warn!("{}", e),
    })
}

fn run_explore(
    config: &DishaConfig,
    stop: &StopSignal,
    iterations: Option<u64>,
    status_interval: Duration,
) -> Result<()> {
    let robot = config.build_robot()?;
    let mut timing = config.task_timing();
    if iterations.is_some() {
        timing.max_iterations = iterations;
    }

    let task = ExplorationTask::new(robot, config.explorer_config(), timing)?;
    let frames = FrameBuffer::new();
    let handle = task.spawn(stop.clone(), frames.clone())?;

    // Main thread: report progress until the task ends
    while !handle.is_finished() {
        thread::sleep(status_interval);
        if let Some(frame) = frames.latest() {
            info!(
                "#{} {:?} at ({:.1}, {:.1}) sensor {} cursor {} visited {}",
                frame.iteration,
                frame.state,
                frame.robot.position.x,
                frame.robot.position.y,
                frame.robot.sensor,
                frame.cursor,
                frame.occupancy.visited_count()
            );
        }
    }

    let (summary, task) = handle
        .join()
        .map_err(|_| DishaError::Thread("exploration thread panicked".into()))?;

    print!("{}", task.explorer().grid());
    println!(
        "{} iterations, {} cells visited ({:?})",
        summary.iterations, summary.visited_cells, summary.reason
    );
    Ok(())
}

fn init_config(config: &DishaConfig, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(DishaError::Config(format!(
            "{:?} already exists (use --force to overwrite)",
            path
        )));
    }
    config.to_file(path)?;
    info!("Wrote configuration to {:?}", path);
    Ok(())
}
