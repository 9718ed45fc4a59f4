use clap::{Parser, Subcommand};
use fruitpath::{
    config::{ConfigError, EngineConfig},
    protocol::Session,
    search::{
        search_engines::{run_until, AStar, RunResult, SearchEngine, SearchOutcome},
        validate_solution, Grid, HeuristicName, SearchNode, Verbosity,
    },
};
use itertools::Itertools;
use std::{
    error::Error,
    io::{BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Stepwise A* search over grids with barriers and a single-use power-up.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        global = true,
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a grid file to completion and print the path found. Files
    /// ending in `.json` are read as a JSON array of rows, anything else as
    /// grid text.
    Run {
        #[arg(help = "The grid file")]
        grid: PathBuf,
        #[command(flatten)]
        engine: EngineArgs,
        #[arg(
            help = "Print every expanded node",
            short = 't',
            long = "trace"
        )]
        trace: bool,
        #[arg(
            help = "Stop after this many steps",
            short = 'n',
            long = "max-steps",
            id = "MAX_STEPS"
        )]
        max_steps: Option<usize>,
        #[arg(
            help = "Stop after this much wall-clock time, e.g. \"500ms\" or \"1m 30s\"",
            long = "time-limit",
            id = "TIME_LIMIT"
        )]
        time_limit: Option<humantime::Duration>,
    },
    /// Answer JSON requests read line by line from stdin, one JSON response
    /// per line on stdout.
    Serve {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(clap::Args)]
struct EngineArgs {
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use [default: euclidean]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<HeuristicName>,
    #[arg(
        help = "A TOML file with engine settings, overridden by flags",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
}

impl EngineArgs {
    fn config(
        &self,
        max_steps: Option<usize>,
        time_limit: Option<Duration>,
    ) -> Result<EngineConfig, ConfigError> {
        let file = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        Ok(file.merged_with(EngineConfig {
            heuristic: self.heuristic,
            max_steps,
            time_limit,
        }))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.verbosity.install_subscriber(cli.colour);

    match execute(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Commands::Run {
            grid,
            engine,
            trace,
            max_steps,
            time_limit,
        } => {
            let config = engine.config(max_steps, time_limit.map(Into::into))?;
            run(grid, config, trace)
        }
        Commands::Serve { engine } => serve(engine.config(None, None)?),
    }
}

fn describe(node: &SearchNode) -> String {
    format!(
        "{} g={} f={:.3} fruit={}",
        node.position(),
        node.distance_traveled(),
        node.estimated_total_cost(),
        match (node.has_power_up(), node.used_power_up()) {
            (_, true) => "used",
            (true, false) => "held",
            (false, false) => "none",
        }
    )
}

fn run(path: PathBuf, config: EngineConfig, trace: bool) -> Result<ExitCode, Box<dyn Error>> {
    let grid = Grid::from_path(&path)?;
    info!(grid = %path.display(), heuristic = ?config.heuristic());
    let mut engine = AStar::with_heuristic_name(config.heuristic());
    let root = engine.start(grid.clone())?;
    if trace {
        println!("start {}", describe(&root));
    }

    let mut condition = config.termination_condition();
    let (visited, outcome) = match run_until(&mut engine, &mut condition)? {
        RunResult::Completed(completed) => (completed.visited, Ok(completed.outcome)),
        RunResult::Terminated { visited, reason } => (visited, Err(reason)),
    };
    if trace {
        for (i, node) in visited.iter().enumerate() {
            println!("{:>4} {}", i + 1, describe(node));
        }
    }

    match outcome {
        Ok(SearchOutcome::Found(node)) => {
            let cost = validate_solution(&grid, &node)?;
            info!("path is valid");
            println!("{}", grid.render_path(node.path()));
            println!("Path: {}", node.path().iter().join(" "));
            println!("Path cost: {}", cost);
            println!("Expanded nodes: {}", visited.len() + 1);
            Ok(ExitCode::SUCCESS)
        }
        Ok(SearchOutcome::Exhausted) => {
            println!("No path found after {} expanded nodes", visited.len());
            Ok(ExitCode::from(2))
        }
        Err(reason) => {
            println!(
                "Search stopped ({}) after {} steps, {} nodes on the frontier",
                reason,
                condition.steps(),
                engine.frontier().map_or(0, |frontier| frontier.len())
            );
            Ok(ExitCode::from(3))
        }
    }
}

fn serve(config: EngineConfig) -> Result<ExitCode, Box<dyn Error>> {
    let mut session = Session::new(Box::new(AStar::with_heuristic_name(config.heuristic())));
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", session.handle_line(&line)?)?;
        stdout.flush()?;
    }
    info!("input closed, ending session");
    Ok(ExitCode::SUCCESS)
}
