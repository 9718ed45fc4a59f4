mod repl_command;

use clap::Parser;
use console::{style, StyledObject};
use dialoguer::{theme::ColorfulTheme, BasicHistory, Input};
use fruitpath::search::{
    search_engines::{AStar, SearchEngine, SearchOutcome, StepResult},
    CellKind, Grid, HeuristicName, Position, SearchNode, Verbosity,
};
use repl_command::ReplCommand;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version)]
/// Step through a search interactively.
struct Cli {
    #[arg(help = "The grid file")]
    grid: PathBuf,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Euclidean
    )]
    heuristic: HeuristicName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    args.verbosity.install_subscriber(true);

    match Grid::from_path(&args.grid) {
        Ok(grid) => {
            run_repl(grid, AStar::with_heuristic_name(args.heuristic));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_repl(grid: Grid, mut engine: AStar) {
    let mut history = BasicHistory::new().max_entries(100).no_duplicates(true);
    // The most recent node handed out by the engine, highlighted by `show`.
    let mut latest: Option<SearchNode> = None;

    println!("{}", grid);
    #[allow(clippy::while_let_loop)]
    loop {
        if let Ok(cmd) = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("[{}] Enter command", engine.phase()))
            .history_with(&mut history)
            .interact_text()
        {
            let cmd = ReplCommand::parse(&cmd);
            match cmd {
                Some(ReplCommand::Exit) => break,
                Some(ReplCommand::Help) => {
                    println!("Commands:");
                    println!("  exit: exit the REPL");
                    println!("  help: show this help message");
                    println!("  start: start a search over the grid");
                    println!("  step [n]: expand the next node, or the next <n> nodes");
                    println!("  run: step until the search ends");
                    println!("  reset: discard the search");
                    println!("  frontier [n]: list the best <n> frontier nodes");
                    println!("  stats: show search statistics");
                    println!("  show: draw the grid with the open and closed sets")
                }
                Some(ReplCommand::Start) => match engine.start(grid.clone()) {
                    Ok(root) => {
                        println!("started at {}", describe(&root));
                        latest = Some(root);
                    }
                    Err(e) => println!("{}", style(e).red()),
                },
                Some(ReplCommand::Step(count)) => {
                    for _ in 0..count {
                        match engine.step() {
                            Ok(StepResult::Running(node)) => {
                                println!("expanded {}", describe(&node));
                                latest = Some(node);
                            }
                            Ok(StepResult::Found(node)) => {
                                println!("{} {}", style("found").green().bold(), describe(&node));
                                latest = Some(node);
                                break;
                            }
                            Ok(StepResult::Exhausted) => {
                                println!("{}", style("no path to the goal").red().bold());
                                break;
                            }
                            Err(e) => {
                                println!("{}", style(e).red());
                                break;
                            }
                        }
                    }
                }
                Some(ReplCommand::Run) => match engine.run_to_completion() {
                    Ok(trace) => {
                        println!("expanded {} more nodes", trace.visited.len());
                        match trace.outcome {
                            SearchOutcome::Found(node) => {
                                println!("{} {}", style("found").green().bold(), describe(&node));
                                latest = Some(node);
                            }
                            SearchOutcome::Exhausted => {
                                println!("{}", style("no path to the goal").red().bold());
                                latest = trace.visited.last().cloned().or(latest);
                            }
                        }
                    }
                    Err(e) => println!("{}", style(e).red()),
                },
                Some(ReplCommand::Reset) => {
                    engine.reset();
                    latest = None;
                    println!("search discarded");
                }
                Some(ReplCommand::Frontier(limit)) => match engine.frontier() {
                    Some(frontier) => {
                        println!("{} nodes on the frontier", frontier.len());
                        for (rank, node) in frontier.ranked().into_iter().take(limit).enumerate() {
                            println!("{:>4} {}", rank + 1, describe(node));
                        }
                    }
                    None => println!("no search running"),
                },
                Some(ReplCommand::Stats) => match (engine.statistics(), engine.closed()) {
                    (Some(statistics), Some(closed)) => {
                        println!("phase: {}", engine.phase());
                        println!("expanded nodes: {}", statistics.expanded_nodes());
                        println!("generated nodes: {}", statistics.generated_nodes());
                        println!("duplicate pops: {}", statistics.duplicate_pops());
                        println!("blocked moves: {}", statistics.blocked_moves());
                        println!("closed states: {}", closed.len());
                        if let Some(bound) = statistics.cost_bound() {
                            println!("cost bound: {:.3}", bound);
                        }
                    }
                    _ => println!("no search running"),
                },
                Some(ReplCommand::Show) => println!("{}", overlay(&grid, &engine, latest.as_ref())),
                None => println!("Unknown command"),
            }
        } else {
            break;
        }
    }
}

fn describe(node: &SearchNode) -> String {
    format!(
        "{} g={} f={:.3} fruit={}{}",
        node.position(),
        node.distance_traveled(),
        node.estimated_total_cost(),
        if node.has_power_up() { "held" } else { "none" },
        if node.used_power_up() { " (spent)" } else { "" },
    )
}

/// The grid with closed cells dimmed, frontier cells in yellow and the path
/// to the latest node in bold green.
fn overlay(grid: &Grid, engine: &AStar, latest: Option<&SearchNode>) -> String {
    let closed: HashSet<Position> = engine
        .closed()
        .map(|closed| closed.iter().map(|signature| signature.position).collect())
        .unwrap_or_default();
    let open: HashSet<Position> = engine
        .frontier()
        .map(|frontier| frontier.ranked().into_iter().map(SearchNode::position).collect())
        .unwrap_or_default();
    let path: HashSet<Position> = latest
        .map(|node| node.path().iter().copied().collect())
        .unwrap_or_default();

    let mut text = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let position = Position::new(row, col);
            let Some(kind) = grid.get(position) else {
                continue;
            };
            let cell: StyledObject<char> = style(kind.symbol());
            let cell = if path.contains(&position) {
                cell.green().bold()
            } else if open.contains(&position) {
                cell.yellow()
            } else if closed.contains(&position) {
                cell.blue().dim()
            } else if kind == CellKind::Barrier {
                cell.red()
            } else {
                cell
            };
            text.push_str(&format!("{} ", cell));
        }
        text.push('\n');
    }
    text
}
