use clap::Parser;
use courierplan::model::Problem;
use courierplan::search::{
    naive_plan, validate, SearchEngine, SearchEngineName, SearchResult, TerminationCondition,
    Verbosity,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(version)]
/// Plan pickups and deliveries for a single vehicle on a city graph.
struct Cli {
    #[arg(help = "The problem instance file (JSON)")]
    problem: PathBuf,
    #[arg(
        help = "The output plan file",
        short = 'o',
        long = "output",
        id = "OUTPUT",
        default_value = "<problem>.plan"
    )]
    plan: PathBuf,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Astar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "Wall-clock ceiling for the search, e.g. `30s` or `5m`",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Memory ceiling for the search, in megabytes",
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let problem = match Problem::from_path(&cli.problem) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("Failed to load problem: {error}");
            std::process::exit(1);
        }
    };
    info!(
        cities = problem.topology.num_cities(),
        tasks = problem.num_tasks(),
        engine = %cli.search_engine_name,
    );

    let mut termination = TerminationCondition::new(cli.time_limit, cli.memory_limit_mb);
    let mut engine = cli.search_engine_name.create();
    let (result, _statistics) = engine.search(&problem, &mut termination);
    termination.finalise();

    let plan = match result {
        SearchResult::Success(plan) => plan,
        other => {
            warn!(outcome = ?other, "search did not produce a plan, falling back");
            match naive_plan(&problem) {
                Some(plan) => plan,
                None => {
                    eprintln!("No plan found: some task is unreachable");
                    std::process::exit(2);
                }
            }
        }
    };

    info!("validating plan");
    match validate(&plan, &problem) {
        Ok(()) => info!("plan is valid"),
        Err(error) => {
            eprintln!("Plan is invalid: {error}");
            std::process::exit(2);
        }
    }

    println!("Plan found:");
    println!("{}", plan.to_string(&problem));
    println!("Plan cost: {}", plan.cost(&problem));
    println!("Plan length: {}", plan.len());

    let plan_path = if cli.plan == PathBuf::from("<problem>.plan") {
        cli.problem.with_extension("plan")
    } else {
        cli.plan
    };
    std::fs::write(plan_path, plan.to_string(&problem)).expect("Failed to write plan file");
}
