mod network;
mod scenario;

use bgraphs::algorithm::{Algorithm, ArcFilter, LoggingObserver, ShortestPathData, ShortestPathSolver};
use bgraphs::spatial::Position;
use clap::{value_t_or_exit, App, Arg, ArgMatches};
use flexi_logger::Logger;
use log::{error, info};
use network::GridNetwork;
use scenario::{random_pairs, run_scenarios};
use std::error::Error;
use std::process;
use std::time::Instant;

fn parse_position(value: &str) -> Result<Position, String> {
  let coordinates: Vec<f64> = value
    .split(',')
    .map(|part| part.trim().parse::<f64>())
    .collect::<Result<_, _>>()
    .map_err(|e| format!("invalid position '{}': {}", value, e))?;
  match coordinates.as_slice() {
    [lon, lat] => Ok(Position::from((*lon, *lat))),
    _ => Err(format!("invalid position '{}', expected lon,lat", value)),
  }
}

fn parse_algorithms(matches: &ArgMatches) -> Result<Vec<Algorithm>, String> {
  match matches.values_of("algorithms") {
    Some(values) => values.map(|value| value.parse::<Algorithm>()).collect(),
    None => Ok(Algorithm::ALL.to_vec()),
  }
}

fn run(matches: &ArgMatches) -> Result<bool, Box<dyn Error>> {
  let rows = value_t_or_exit!(matches, "rows", usize);
  let cols = value_t_or_exit!(matches, "cols", usize);
  let seed = value_t_or_exit!(matches, "seed", u64);
  let filter = value_t_or_exit!(matches, "filter", ArcFilter);
  let algorithms = parse_algorithms(matches)?;

  let build_timer = Instant::now();
  let graph = GridNetwork::new(rows, cols, seed).build()?;
  info!(
    "Built {} in {:.2} seconds",
    graph,
    build_timer.elapsed().as_secs_f32()
  );

  if let (Some(from), Some(to)) = (matches.value_of("from"), matches.value_of("to")) {
    let origin = graph.nearest_node(&parse_position(from)?).ok_or("empty graph")?;
    let destination = graph.nearest_node(&parse_position(to)?).ok_or("empty graph")?;
    for algorithm in &algorithms {
      let solver = ShortestPathSolver::new(ShortestPathData::new(&graph, origin, destination, filter), *algorithm);
      let mut observer = LoggingObserver::new();
      let solution = solver.run_with(&mut observer)?;
      println!("{}: {}", algorithm, solution);
      if let Some(path) = solution.path() {
        println!("  {:?}", path);
      }
    }
    return Ok(true);
  }

  let tests = value_t_or_exit!(matches, "tests", usize);
  let pairs = random_pairs(&graph, tests, seed);
  let report = run_scenarios(&graph, &pairs, filter, &algorithms)?;
  if matches.is_present("json") {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    println!("{}", report);
  }
  Ok(report.is_success())
}

fn main() {
  let matches = App::new("bgraphs-bench")
    .about("Runs shortest-path scenarios on a synthetic road network")
    .arg(Arg::with_name("rows").long("rows").takes_value(true).default_value("60"))
    .arg(Arg::with_name("cols").long("cols").takes_value(true).default_value("60"))
    .arg(Arg::with_name("seed").long("seed").takes_value(true).default_value("42"))
    .arg(
      Arg::with_name("tests")
        .long("tests")
        .takes_value(true)
        .default_value("20")
        .help("Number of random origin/destination pairs"),
    )
    .arg(
      Arg::with_name("filter")
        .long("filter")
        .takes_value(true)
        .default_value("cars-time")
        .possible_values(&["all-length", "cars-length", "all-time", "cars-time", "pedestrian-time"]),
    )
    .arg(
      Arg::with_name("algorithms")
        .long("algorithms")
        .takes_value(true)
        .use_delimiter(true)
        .possible_values(&["dijkstra", "astar", "bellman-ford"])
        .help("Algorithms to compare, the first one is the reference"),
    )
    .arg(
      Arg::with_name("from")
        .long("from")
        .takes_value(true)
        .requires("to")
        .help("Route from the node closest to lon,lat instead of running scenarios"),
    )
    .arg(Arg::with_name("to").long("to").takes_value(true).requires("from"))
    .arg(Arg::with_name("json").long("json").help("Print the report as JSON"))
    .arg(
      Arg::with_name("log-level")
        .long("log-level")
        .takes_value(true)
        .default_value("info")
        .help("Used when RUST_LOG is not set"),
    )
    .get_matches();

  let level = matches.value_of("log-level").unwrap_or("info");
  let _logger = match Logger::try_with_env_or_str(level).and_then(|logger| logger.log_to_stderr().start()) {
    Ok(handle) => handle,
    Err(e) => {
      eprintln!("Cannot start logger: {}", e);
      process::exit(2);
    }
  };

  match run(&matches) {
    Ok(true) => (),
    Ok(false) => {
      error!("Some scenarios failed");
      process::exit(1);
    }
    Err(e) => {
      error!("{}", e);
      process::exit(1);
    }
  }
}
