use aco_decomp::decomp_problem::{HyperTreeDecompProblem, TreeDecompProblem};
use aco_decomp::graph::{HashMapGraph, HyperGraph};
use aco_decomp::heuristic::Heuristic;
use aco_decomp::io::{DimacsRead, HyperTreeLibRead};
use aco_decomp::meta_heuristics::{greedy_tour, OptimizationProblem};
use aco_decomp::DecompError;
use rand::prelude::StdRng;
use rand::SeedableRng;
use std::convert::TryFrom;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, Clone, Copy)]
enum HeuristicOpt {
    MinDegree,
    MinFill,
}

impl FromStr for HeuristicOpt {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min-degree" => Ok(HeuristicOpt::MinDegree),
            "min-fill" => Ok(HeuristicOpt::MinFill),
            _ => Err(format!("unknown heuristic '{}'", s)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "aco-decomp-cli",
    about = "Computes an elimination ordering of small width for a graph or hypergraph."
)]
struct Opt {
    /// Input file, a DIMACS graph or with `--hypergraph` a HyperTreeLib
    /// hypergraph. `stdin` if not specified.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output file. `stdout` if not specified.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Read a hypergraph and minimize generalized hypertree width.
    #[structopt(long)]
    hypergraph: bool,

    /// Vertex ranking used for the initial ordering of a graph.
    #[structopt(long, default_value = "min-degree", possible_values = &["min-degree", "min-fill"])]
    heuristic: HeuristicOpt,

    /// Number of perturbation rounds of the local search.
    #[structopt(short, long, default_value = "100")]
    iterations: usize,

    #[structopt(short, long, default_value = "0")]
    seed: u64,
}

struct Outcome {
    width: usize,
    order: Vec<String>,
}

fn solve_graph(graph: HashMapGraph, opt: &Opt) -> Result<Outcome, DecompError> {
    let heuristic = match opt.heuristic {
        HeuristicOpt::MinDegree => Heuristic::MinDegree,
        HeuristicOpt::MinFill => Heuristic::MinFill,
    };
    let mut problem = TreeDecompProblem::new(graph, heuristic, StdRng::seed_from_u64(opt.seed))
        .local_search_iterations(opt.iterations);
    let tour = greedy_tour(&mut problem)?;
    #[cfg(feature = "log")]
    log::info!("greedy ordering has width {}", problem.eval_tour(&tour)?);
    let tour = problem.apply_local_search(&tour)?;
    Ok(Outcome {
        width: problem.eval_tour(&tour)?,
        order: tour.iter().map(|v| (v + 1).to_string()).collect(),
    })
}

fn solve_hypergraph(hypergraph: HyperGraph, opt: &Opt) -> Result<Outcome, DecompError> {
    let mut problem: HyperTreeDecompProblem<HashMapGraph> =
        HyperTreeDecompProblem::new(hypergraph, StdRng::seed_from_u64(opt.seed))
            .local_search_iterations(opt.iterations);
    let tour = greedy_tour(&mut problem)?;
    #[cfg(feature = "log")]
    log::info!("greedy ordering has width {}", problem.eval_tour(&tour)?);
    let tour = problem.apply_local_search(&tour)?;
    let hypergraph = problem.hypergraph();
    Ok(Outcome {
        width: problem.eval_tour(&tour)?,
        order: tour
            .iter()
            .map(|v| String::from(hypergraph.vertex_name(*v)))
            .collect(),
    })
}

fn write_outcome<W: Write>(outcome: &Outcome, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "w {}", outcome.width)?;
    writeln!(writer, "o {}", outcome.order.join(" "))?;
    writer.flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "pace-logging")]
    aco_decomp::log::build_logger();
    #[cfg(feature = "handle-ctrlc")]
    aco_decomp::signals::install_handler()?;

    let opt = Opt::from_args();
    #[cfg(feature = "log")]
    log::info!(
        "running {} local search iterations with seed {}",
        opt.iterations,
        opt.seed
    );

    let outcome = if opt.hypergraph {
        let hypergraph = match &opt.input {
            Some(path) => aco_decomp::io::read_hypertreelib_file(path)?,
            None => HyperGraph::try_from(HyperTreeLibRead(stdin()))?,
        };
        solve_hypergraph(hypergraph, &opt)?
    } else {
        let graph = match &opt.input {
            Some(path) => aco_decomp::io::read_dimacs_file(path)?,
            None => {
                let stdin = stdin();
                let reader = DimacsRead(stdin.lock());
                HashMapGraph::try_from(reader)?
            }
        };
        solve_graph(graph, &opt)?
    };

    match &opt.output {
        Some(path) => {
            let writer = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            write_outcome(&outcome, writer)?;
        }
        None => write_outcome(&outcome, stdout())?,
    }
    Ok(())
}
