//! Width evaluation of elimination orderings for graphs and hypergraphs, the
//! problem adapters an ant-colony engine drives, and a max-clique local search
//! improving finished orderings.
#[macro_use]
mod macros;

pub(crate) mod datastructures;

pub mod covering;
pub mod decomp_problem;
pub mod elimination_graph;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod io;
pub mod max_clique;
pub mod meta_heuristics;
pub mod util;
pub mod width;

#[cfg(feature = "pace-logging")]
pub mod log;
#[cfg(feature = "handle-ctrlc")]
pub mod signals;

pub use covering::GreedyHyperedgeCovering;
pub use decomp_problem::{DecompProblem, HyperTreeDecompProblem, TreeDecompProblem};
pub use elimination_graph::EliminationGraph;
pub use error::{DecompError, ErrorKind};
pub use max_clique::{max_clique_positions, MaxCliqueNeighbourhood};
pub use width::{generalized_hypertree_width, treewidth};
