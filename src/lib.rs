//! de Bruijn graph genome assembly from single reads (k-mers) or read pairs.
//!
//! Reads become edges of a multigraph between their (k-1)-mer prefix and suffix nodes
//! ([`graph`]), an Eulerian walk orders the edges ([`euler`]), and the walk is spelled back
//! into the genome ([`assemble`]).

pub mod assemble;
pub mod defs;
pub mod error;
pub mod euler;
pub mod gfa_output;
pub mod graph;
pub mod node;
pub mod read;
pub mod seq_output;
pub mod utils;

pub use assemble::{assemble, Assembly, PairedAssembly};
pub use defs::{Params, ReadMode};
pub use error::{AsmError, Result};
pub use euler::{eulerian_walk, Walk, WalkStrategy};
pub use graph::DeBruijnGraph;
pub use node::Node;
