// Eulerian walks over the de Bruijn multigraph.
//
// Two strategies share the same edge preference at a node: a self-loop first, otherwise the
// most recently inserted remaining edge. The greedy walk follows edges until it is stuck and
// never comes back for edges it stranded. The Hierholzer walk keeps a stack and splices the
// detours it finds on the way back, so it uses every edge of any connected Eulerian graph.

use crate::error::{AsmError, Result};
use crate::graph::DeBruijnGraph;
use crate::node::Node;
use log::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStrategy {
    Greedy,
    Hierholzer,
}

impl Default for WalkStrategy {
    fn default() -> Self {
        WalkStrategy::Greedy
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    pub nodes: Vec<Node>,
    /// edges of the graph the walk did not use
    pub unused_edges: usize,
}

impl Walk {
    pub fn is_complete(&self) -> bool {
        self.unused_edges == 0
    }
}

/// Edges not yet walked. Self-loops are only counted, non-loop targets keep insertion order.
struct Remaining {
    targets: Vec<Vec<usize>>,
    loops: Vec<usize>,
}

impl Remaining {
    fn new(graph: &DeBruijnGraph) -> Self {
        let n = graph.node_count();
        let mut targets = vec![Vec::new(); n];
        let mut loops = vec![0; n];
        for &s in graph.source_ids() {
            for &t in graph.out_ids(s) {
                if t == s {
                    loops[s] += 1;
                } else {
                    targets[s].push(t);
                }
            }
        }
        Remaining { targets, loops }
    }

    /// Consumes one outgoing edge of `id` and returns its target.
    /// A lone edge is taken whatever it is; with several, a self-loop goes first,
    /// else the last inserted one.
    fn take(&mut self, id: usize) -> Option<usize> {
        if self.loops[id] > 0 {
            self.loops[id] -= 1;
            return Some(id);
        }
        self.targets[id].pop()
    }
}

/// First node, in source order, with no incoming edge; falls back to the first source
/// when every node has one (the reads close a circuit). Fails only on an edgeless graph.
pub fn find_start(graph: &DeBruijnGraph) -> Result<usize> {
    let sources = graph.source_ids();
    sources
        .iter()
        .copied()
        .find(|&s| graph.in_degree(s) == 0)
        .or_else(|| sources.first().copied())
        .ok_or(AsmError::NoStartNode)
}

/// Start of an Eulerian path: the node with one more outgoing than incoming edge if any,
/// otherwise the same choice as `find_start`.
fn find_unbalanced_start(graph: &DeBruijnGraph) -> Result<usize> {
    match graph.source_ids().iter().copied().find(|&s| graph.out_degree(s) == graph.in_degree(s) + 1) {
        Some(s) => Ok(s),
        None => find_start(graph),
    }
}

fn greedy(graph: &DeBruijnGraph, start: usize) -> Vec<usize> {
    let mut remaining = Remaining::new(graph);
    let mut walk = vec![start];
    let mut current = start;
    while let Some(next) = remaining.take(current) {
        walk.push(next);
        current = next;
    }
    walk
}

/// Checks in/out degrees allow an Eulerian path: every node balanced except at most
/// one start (one extra outgoing edge) and one end (one extra incoming edge).
fn check_balance(graph: &DeBruijnGraph) -> Result<()> {
    let (mut surplus, mut deficit) = (0, 0);
    for id in 0..graph.node_count() {
        let (out, inc) = (graph.out_degree(id), graph.in_degree(id));
        let ok = if out == inc + 1 {
            surplus += 1;
            surplus == 1
        } else if inc == out + 1 {
            deficit += 1;
            deficit == 1
        } else {
            out == inc
        };
        if !ok {
            return Err(AsmError::Unbalanced { node: graph.node(id).to_string(), out, inc });
        }
    }
    Ok(())
}

fn hierholzer(graph: &DeBruijnGraph, start: usize) -> Vec<usize> {
    let mut remaining = Remaining::new(graph);
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(graph.edge_count() + 1);
    while let Some(&current) = stack.last() {
        match remaining.take(current) {
            Some(next) => stack.push(next),
            None => {
                stack.pop();
                circuit.push(current);
            }
        }
    }
    circuit.reverse();
    circuit
}

/// Walks the graph, consuming it.
///
/// The greedy walk always returns its walk, with `unused_edges` set to the number of edges
/// it stranded. The Hierholzer walk fails with `Unbalanced` on a graph whose degrees rule out
/// an Eulerian path, and with `NotEulerian` when edges are left out of reach.
pub fn eulerian_walk(graph: DeBruijnGraph, strategy: WalkStrategy) -> Result<Walk> {
    let total = graph.edge_count();
    let ids = match strategy {
        WalkStrategy::Greedy => {
            let start = find_start(&graph)?;
            debug!("greedy walk from {}", graph.node(start));
            greedy(&graph, start)
        }
        WalkStrategy::Hierholzer => {
            check_balance(&graph)?;
            let start = find_unbalanced_start(&graph)?;
            debug!("hierholzer walk from {}", graph.node(start));
            hierholzer(&graph, start)
        }
    };
    let used = ids.len() - 1;
    if used < total {
        if strategy == WalkStrategy::Hierholzer {
            return Err(AsmError::NotEulerian { used, total });
        }
        warn!("walk stranded {} of {} edges", total - used, total);
    }
    Ok(Walk {
        nodes: ids.into_iter().map(|id| graph.node(id).clone()).collect(),
        unused_edges: total - used,
    })
}
