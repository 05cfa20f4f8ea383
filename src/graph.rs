use crate::defs::Params;
use crate::error::Result;
use crate::node::{edge_from_read, Node};
use itertools::Itertools;
use petgraph::graph::DiGraph;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// de Bruijn multigraph built from reads: one edge per read, from its prefix to its suffix node.
///
/// Nodes are interned to indices. Outgoing lists keep insertion order and keep duplicates,
/// and `sources` lists the nodes that have outgoing edges in the order they were first seen
/// as a prefix, which is the order start nodes are looked for.
#[derive(Clone, Debug)]
pub struct DeBruijnGraph {
    params: Params,
    nodes: Vec<Node>,
    index: HashMap<Node, usize>,
    out: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    sources: Vec<usize>,
    n_edges: usize,
}

impl DeBruijnGraph {
    pub fn new(params: Params) -> Self {
        DeBruijnGraph {
            params,
            nodes: Vec::new(),
            index: HashMap::new(),
            out: Vec::new(),
            in_degree: Vec::new(),
            sources: Vec::new(),
            n_edges: 0,
        }
    }

    /// Builds the graph from reads in order; the first malformed read aborts construction.
    pub fn from_reads<I, S>(params: Params, reads: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = DeBruijnGraph::new(params);
        for (i, read) in reads.into_iter().enumerate() {
            graph.add_read(read.as_ref(), i + 1)?;
        }
        Ok(graph)
    }

    pub fn add_read(&mut self, read: &str, line: usize) -> Result<()> {
        let (prefix, suffix) = edge_from_read(read, &self.params, line)?;
        self.add_edge(prefix, suffix);
        Ok(())
    }

    pub fn add_edge(&mut self, prefix: Node, suffix: Node) {
        let source = self.intern(prefix);
        let target = self.intern(suffix);
        if self.out[source].is_empty() {
            self.sources.push(source);
        }
        self.out[source].push(target);
        self.in_degree[target] += 1;
        self.n_edges += 1;
    }

    fn intern(&mut self, node: Node) -> usize {
        match self.index.entry(node) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let id = self.nodes.len();
                self.nodes.push(e.key().clone());
                e.insert(id);
                self.out.push(Vec::new());
                self.in_degree.push(0);
                id
            }
        }
    }

    pub fn params(&self) -> Params {
        self.params
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// number of edges, equal to the number of reads added
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    /// ids of nodes with outgoing edges, in the order they first appeared as a prefix
    pub fn source_ids(&self) -> &[usize] {
        &self.sources
    }

    /// outgoing targets of `id`, in insertion order
    pub fn out_ids(&self, id: usize) -> &[usize] {
        &self.out[id]
    }

    pub fn in_degree(&self, id: usize) -> usize {
        self.in_degree[id]
    }

    pub fn out_degree(&self, id: usize) -> usize {
        self.out[id].len()
    }

    /// adjacency dump, one `node -> target1,target2` line per source node
    pub fn adjacency_lines(&self) -> Vec<String> {
        self.sources
            .iter()
            .map(|&s| format!("{} -> {}", self.nodes[s], self.out[s].iter().map(|&t| &self.nodes[t]).join(",")))
            .collect()
    }

    /// petgraph copy of the multigraph, node i of the result is node id i here;
    /// edges are added in source order then insertion order
    pub fn to_petgraph(&self) -> DiGraph<Node, ()> {
        let mut gr = DiGraph::<Node, ()>::with_capacity(self.nodes.len(), self.n_edges);
        let indices: Vec<_> = self.nodes.iter().map(|n| gr.add_node(n.clone())).collect();
        for &s in &self.sources {
            for &t in &self.out[s] {
                gr.add_edge(indices[s], indices[t], ());
            }
        }
        gr
    }
}
