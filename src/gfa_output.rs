use crate::defs::MIN_K;
use crate::error::AsmError;
use crate::node::Node;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

// one S line per node, one L line per edge occurrence (repeated k-mers give repeated links).
// single-read nodes carry their (k-1)-mer and overlap by k-2 bases; paired nodes have no
// contiguous sequence, their label goes in an LB tag.
pub fn write_gfa<W: Write>(gr: &DiGraph<Node, ()>, k: usize, out: &mut W) -> io::Result<()> {
    if k < MIN_K {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, AsmError::KTooSmall(k)));
    }
    writeln!(out, "H\tVN:Z:1.0")?;

    for node in gr.node_indices() {
        match &gr[node] {
            Node::Single(seq) => writeln!(out, "S\t{}\t{}\tLN:i:{}", node.index(), seq, seq.len())?,
            paired => writeln!(out, "S\t{}\t*\tLB:Z:{}", node.index(), paired)?,
        }
    }

    for e in gr.edge_references() {
        let id1 = e.source().index();
        let id2 = e.target().index();
        let overlap = match &gr[e.source()] {
            Node::Single(_) => format!("{}M", k - 2),
            Node::Paired(..) => "*".to_string(),
        };
        writeln!(out, "L\t{}\t+\t{}\t+\t{}", id1, id2, overlap)?;
    }
    Ok(())
}

pub fn output_gfa(gr: &DiGraph<Node, ()>, k: usize, path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_gfa(gr, k, &mut file)?;
    file.flush()
}
