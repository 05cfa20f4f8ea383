use crate::assemble::Assembly;
use crate::node::Node;
use bio::io::fasta;
use petgraph::graph::DiGraph;
use petgraph_graphml::GraphMl;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

// this module writes the assembled sequences, and the graph for external viewers

/// FASTA records: `genome`, plus `prefix` and `suffix` for read pairs;
/// a pair walk that never spans the gap has no `genome` record
pub fn write_assembly<W: Write>(assembly: &Assembly, out: W) -> io::Result<()> {
    let mut writer = fasta::Writer::new(out);
    match assembly {
        Assembly::Single(genome) => writer.write("genome", None, genome.as_bytes())?,
        Assembly::Paired(p) => {
            if let Some(genome) = &p.genome {
                writer.write("genome", None, genome.as_bytes())?;
            }
            writer.write("prefix", Some("first reads of pairs"), p.prefix.as_bytes())?;
            writer.write("suffix", Some("second reads of pairs"), p.suffix.as_bytes())?;
        }
    }
    writer.flush()
}

pub fn output_assembly(assembly: &Assembly, path: &Path) -> io::Result<()> {
    write_assembly(assembly, BufWriter::new(File::create(path)?))
}

pub fn output_graphml(gr: &DiGraph<Node, ()>, path: &Path) -> io::Result<()> {
    let graphml = GraphMl::new(gr).pretty_print(true).export_node_weights_display();
    let mut file = BufWriter::new(File::create(path)?);
    graphml.to_writer(&mut file)?;
    file.flush()
}
