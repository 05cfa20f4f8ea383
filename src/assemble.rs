use crate::defs::{Params, ReadMode, MIN_K};
use crate::error::{AsmError, Result};
use crate::node::Node;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairedAssembly {
    /// `None` when the suffix genome is shorter than k+g: the walk never spans the gap
    pub genome: Option<String>,
    /// spelled by the first reads of the pairs
    pub prefix: String,
    /// spelled by the second reads, starting k+g bases into the genome
    pub suffix: String,
    offset: usize,
}

impl PairedAssembly {
    /// bases after the prefix genome that the splice needs from the suffix genome
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// whether prefix and suffix genomes spell the same bases where both cover the genome
    pub fn is_consistent(&self) -> bool {
        if self.prefix.len() <= self.offset {
            return true;
        }
        let overlap = self.prefix.len() - self.offset;
        self.prefix[self.offset..] == self.suffix[..overlap]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Assembly {
    Single(String),
    Paired(PairedAssembly),
}

impl Assembly {
    pub fn genome(&self) -> Option<&str> {
        match self {
            Assembly::Single(genome) => Some(genome),
            Assembly::Paired(p) => p.genome.as_deref(),
        }
    }
}

pub fn assemble(walk: &[Node], params: &Params) -> Result<Assembly> {
    params.validate()?;
    match params.mode {
        ReadMode::Single => Ok(Assembly::Single(assemble_single(walk)?)),
        ReadMode::Paired { gap } => Ok(Assembly::Paired(assemble_paired(walk, params.k, gap)?)),
    }
}

fn shape_error(expected: &str, node: &Node) -> AsmError {
    AsmError::NodeShape(format!("expected {} node, got {:?}", expected, node))
}

/// Spells a walk of (k-1)-mers: the first node, then the last base of each following node.
pub fn assemble_single(walk: &[Node]) -> Result<String> {
    let (first, rest) = walk.split_first().ok_or(AsmError::EmptyWalk)?;
    let mut genome = match first {
        Node::Single(s) => s.clone(),
        other => return Err(shape_error("single", other)),
    };
    genome.reserve(rest.len());
    for node in rest {
        match node {
            Node::Single(s) => match s.chars().last() {
                Some(c) => genome.push(c),
                None => return Err(shape_error("non-empty", node)),
            },
            other => return Err(shape_error("single", other)),
        }
    }
    Ok(genome)
}

/// Spells a walk of paired nodes into prefix and suffix genomes, then splices the last
/// k+g bases of the suffix genome after the prefix genome. A walk too short to span the gap
/// still yields both halves, with no spliced genome.
pub fn assemble_paired(walk: &[Node], k: usize, gap: usize) -> Result<PairedAssembly> {
    if k < MIN_K {
        return Err(AsmError::KTooSmall(k));
    }
    let (last, rest) = walk.split_last().ok_or(AsmError::EmptyWalk)?;
    let mut prefix = String::with_capacity(walk.len() + k);
    let mut suffix = String::with_capacity(walk.len() + k);
    for node in rest {
        let (a, b) = paired_halves(node, k)?;
        prefix.push_str(&a[..1]);
        suffix.push_str(&b[..1]);
    }
    let (a, b) = paired_halves(last, k)?;
    prefix.push_str(a);
    suffix.push_str(b);

    let offset = k + gap;
    let genome = suffix
        .len()
        .checked_sub(offset)
        .map(|start| format!("{}{}", prefix, &suffix[start..]));
    Ok(PairedAssembly { genome, prefix, suffix, offset })
}

/// halves of a paired node, checked to be ascii (k-1)-mers
fn paired_halves(node: &Node, k: usize) -> Result<(&str, &str)> {
    match node {
        Node::Paired(a, b) if a.len() == k - 1 && b.len() == k - 1 && a.is_ascii() && b.is_ascii() => {
            Ok((a.as_str(), b.as_str()))
        }
        Node::Paired(..) => Err(shape_error(&format!("paired {}-mer", k - 1), node)),
        other => Err(shape_error("paired", other)),
    }
}
