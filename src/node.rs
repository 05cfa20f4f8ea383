use crate::defs::{Params, ReadMode, PAIR_DELIMITER};
use crate::error::{AsmError, Result};
use std::fmt;

/// A de Bruijn node: a (k-1)-mer, or a pair of (k-1)-mers for read pairs.
/// Nodes are plain values; two nodes with the same bases are the same node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Single(String),
    Paired(String, String),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Single(s) => write!(f, "{}", s),
            Node::Paired(a, b) => write!(f, "{}{}{}", a, PAIR_DELIMITER, b),
        }
    }
}

/// prefix and suffix (k-1)-mers of a k-mer; caller guarantees ascii and length k
fn split_kmer(kmer: &str, k: usize) -> (&str, &str) {
    (&kmer[..k - 1], &kmer[1..k])
}

fn check_kmer(kmer: &str, k: usize, line: usize) -> Result<()> {
    if !kmer.is_ascii() {
        return Err(AsmError::ReadFormat { line, reason: format!("non-ascii read {:?}", kmer) });
    }
    if kmer.len() != k {
        return Err(AsmError::ReadFormat {
            line,
            reason: format!("expected {} bases, got {} in {:?}", k, kmer.len(), kmer),
        });
    }
    Ok(())
}

/// Derives the (prefix, suffix) node pair of one read, i.e. the edge it contributes.
/// `line` is only used to report format errors.
pub fn edge_from_read(read: &str, params: &Params, line: usize) -> Result<(Node, Node)> {
    params.validate()?;
    let k = params.k;
    match params.mode {
        ReadMode::Single => {
            check_kmer(read, k, line)?;
            let (prefix, suffix) = split_kmer(read, k);
            Ok((Node::Single(prefix.to_string()), Node::Single(suffix.to_string())))
        }
        ReadMode::Paired { .. } => {
            let mut halves = read.split(PAIR_DELIMITER);
            let (first, second) = match (halves.next(), halves.next(), halves.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => {
                    return Err(AsmError::ReadFormat {
                        line,
                        reason: format!("expected two reads separated by '{}' in {:?}", PAIR_DELIMITER, read),
                    })
                }
            };
            check_kmer(first, k, line)?;
            check_kmer(second, k, line)?;
            let (p1, s1) = split_kmer(first, k);
            let (p2, s2) = split_kmer(second, k);
            Ok((
                Node::Paired(p1.to_string(), p2.to_string()),
                Node::Paired(s1.to_string(), s2.to_string()),
            ))
        }
    }
}
