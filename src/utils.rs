// Various helper functions for console output.

use crate::node::Node;
use itertools::Itertools;

/// walk as a chain, ` -> n1 -> n2 -> ...`
pub fn walk_chain(walk: &[Node]) -> String {
    walk.iter().map(|n| format!(" -> {}", n)).join("")
}

/// shortens long sequences for log lines
pub fn abbreviate(seq: &str, max: usize) -> String {
    if seq.len() <= max || !seq.is_ascii() {
        return seq.to_string();
    }
    format!("{}..({} bp)", &seq[..max], seq.len())
}
