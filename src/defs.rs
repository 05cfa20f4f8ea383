// Shared parameters and constants.

use crate::error::{AsmError, Result};

/// separates the two halves of a read pair, and of a paired node label
pub const PAIR_DELIMITER: char = '|';

/// shortest read length for which (k-1)-mer nodes overlap
pub const MIN_K: usize = 2;

pub const DEFAULT_SINGLE_READS: &str = "SingleReadsInputV1.txt";
pub const DEFAULT_PAIRED_READS: &str = "ReadPairsInputV1.txt";

pub fn default_reads_file(paired: bool) -> &'static str {
    if paired {
        DEFAULT_PAIRED_READS
    } else {
        DEFAULT_SINGLE_READS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadMode {
    Single,
    /// read pairs, `gap` bases between the end of the first read and the start of the second
    Paired { gap: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// length of each read (of each half, for pairs)
    pub k: usize,
    pub mode: ReadMode,
}

impl Params {
    pub fn single(k: usize) -> Self {
        Params { k, mode: ReadMode::Single }
    }

    pub fn paired(k: usize, gap: usize) -> Self {
        Params { k, mode: ReadMode::Paired { gap } }
    }

    /// fails with `KTooSmall` when k is below `MIN_K`
    pub fn validate(&self) -> Result<()> {
        if self.k < MIN_K {
            return Err(AsmError::KTooSmall(self.k));
        }
        Ok(())
    }

    pub fn gap(&self) -> Option<usize> {
        match self.mode {
            ReadMode::Single => None,
            ReadMode::Paired { gap } => Some(gap),
        }
    }
}
