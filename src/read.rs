// Reads input: a header line with k (and g for pairs), then one read per line.

use crate::defs::Params;
use crate::error::{AsmError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses the header line: `k` for single reads, `k g` for read pairs.
/// Extra tokens are ignored.
pub fn parse_header(line: &str, paired: bool) -> Result<Params> {
    let mut tokens = line.split_whitespace();
    let mut next_int = |what: &str| -> Result<usize> {
        let token = tokens.next().ok_or_else(|| AsmError::Header(format!("missing {} in {:?}", what, line)))?;
        token.parse::<usize>().map_err(|_| AsmError::Header(format!("{} is not an integer: {:?}", what, token)))
    };
    let k = next_int("k")?;
    let params = if paired { Params::paired(k, next_int("gap")?) } else { Params::single(k) };
    params.validate()?;
    Ok(params)
}

/// Lazy, single pass over the reads of an input file.
/// Yields `(line number, read)` with surrounding whitespace trimmed; blank lines are skipped.
pub struct ReadSource<R: BufRead> {
    params: Params,
    reader: R,
    line_no: usize,
    bytes_consumed: u64,
    buf: String,
}

impl ReadSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P, paired: bool) -> Result<Self> {
        let file = File::open(path)?;
        ReadSource::from_reader(BufReader::new(file), paired)
    }
}

impl<R: BufRead> ReadSource<R> {
    pub fn from_reader(mut reader: R, paired: bool) -> Result<Self> {
        let mut header = String::new();
        let n = reader.read_line(&mut header)?;
        if n == 0 {
            return Err(AsmError::Header("empty input".to_string()));
        }
        let params = parse_header(&header, paired)?;
        Ok(ReadSource { params, reader, line_no: 1, bytes_consumed: n as u64, buf: String::new() })
    }

    pub fn params(&self) -> Params {
        self.params
    }

    /// bytes read so far, header included
    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }
}

impl<R: BufRead> Iterator for ReadSource<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            let n = match self.reader.read_line(&mut self.buf) {
                Ok(n) => n,
                Err(e) => return Some(Err(e.into())),
            };
            if n == 0 {
                return None;
            }
            self.line_no += 1;
            self.bytes_consumed += n as u64;
            let read = self.buf.trim();
            if !read.is_empty() {
                return Some(Ok((self.line_no, read.to_string())));
            }
        }
    }
}
