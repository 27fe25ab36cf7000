//! Fault-tolerant line-by-line file reading
//!
//! Yields a lazy sequence of (line number, text) pairs, 1-based and
//! newline-stripped. Decoding is lossy: invalid UTF-8 sequences are
//! replaced rather than raised, so a binary or garbled file still yields
//! a (possibly noisy) line sequence instead of aborting a scan. The open
//! failure is left to the caller, which either skips the file (tree
//! scans) or reports it (single-file operations).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub struct LineReader {
    reader: BufReader<File>,
    buf: Vec<u8>,
    line_no: u32,
}

impl LineReader {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            buf: Vec::new(),
            line_no: 0,
        })
    }
}

impl Iterator for LineReader {
    type Item = (u32, String);

    fn next(&mut self) -> Option<(u32, String)> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                self.line_no += 1;
                Some((self.line_no, String::from_utf8_lossy(&self.buf).into_owned()))
            }
            // A read fault mid-file ends the sequence; the lines already
            // yielded stand.
            Err(_) => None,
        }
    }
}
