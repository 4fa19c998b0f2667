// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-ahead log for durable storage
//!
//! One JSON object per line: `{"seq":N,"op":{...}}`. Each append is synced
//! before it is applied to the materialized state.

use kb_core::Operation;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur in WAL operations
#[derive(Debug, Error)]
pub enum WalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corrupt WAL entry at line {line}: {source}")]
    Corrupt {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// A logged operation with its sequence number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalEntry {
    pub seq: u64,
    pub op: Operation,
}

/// Write-ahead log for durable operation storage
pub struct Wal {
    file: File,
    sequence: u64,
}

impl Wal {
    /// Open or create a WAL at the given path, continuing after `sequence`.
    ///
    /// A torn final line is cut off so new entries start on a fresh line.
    pub fn open(path: &Path, sequence: u64) -> Result<Self, WalError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)?;
        repair_tail(&mut file)?;
        Ok(Self { file, sequence })
    }

    /// Append an operation to the log
    pub fn append(&mut self, op: &Operation) -> Result<u64, WalError> {
        let entry = WalEntry {
            seq: self.sequence + 1,
            op: op.clone(),
        };
        let line = serde_json::to_string(&entry)?;
        writeln!(self.file, "{}", line)?;
        self.file.sync_all()?;
        self.sequence = entry.seq;
        Ok(self.sequence)
    }

    /// Get the current sequence number
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Read every entry from the log.
    ///
    /// A malformed final line is treated as a torn write and dropped; a
    /// malformed line anywhere else is corruption.
    pub fn replay(path: &Path) -> Result<Vec<WalEntry>, WalError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let lines: Vec<String> = BufReader::new(file).lines().collect::<Result<_, _>>()?;
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let mut entries = Vec::with_capacity(lines.len());

        for (idx, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<WalEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) if Some(idx) == last => {
                    tracing::warn!(line = idx + 1, error = %e, "dropping torn WAL tail");
                }
                Err(source) => {
                    return Err(WalError::Corrupt {
                        line: idx + 1,
                        source,
                    })
                }
            }
        }

        Ok(entries)
    }
}

/// Truncate an unparseable last line, or terminate a valid unterminated one
fn repair_tail(file: &mut File) -> Result<(), WalError> {
    let mut buf = Vec::new();
    file.seek(SeekFrom::Start(0))?;
    file.read_to_end(&mut buf)?;

    let Some(content_end) = buf.iter().rposition(|b| !b.is_ascii_whitespace()) else {
        return Ok(());
    };
    let content_end = content_end + 1;
    let line_start = buf[..content_end]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    if serde_json::from_slice::<WalEntry>(&buf[line_start..content_end]).is_err() {
        tracing::warn!(offset = line_start, "truncating torn WAL tail");
        file.set_len(line_start as u64)?;
        file.sync_all()?;
    } else if buf.last() != Some(&b'\n') {
        file.write_all(b"\n")?;
        file.sync_all()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "wal_tests.rs"]
mod tests;
