// src/loader.rs
//! Tab-separated dataset reader.
//!
//! Movie rows: `tt_id \t title \t ranking` (extra trailing columns are
//! ignored). Actor rows: `nm_id \t name` followed by any number of
//! `tt_id` columns. Blank lines are skipped. All text parsing and file
//! I/O happens here; the graph only ever sees structured records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CostarError, Result};

/// One movie row.
#[derive(Debug, Clone)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub ranking: f64,
}

/// One actor row with its (possibly empty) movie id list.
#[derive(Debug, Clone)]
pub struct ActorRecord {
    pub id: String,
    pub name: String,
    pub movie_ids: Vec<String>,
}

/// Reads all movie records from a TSV file.
///
/// # Errors
/// `Io` when the file cannot be read, `Malformed` when a row has fewer
/// than three fields or an unparsable ranking.
pub fn read_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let mut records = Vec::new();
    for (idx, line) in open(path)?.lines().enumerate() {
        let line = line.map_err(|source| io_error(source, path))?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(id), Some(title), Some(ranking)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed(path, idx));
        };
        let ranking: f64 = ranking.trim().parse().map_err(|_| malformed(path, idx))?;
        records.push(MovieRecord {
            id: id.to_string(),
            title: title.to_string(),
            ranking,
        });
    }
    Ok(records)
}

/// Reads all actor records from a TSV file.
///
/// # Errors
/// `Io` when the file cannot be read, `Malformed` when a row lacks the
/// id or name field.
pub fn read_actors(path: &Path) -> Result<Vec<ActorRecord>> {
    let mut records = Vec::new();
    for (idx, line) in open(path)?.lines().enumerate() {
        let line = line.map_err(|source| io_error(source, path))?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let (Some(id), Some(name)) = (fields.next(), fields.next()) else {
            return Err(malformed(path, idx));
        };
        let movie_ids = fields
            .filter(|f| !f.trim().is_empty())
            .map(str::to_string)
            .collect();
        records.push(ActorRecord {
            id: id.to_string(),
            name: name.to_string(),
            movie_ids,
        });
    }
    Ok(records)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| io_error(source, path))
}

fn io_error(source: std::io::Error, path: &Path) -> CostarError {
    CostarError::Io {
        source,
        path: path.to_path_buf(),
    }
}

fn malformed(path: &Path, idx: usize) -> CostarError {
    CostarError::Malformed {
        path: path.to_path_buf(),
        line: idx + 1,
    }
}
