//! Atomic sets from headerless CSV sources.
//!
//! Source layout: the first line is a free-text description, every
//! following line is `name,source,required,comments`.

use super::{LoadError, LoadResult};
use crate::model::atomic::Atomic;
use crate::model::attribute::AttributeRecord;
use indexmap::IndexMap;
use log::{error, info};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

const FIELD_NAMES: [&str; 4] = ["name", "source", "required", "comments"];

/// Loads one atomic set named after the file stem of `path`.
pub fn load_atomic_from_csv(path: impl AsRef<Path>) -> LoadResult<Atomic> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_atomic(&name, BufReader::new(file), path)
}

/// Loads one atomic set from an in-memory or streamed source.
///
/// `name` doubles as the origin reported in errors.
pub fn load_atomic_from_reader<R: BufRead>(name: &str, reader: R) -> LoadResult<Atomic> {
    read_atomic(name, reader, Path::new(name))
}

/// Loads every file with `extension` directly inside `dir`, keyed by file
/// stem and ordered by file name.
pub fn load_atomics_from_dir(
    dir: impl AsRef<Path>,
    extension: &str,
) -> LoadResult<IndexMap<String, Arc<Atomic>>> {
    let dir = dir.as_ref();
    let started_at = Instant::now();
    info!(
        "event=scan_dir module=loader status=start dir={}",
        dir.display()
    );

    let paths = match list_sources(dir, extension) {
        Ok(paths) => paths,
        Err(err) => {
            error!(
                "event=scan_dir module=loader status=error dir={} error={}",
                dir.display(),
                err
            );
            return Err(err);
        }
    };

    let mut atomics = IndexMap::with_capacity(paths.len());
    for path in paths {
        let atomic = load_atomic_from_csv(&path).inspect_err(|err| {
            error!(
                "event=load_atomic module=loader status=error path={} error={}",
                path.display(),
                err
            );
        })?;
        atomics.insert(atomic.name().to_string(), Arc::new(atomic));
    }

    info!(
        "event=scan_dir module=loader status=ok dir={} atomics={} duration_ms={}",
        dir.display(),
        atomics.len(),
        started_at.elapsed().as_millis()
    );
    Ok(atomics)
}

fn list_sources(dir: &Path, extension: &str) -> LoadResult<Vec<PathBuf>> {
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        let matches_extension = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
        if matches_extension && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn read_atomic<R: BufRead>(name: &str, mut reader: R, origin: &Path) -> LoadResult<Atomic> {
    let mut description = String::new();
    let read = reader
        .read_line(&mut description)
        .map_err(|source| LoadError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
    if read == 0 {
        return Err(LoadError::EmptySource {
            path: origin.to_path_buf(),
        });
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|source| LoadError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        if row.iter().all(|field| field.is_empty()) {
            continue;
        }
        // Line numbers are reported against the whole file, description included.
        let line = row.position().map_or(0, |position| position.line() + 1);
        records.push(parse_record(&row, origin, line)?);
    }

    let atomic = Atomic::new(name, description.trim_end(), records)?;
    info!(
        "event=load_atomic module=loader status=ok name={} attributes={}",
        atomic.name(),
        atomic.len()
    );
    Ok(atomic)
}

fn parse_record(row: &csv::StringRecord, origin: &Path, line: u64) -> LoadResult<AttributeRecord> {
    let malformed = |reason: String| LoadError::MalformedRecord {
        path: origin.to_path_buf(),
        line,
        reason,
    };

    if row.len() < FIELD_NAMES.len() {
        return Err(malformed(format!(
            "missing field `{}` (expected {} fields, found {})",
            FIELD_NAMES[row.len()],
            FIELD_NAMES.len(),
            row.len()
        )));
    }
    if row[0].is_empty() {
        return Err(malformed("attribute name is empty".to_string()));
    }

    Ok(AttributeRecord::new(&row[0], &row[1], &row[2], &row[3]))
}
