//! Temporary data file staging
//!
//! Numeric series reach gnuplot as whitespace-delimited text files:
//! one data point per line, fields separated by a single space. Each
//! call creates a fresh, uniquely named file under the temp directory
//! and registers it for cleanup before anything is written to it.
//!
//! Series of different lengths are truncated to the shortest one.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::config::DEFAULT_FILE_PREFIX;
use crate::error::{CleanupFailure, Error, Result};

/// One line of a data file
pub trait Row {
    /// Write the row's fields, space separated, without a newline
    fn write_fields<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

impl Row for f64 {
    fn write_fields<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self)
    }
}

impl Row for (f64, f64) {
    fn write_fields<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{} {}", self.0, self.1)
    }
}

impl Row for (f64, f64, f64) {
    fn write_fields<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{} {} {}", self.0, self.1, self.2)
    }
}

/// Owner of every data file staged since the last cleanup
#[derive(Debug)]
pub struct TempFileStaging {
    dir: PathBuf,
    prefix: String,
    files: HashMap<PathBuf, TempPath>,
}

impl TempFileStaging {
    /// Stage into the OS temp directory with the default prefix
    pub fn new() -> Self {
        Self::with_location(std::env::temp_dir(), DEFAULT_FILE_PREFIX)
    }

    /// Stage into `dir`, naming files `<prefix><random>`
    pub fn with_location(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            files: HashMap::new(),
        }
    }

    /// Write `rows` to a new temp file and return its path
    ///
    /// The file is registered before it is written, so a failed write
    /// still gets cleaned up by [`cleanup`](Self::cleanup).
    pub fn stage<R, I>(&mut self, rows: I) -> Result<PathBuf>
    where
        R: Row,
        I: IntoIterator<Item = R>,
    {
        let (file, path) = self.create()?;

        let mut writer = BufWriter::new(file);
        let count = write_rows(&mut writer, rows).map_err(|e| Error::StagingFailed {
            path: Some(path.clone()),
            reason: e.to_string(),
        })?;
        // The handle is closed here, before any command names the file
        drop(writer);

        debug!("staged {} row(s) to {}", count, path.display());
        Ok(path)
    }

    /// One value per line
    pub fn stage_x(&mut self, data: &[f64]) -> Result<PathBuf> {
        self.stage(data.iter().copied())
    }

    /// `x y` per line, truncated to the shorter series
    pub fn stage_xy(&mut self, x: &[f64], y: &[f64]) -> Result<PathBuf> {
        self.stage(x.iter().copied().zip(y.iter().copied()))
    }

    /// `x y z` per line, truncated to the shortest series
    pub fn stage_xyz(&mut self, x: &[f64], y: &[f64], z: &[f64]) -> Result<PathBuf> {
        self.stage(
            x.iter()
                .zip(y)
                .zip(z)
                .map(|((&x, &y), &z)| (x, y, z)),
        )
    }

    /// `x f(x)` per line
    pub fn stage_fn<F>(&mut self, xs: &[f64], f: F) -> Result<PathBuf>
    where
        F: Fn(f64) -> f64,
    {
        self.stage(xs.iter().map(|&x| (x, f(x))))
    }

    /// Delete every registered file
    ///
    /// All entries are visited even when some fail; the registry is
    /// always empty afterwards. Failures are returned together. A file
    /// that is already gone counts as removed.
    pub fn cleanup(&mut self) -> Result<()> {
        let mut failures = Vec::new();

        for (path, temp_path) in self.files.drain() {
            match temp_path.close() {
                Ok(()) => debug!("removed {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("{} was already removed", path.display());
                }
                Err(e) => {
                    warn!("Failed to remove temp file {}: {}", path.display(), e);
                    failures.push(CleanupFailure {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::CleanupFailed { failures })
        }
    }

    /// Paths currently registered, in no particular order
    pub fn staged_files(&self) -> Vec<&Path> {
        self.files.keys().map(PathBuf::as_path).collect()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn create(&mut self) -> Result<(File, PathBuf)> {
        let named = tempfile::Builder::new()
            .prefix(&self.prefix)
            .tempfile_in(&self.dir)
            .map_err(|e| Error::StagingFailed {
                path: None,
                reason: format!("{} (in {})", e, self.dir.display()),
            })?;

        let (file, temp_path) = named.into_parts();
        let path = temp_path.to_path_buf();
        self.files.insert(path.clone(), temp_path);
        Ok((file, path))
    }
}

fn write_rows<W, R, I>(writer: &mut W, rows: I) -> std::io::Result<usize>
where
    W: Write,
    R: Row,
    I: IntoIterator<Item = R>,
{
    let mut count = 0;
    for row in rows {
        row.write_fields(writer)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

impl Default for TempFileStaging {
    fn default() -> Self {
        Self::new()
    }
}
