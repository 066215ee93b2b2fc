use include_dir::{include_dir, Dir};
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::LEVEL_COUNT;
use crate::error::LoadError;

/// Most lines kept from a passage resource; the rest is ignored.
pub const MAX_LINES: usize = 10;
/// Longest line kept from a passage resource, in characters.
pub const MAX_LINE_LEN: usize = 999;

static PASSAGE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/passages");

/// One passage of text plus the time allowed to type it
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    lines: Vec<String>,
    time_limit_secs: f64,
}

impl Level {
    pub fn new<I, S>(lines: I, time_limit_secs: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .take(MAX_LINES)
            .map(|l| l.as_ref().chars().take(MAX_LINE_LEN).collect())
            .collect();

        Self {
            lines,
            time_limit_secs,
        }
    }

    /// A level whose resource could not be read.
    pub fn empty(time_limit_secs: f64) -> Self {
        Self {
            lines: Vec::new(),
            time_limit_secs,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn time_limit_secs(&self) -> f64 {
        self.time_limit_secs
    }

    /// Lines joined by a single `\n`, nothing after the last one.
    pub fn target_string(&self) -> String {
        self.lines.iter().join("\n")
    }
}

/// Where level resources are read from
pub trait PassageSource {
    fn read(&self, resource: &str) -> Result<String, LoadError>;
}

/// Reads `levelN.txt` files from a directory on disk
#[derive(Debug, Clone)]
pub struct DirPassageSource {
    dir: PathBuf,
}

impl DirPassageSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl PassageSource for DirPassageSource {
    fn read(&self, resource: &str) -> Result<String, LoadError> {
        let bytes = fs::read(self.dir.join(resource)).map_err(|source| LoadError::Missing {
            resource: resource.to_string(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8 {
            resource: resource.to_string(),
        })
    }
}

/// The default passages compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledPassages;

impl PassageSource for BundledPassages {
    fn read(&self, resource: &str) -> Result<String, LoadError> {
        let file = PASSAGE_DIR
            .get_file(resource)
            .ok_or_else(|| LoadError::Missing {
                resource: resource.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no bundled passage with this name",
                ),
            })?;

        file.contents_utf8()
            .map(str::to_string)
            .ok_or_else(|| LoadError::NotUtf8 {
                resource: resource.to_string(),
            })
    }
}

/// Resource name of the level at `index` (zero based).
pub fn resource_name(index: usize) -> String {
    format!("level{}.txt", index + 1)
}

/// Splits raw resource text into bounded lines with terminators stripped.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .take(MAX_LINES)
        .map(|l| l.chars().take(MAX_LINE_LEN).collect())
        .collect()
}

pub fn load(
    source: &dyn PassageSource,
    resource: &str,
    time_limit_secs: f64,
) -> Result<Level, LoadError> {
    let text = source.read(resource)?;
    let lines = parse_lines(&text);
    debug!(resource, lines = lines.len(), "loaded passage");
    Ok(Level {
        lines,
        time_limit_secs,
    })
}

/// Loads every level, degrading unreadable ones to zero lines.
pub fn load_levels(source: &dyn PassageSource, time_limits: &[f64; LEVEL_COUNT]) -> Vec<Level> {
    time_limits
        .iter()
        .enumerate()
        .map(|(idx, &limit)| {
            let resource = resource_name(idx);
            load(source, &resource, limit).unwrap_or_else(|err| {
                warn!(error = %err, "level {} has no passage, continuing empty", idx + 1);
                Level::empty(limit)
            })
        })
        .collect()
}
