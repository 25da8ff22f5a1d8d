//! Input file discovery
//!
//! Expands include globs into an ordered, de-duplicated list of paths and
//! reads them into `SourceFile`s for the parser.

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use ts2psql_core::SourceFile;
use walkdir::WalkDir;

use crate::config::InputSelection;

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// Resolve the run's input paths.
///
/// Explicit files are returned as given. Glob patterns are expanded one after
/// another, each pattern's matches sorted by path, and a path matched by more
/// than one pattern is kept at its first position.
pub fn resolve_inputs(selection: &InputSelection) -> Result<Vec<PathBuf>> {
    match selection {
        InputSelection::Files(files) => Ok(files.clone()),
        InputSelection::Globs(patterns) => {
            let mut paths = Vec::new();
            for pattern in patterns {
                let found = expand_glob(pattern)?;
                tracing::debug!(pattern = %pattern, matches = found.len(), "Expanded include pattern");
                paths.extend(found);
            }
            Ok(dedup_paths(paths))
        }
    }
}

/// Expand one glob pattern into the files it matches.
///
/// `*` and `?` do not cross directory separators; `**` matches any number of
/// directories. A pattern without wildcards matches the file it names, if it
/// exists.
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob(pattern) {
        let path = PathBuf::from(pattern);
        return Ok(if path.is_file() { vec![path] } else { Vec::new() });
    }

    let matcher: GlobMatcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .with_context(|| format!("Invalid include pattern: {}", pattern))?
        .compile_matcher();

    let base = literal_base(pattern);
    let max_depth = walk_depth(pattern, &base);
    let relative = base.as_os_str().is_empty();
    let root = if relative {
        PathBuf::from(".")
    } else {
        base
    };

    let mut walker = WalkDir::new(&root).follow_links(true);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut matches: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable path");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let path = entry.into_path();
            if relative {
                path.strip_prefix(".").map(Path::to_path_buf).unwrap_or(path)
            } else {
                path
            }
        })
        .filter(|path| matcher.is_match(path))
        .collect();

    matches.sort();
    Ok(matches)
}

/// Read every input into memory, in order.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Ok(SourceFile::new(path.clone(), text))
        })
        .collect()
}

fn is_glob(text: &str) -> bool {
    text.contains(GLOB_META)
}

/// The leading components of `pattern` that contain no glob syntax
fn literal_base(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();
    for component in Path::new(pattern).components() {
        if let Component::Normal(part) = component {
            if is_glob(&part.to_string_lossy()) {
                break;
            }
        }
        base.push(component);
    }
    base
}

/// How deep below `base` a match can lie. `None` when the pattern contains
/// `**` and any depth can match.
fn walk_depth(pattern: &str, base: &Path) -> Option<usize> {
    if pattern.contains("**") {
        return None;
    }
    let total = Path::new(pattern).components().count();
    Some(total.saturating_sub(base.components().count()))
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}
