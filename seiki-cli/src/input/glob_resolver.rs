//! File pattern resolution using glob

use super::{InputSource, STDIN_PATTERN};
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::Path;

/// Resolve file patterns to input sources
///
/// `-` selects standard input and always comes first. A pattern without glob
/// metacharacters must name an existing file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut stdin = false;
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            stdin = true;
            continue;
        }

        if !has_glob_metacharacters(pattern) {
            let path = Path::new(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.push(path.to_path_buf());
            continue;
        }

        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }

    if sources.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(sources)
}

fn has_glob_metacharacters(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "notes.md"] {
            fs::write(dir.path().join(name), "本文").unwrap();
        }
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        dir
    }

    #[test]
    fn test_glob_is_sorted_and_skips_directories() {
        let dir = setup();
        let pattern = format!("{}/*.txt", dir.path().display());

        let sources = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(
            sources,
            vec![
                InputSource::File(dir.path().join("a.txt")),
                InputSource::File(dir.path().join("b.txt")),
            ]
        );
    }

    #[test]
    fn test_duplicates_removed() {
        let dir = setup();
        let literal = dir.path().join("a.txt").display().to_string();
        let pattern = format!("{}/a.*", dir.path().display());

        let sources = resolve_patterns(&[literal, pattern]).unwrap();
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn test_stdin_comes_first() {
        let dir = setup();
        let literal = dir.path().join("b.txt").display().to_string();

        let sources = resolve_patterns(&[literal, "-".to_string()]).unwrap();
        assert_eq!(sources[0], InputSource::Stdin);
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn test_missing_literal_file() {
        let err = resolve_patterns(&["/nonexistent/記事.txt".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern"));
    }

    #[test]
    fn test_no_matches() {
        let dir = setup();
        let pattern = format!("{}/*.json", dir.path().display());

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No files found matching the provided patterns"
        );
    }
}
