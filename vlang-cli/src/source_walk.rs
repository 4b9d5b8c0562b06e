use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use tracing::debug;
use vlang::FileKind;

/// Expand inputs into the source files that may carry message blocks.
///
/// Files are kept as given. Directories are walked in parallel, honouring
/// `.gitignore` and skipping hidden entries; only `.vue` and `.js` files are
/// collected from them.
pub fn expand_sources(inputs: &[String]) -> Result<Vec<PathBuf>, String> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut roots: Vec<PathBuf> = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            roots.push(path.to_path_buf());
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            return Err(format!("File does not exist: {}", input));
        }
    }

    let walked: Vec<PathBuf> = roots.par_iter().flat_map(|root| walk(root)).collect();
    debug!(
        files = files.len(),
        walked = walked.len(),
        "collected source files"
    );

    // Deduplicate while preserving order
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut results: Vec<PathBuf> = Vec::with_capacity(files.len() + walked.len());
    for path in files.into_iter().chain(walked) {
        if seen.insert(path.clone()) {
            results.push(path);
        }
    }
    Ok(results)
}

fn walk(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .git_ignore(true)
        .git_exclude(true)
        .hidden(true)
        .ignore(true)
        .parents(true)
        .build();

    let mut out: Vec<PathBuf> = walker
        .filter_map(Result::ok)
        .filter(|dent| dent.file_type().is_some_and(|t| t.is_file()))
        .map(|dent| dent.into_path())
        .filter(|path| FileKind::from_path(path).is_some())
        .collect();
    out.sort();
    out
}

/// Name a source file by its path relative to `root`, with `/` separators.
pub fn component_name(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_sources_walks_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("components")).unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();
        fs::write(root.join("components/Header.vue"), "").unwrap();
        fs::write(root.join("api.js"), "").unwrap();
        fs::write(root.join("README.md"), "").unwrap();
        fs::write(root.join(".cache/Old.vue"), "").unwrap();

        let found = expand_sources(&[root.to_string_lossy().to_string()]).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| component_name(p, Some(root)))
            .collect();
        assert_eq!(names, vec!["api.js", "components/Header.vue"]);
    }

    #[test]
    fn test_expand_sources_keeps_files_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("A.vue");
        fs::write(&file, "").unwrap();
        let input = file.to_string_lossy().to_string();

        let found = expand_sources(&[input.clone(), input]).unwrap();
        assert_eq!(found, vec![file]);
    }

    #[test]
    fn test_expand_sources_missing_file() {
        let err = expand_sources(&["nope/Missing.vue".to_string()]).unwrap_err();
        assert!(err.contains("File does not exist"));
    }

    #[test]
    fn test_component_name_without_root() {
        assert_eq!(
            component_name(Path::new("src/components/Nav.vue"), None),
            "src/components/Nav.vue"
        );
    }
}
