//! Page discovery for `translate --complete`.

use std::path::Path;

use jwalk::WalkDir;

/// Every file under `root` with the given extension, as `/`-separated
/// identifiers relative to `root`, sorted.
///
/// Only the top level is listed unless `recursive` is set. Hidden entries
/// are skipped.
pub fn discover(root: &Path, extension: &str, recursive: bool) -> Vec<String> {
    let walker = WalkDir::new(root).skip_hidden(true).sort(true);
    let walker = if recursive { walker } else { walker.max_depth(1) };

    let mut documents: Vec<String> = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .filter_map(|p| {
            let rel = p.strip_prefix(root).ok()?;
            let parts: Vec<_> = rel.iter().map(|c| c.to_string_lossy()).collect();
            Some(parts.join("/"))
        })
        .collect();

    documents.sort();
    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("admin")).unwrap();
        fs::create_dir_all(root.join("js")).unwrap();
        for file in ["login.html", "index.html", "notes.txt", "admin/users.html", "js/app.js"] {
            fs::write(root.join(file), "").unwrap();
        }
        fs::write(root.join(".draft.html"), "").unwrap();
        dir
    }

    #[test]
    fn test_discover_top_level() {
        let dir = site();
        assert_eq!(discover(dir.path(), "html", false), ["index.html", "login.html"]);
    }

    #[test]
    fn test_discover_recursive() {
        let dir = site();
        assert_eq!(
            discover(dir.path(), "html", true),
            ["admin/users.html", "index.html", "login.html"]
        );
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = TempDir::new().unwrap();
        assert!(discover(&dir.path().join("absent"), "html", false).is_empty());
    }
}
