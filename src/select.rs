use crate::constants::ACCEPTED_EXTENSIONS;
use glob::glob;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// True when the extension is one the file selection accepts when
/// expanding directories and patterns. Explicit file arguments bypass
/// this filter.
pub fn is_accepted_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expands the CLI arguments into the ordered input list for one batch.
///
/// Each argument is taken in turn: an existing directory is expanded to
/// the accepted image files it contains (sorted, hidden entries skipped),
/// an argument with glob metacharacters is expanded to its sorted
/// matches, and anything else is passed through as a literal file path.
/// Literal paths are not checked for existence here; a missing file is
/// reported by the batch itself as a per-item failure.
pub fn expand_inputs(inputs: &[String], recursive: bool) -> Vec<PathBuf> {
    let mut selected = Vec::new();

    for raw in inputs {
        let path = Path::new(raw);
        if path.is_dir() {
            collect_from_dir(path, recursive, &mut selected);
        } else if looks_like_pattern(raw) {
            collect_from_pattern(raw, &mut selected);
        } else {
            selected.push(path.to_path_buf());
        }
    }

    selected
}

fn looks_like_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn collect_from_dir(dir: &Path, recursive: bool, selected: &mut Vec<PathBuf>) {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(dir)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker.flatten() {
        let path = entry.path();
        if path.is_file() && is_accepted_image(path) {
            selected.push(path.to_path_buf());
        }
    }
}

fn collect_from_pattern(pattern: &str, selected: &mut Vec<PathBuf>) {
    let Ok(matches) = glob(pattern) else {
        crate::warn!("Skipping invalid glob pattern: {}", pattern);
        return;
    };

    let mut found: Vec<PathBuf> = matches
        .flatten()
        .filter(|p| p.is_file() && is_accepted_image(p))
        .collect();
    found.sort();
    selected.extend(found);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_is_accepted_image() {
        assert!(is_accepted_image(Path::new("photo.jpg")));
        assert!(is_accepted_image(Path::new("photo.jpeg")));
        assert!(is_accepted_image(Path::new("photo.png")));
        assert!(is_accepted_image(Path::new("photo.bmp")));
        assert!(is_accepted_image(Path::new("photo.PNG")));

        assert!(!is_accepted_image(Path::new("photo.webp")));
        assert!(!is_accepted_image(Path::new("photo.txt")));
        assert!(!is_accepted_image(Path::new("photo")));
    }

    #[test]
    fn test_literal_paths_pass_through_unchecked() {
        let inputs = vec!["missing.jpg".to_string(), "also_missing.png".to_string()];
        let selected = expand_inputs(&inputs, false);
        assert_eq!(
            selected,
            vec![PathBuf::from("missing.jpg"), PathBuf::from("also_missing.png")]
        );
    }

    #[test]
    fn test_directory_expansion_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("b.jpg")).unwrap();
        File::create(temp_dir.path().join("a.png")).unwrap();
        File::create(temp_dir.path().join("notes.txt")).unwrap();
        File::create(temp_dir.path().join(".hidden.jpg")).unwrap();

        let inputs = vec![temp_dir.path().to_string_lossy().into_owned()];
        let selected = expand_inputs(&inputs, false);

        assert_eq!(
            selected,
            vec![temp_dir.path().join("a.png"), temp_dir.path().join("b.jpg")]
        );
    }

    #[test]
    fn test_directory_expansion_non_recursive_skips_subdirs() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("nested");
        fs::create_dir(&subdir).unwrap();
        File::create(temp_dir.path().join("top.jpg")).unwrap();
        File::create(subdir.join("deep.jpg")).unwrap();

        let inputs = vec![temp_dir.path().to_string_lossy().into_owned()];

        let flat = expand_inputs(&inputs, false);
        assert_eq!(flat, vec![temp_dir.path().join("top.jpg")]);

        let deep = expand_inputs(&inputs, true);
        assert_eq!(
            deep,
            vec![subdir.join("deep.jpg"), temp_dir.path().join("top.jpg")]
        );
    }

    #[test]
    fn test_glob_expansion() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("one.jpg")).unwrap();
        File::create(temp_dir.path().join("two.jpg")).unwrap();
        File::create(temp_dir.path().join("three.png")).unwrap();

        let pattern = format!("{}/*.jpg", temp_dir.path().to_string_lossy());
        let selected = expand_inputs(&[pattern], false);

        assert_eq!(
            selected,
            vec![temp_dir.path().join("one.jpg"), temp_dir.path().join("two.jpg")]
        );
    }

    #[test]
    fn test_argument_order_is_preserved() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("z.jpg")).unwrap();

        let dir_input = temp_dir.path().to_string_lossy().into_owned();
        let inputs = vec!["explicit.png".to_string(), dir_input];
        let selected = expand_inputs(&inputs, false);

        assert_eq!(
            selected,
            vec![PathBuf::from("explicit.png"), temp_dir.path().join("z.jpg")]
        );
    }
}
