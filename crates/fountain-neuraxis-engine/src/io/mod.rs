use crate::models::Document;
use crate::parsing::{diagnostics::DiagnosticSink, parse_with_sink};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of Fountain screenplays.
pub const FOUNTAIN_EXTENSION: &str = "fountain";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scripts directory: {0}")]
    InvalidScriptsDir(String),
}

/// Read a screenplay file and return its content
pub fn read_script(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and parse a screenplay file
pub fn load_document<S: DiagnosticSink + ?Sized>(
    path: &Path,
    sink: &mut S,
) -> Result<Document, IoError> {
    let content = read_script(path)?;
    Ok(parse_with_sink(&content, sink))
}

/// Scan for Fountain files in the scripts directory
pub fn scan_fountain_files(scripts_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_scripts_dir(scripts_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(scripts_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == FOUNTAIN_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_scripts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidScriptsDir(format!(
            "scripts directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementType;
    use crate::parsing::diagnostics::Diagnostic;
    use tempfile::TempDir;

    fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_scan_finds_fountain_files_only() {
        // Given a scripts directory with mixed file types
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "pilot.fountain", "INT. HOUSE - DAY");
        create_test_file(&dir, "notes.md", "# notes");
        create_test_file(&dir, "season1/ep2.fountain", "EXT. YARD - DAY");

        // When scanning for files
        let files = scan_fountain_files(dir.path()).unwrap();

        // Then only fountain files are found, sorted
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["pilot.fountain", "ep2.fountain"]);
    }

    #[test]
    fn test_handle_invalid_scripts_directory() {
        let result = scan_fountain_files(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scripts directory"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_script(&dir.path().join("missing.fountain"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_document_parses_and_reports() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(&dir, "a.fountain", "INT. HOUSE - DAY\n\n#\n\nQuiet.\r\n");

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let doc = load_document(&path, &mut diagnostics).unwrap();

        let kinds: Vec<_> = doc.elements().iter().map(|e| e.element_type()).collect();
        assert_eq!(kinds, vec![ElementType::SceneHeading, ElementType::Action]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 3);
    }
}
