use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::render::render_html;
use crate::types::Draw;

pub const DEFAULT_FILE_NAME: &str = "ultima_estrazione.html";

static RE_SPELLED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+([\w\s]+)\s+(\d{4})").expect("invalid regex: spelled date")
});

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Picks the file name for a draw dated `date`.
///
/// Dates spelled out like "Martedì 14 ottobre 2025" map to the fixed
/// [`DEFAULT_FILE_NAME`]; anything else keeps only its alphanumeric
/// characters.
pub fn output_file_name(date: &str) -> String {
    if RE_SPELLED_DATE.is_match(date) {
        return DEFAULT_FILE_NAME.to_string();
    }

    let stem: String = date.chars().filter(|c| c.is_alphanumeric()).collect();
    if stem.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        format!("{}.html", stem)
    }
}

/// Renders `draw` into `dir`, creating the directory when needed, and
/// returns the path of the written file.
pub fn write_draw(dir: &Path, file_name: Option<&str>, draw: &Draw) -> Result<PathBuf, OutputError> {
    let file_name = file_name
        .map(str::to_string)
        .unwrap_or_else(|| output_file_name(&draw.header.date));
    let path = dir.join(file_name);

    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    fs::write(&path, render_html(draw)).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;

    log::debug!("Wrote {} row(s) to {}", draw.rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DrawHeader, DrawRow};

    fn draw(date: &str) -> Draw {
        Draw {
            header: DrawHeader {
                number: "Estrazione n. 165".to_string(),
                date: date.to_string(),
            },
            rows: vec![DrawRow {
                wheel: "Napoli".to_string(),
                numbers: ["2", "33", "44", "69", "81"].map(String::from),
            }],
        }
    }

    #[test]
    fn test_spelled_date_uses_default_name() {
        assert_eq!(output_file_name("Martedì 14 ottobre 2025"), DEFAULT_FILE_NAME);
        assert_eq!(output_file_name("14 ottobre 2025"), DEFAULT_FILE_NAME);
    }

    #[test]
    fn test_other_dates_keep_alphanumerics() {
        assert_eq!(output_file_name("14/10/2025"), "14102025.html");
        assert_eq!(output_file_name("DATA SCONOSCIUTA"), "DATASCONOSCIUTA.html");
    }

    #[test]
    fn test_blank_date_uses_default_name() {
        assert_eq!(output_file_name(" - / "), DEFAULT_FILE_NAME);
    }

    #[test]
    fn test_write_draw_creates_directory() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let dir = tmp.path().join("sito").join("templates");

        let path = write_draw(&dir, None, &draw("Martedì 14 ottobre 2025"))
            .expect("Failed to write draw");

        assert_eq!(path, dir.join(DEFAULT_FILE_NAME));
        let written = fs::read_to_string(&path).expect("Failed to read output");
        assert!(written.contains("<span class=\"oro\">81</span>"));
    }

    #[test]
    fn test_write_draw_with_explicit_name_overwrites() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(tmp.path().join("oggi.html"), "old").expect("Failed to seed file");

        let path = write_draw(tmp.path(), Some("oggi.html"), &draw("14/10/2025"))
            .expect("Failed to write draw");

        assert_eq!(path, tmp.path().join("oggi.html"));
        let written = fs::read_to_string(&path).expect("Failed to read output");
        assert!(written.starts_with("<html>"));
    }
}
