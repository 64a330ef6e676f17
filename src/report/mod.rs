// Report module - renders a comparison to the terminal or to files

pub mod json;
pub mod table;

use crate::config::{Config, FileOutput, OutputFormat};
use crate::error::{AppError, AppResult};
use crate::routes::diff::ComparisonResult;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which half of a comparison a table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Pre,
    Post,
}

impl Side {
    pub fn file_stem(self) -> &'static str {
        match self {
            Side::Pre => "PRE",
            Side::Post => "POST",
        }
    }

    pub fn banner(self) -> [&'static str; 2] {
        match self {
            Side::Pre => [
                "***    Pre Route Table  ***",
                "***    Entries not found in the Post Routing Table Output  ***",
            ],
            Side::Post => [
                "***    Post Route Table  ***",
                "***    Entries not found in the Pre Routing Table Output  ***",
            ],
        }
    }
}

/// Render `result` as configured. Returns the files written, if any.
pub fn render(result: &ComparisonResult, config: &Config) -> AppResult<Vec<PathBuf>> {
    match (config.format, config.file_output) {
        (OutputFormat::Table, FileOutput::Off) => {
            let mut out = std::io::stdout().lock();
            for side in [Side::Pre, Side::Post] {
                let [title, subtitle] = side.banner();
                let body = table::render_side(result, side);
                write_stdout(&mut out, &format!("\n{}\n{}\n{}", title, subtitle, body))?;
            }
            Ok(Vec::new())
        }
        (OutputFormat::Table, FileOutput::On) => {
            let mut written = Vec::new();
            for side in [Side::Pre, Side::Post] {
                let path = config.output_dir.join(format!("{}.txt", side.file_stem()));
                write_file(&path, &table::render_side(result, side))?;
                println!("\n***    Output to File - {} ***", path.display());
                written.push(path);
            }
            Ok(written)
        }
        (OutputFormat::Json, FileOutput::Off) => {
            let body = json::render(result, config)?;
            write_stdout(&mut std::io::stdout().lock(), &body)?;
            Ok(Vec::new())
        }
        (OutputFormat::Json, FileOutput::On) => {
            let path = config.output_dir.join("comparison.json");
            write_file(&path, &json::render(result, config)?)?;
            println!("\n***    Output to File - {} ***", path.display());
            Ok(vec![path])
        }
    }
}

fn write_stdout(out: &mut impl Write, text: &str) -> AppResult<()> {
    writeln!(out, "{}", text).map_err(|e| AppError::io("<stdout>", e))
}

fn write_file(path: &Path, text: &str) -> AppResult<()> {
    std::fs::write(path, format!("{}\n", text)).map_err(|e| AppError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{EntrySelection, InstanceFilter, RoutingEntry};

    fn config(dir: &std::path::Path, format: OutputFormat) -> Config {
        Config {
            pre: PathBuf::from("pre.xml"),
            post: PathBuf::from("post.xml"),
            filter: InstanceFilter::All,
            entries: EntrySelection::Active,
            file_output: FileOutput::On,
            format,
            output_dir: dir.to_path_buf(),
        }
    }

    fn result() -> ComparisonResult {
        ComparisonResult {
            only_in_pre: vec![RoutingEntry {
                table_name: "inet.0".to_string(),
                destination: "10.0.0.0/24".to_string(),
                next_hops: vec!["192.168.1.1".to_string()],
                via: vec!["ge-0/0/0.0".to_string()],
                local_interfaces: vec![String::new()],
            }],
            only_in_post: Vec::new(),
        }
    }

    #[test]
    fn test_table_files() {
        let dir = tempfile::tempdir().unwrap();
        let written = render(&result(), &config(dir.path(), OutputFormat::Table)).unwrap();
        assert_eq!(
            written,
            vec![dir.path().join("PRE.txt"), dir.path().join("POST.txt")]
        );

        let pre = std::fs::read_to_string(dir.path().join("PRE.txt")).unwrap();
        assert!(pre.contains("10.0.0.0/24"));
        let post = std::fs::read_to_string(dir.path().join("POST.txt")).unwrap();
        assert!(post.contains("Routing-Instance"));
        assert!(!post.contains("10.0.0.0/24"));
    }

    #[test]
    fn test_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let written = render(&result(), &config(dir.path(), OutputFormat::Json)).unwrap();
        assert_eq!(written, vec![dir.path().join("comparison.json")]);

        let text = std::fs::read_to_string(&written[0]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["only_in_pre"][0]["destination"], "10.0.0.0/24");
    }

    #[test]
    fn test_missing_output_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir.path().join("missing"), OutputFormat::Table);
        assert!(matches!(render(&result(), &config), Err(AppError::Io { .. })));
    }
}
