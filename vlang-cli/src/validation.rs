use serde::Serialize;
use vlang::validate::{TableIssue, collect_table_issues};

use crate::translate::load_tables;

/// Problems found in one table file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub issues: Vec<TableIssue>,
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = std::path::Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Check every table, returning one report per file.
pub fn check_tables(paths: &[String]) -> Result<Vec<FileReport>, String> {
    paths
        .iter()
        .map(|path| -> Result<FileReport, String> {
            validate_file_path(path)?;
            let table = load_tables(std::slice::from_ref(path))?;
            Ok(FileReport {
                file: path.clone(),
                issues: collect_table_issues(&table),
            })
        })
        .collect()
}

/// Render reports; `Err` carries the report when any table has a problem.
pub fn run_validate(paths: &[String], json: bool) -> Result<String, String> {
    if paths.is_empty() {
        return Err("No input files provided".to_string());
    }

    let reports = check_tables(paths)?;
    let failed = reports.iter().any(|r| !r.issues.is_empty());

    let rendered = if json {
        serde_json::to_string_pretty(&reports).map_err(|e| e.to_string())?
    } else {
        render_text(&reports)
    };

    if failed { Err(rendered) } else { Ok(rendered) }
}

fn render_text(reports: &[FileReport]) -> String {
    let mut out = Vec::new();
    for report in reports {
        if report.issues.is_empty() {
            out.push(format!("✅ {}", report.file));
            continue;
        }
        out.push(format!(
            "❌ {}: Table validation failed ({} issue(s))",
            report.file,
            report.issues.len()
        ));
        for issue in &report.issues {
            out.push(format!("  - {}", issue));
        }
    }
    out.join("\n")
}
