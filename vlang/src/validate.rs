use serde::Serialize;

use crate::{
    error::Error,
    range::RangeExpr,
    types::{MessageEntry, MessageTable},
};

/// What is wrong with a table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// A range expression that can never match.
    InvalidRange { range: String },
    /// A pluralized entry without any variant.
    NoVariants,
    /// A bucket whose locale is empty.
    EmptyLocale,
}

/// Non-fatal report describing one problem in a message table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableIssue {
    pub locale: String,
    pub key: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl std::fmt::Display for TableIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            IssueKind::InvalidRange { range } => write!(
                f,
                "locale='{}' key='{}': invalid range '{}'",
                self.locale, self.key, range
            ),
            IssueKind::NoVariants => write!(
                f,
                "locale='{}' key='{}': pluralized entry has no variants",
                self.locale, self.key
            ),
            IssueKind::EmptyLocale => write!(f, "bucket without a locale"),
        }
    }
}

/// Collect every problem in `table`.
pub fn collect_table_issues(table: &MessageTable) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    for bucket in table.records() {
        if bucket.locale.trim().is_empty() {
            issues.push(TableIssue {
                locale: bucket.locale.clone(),
                key: String::from("<bucket>"),
                kind: IssueKind::EmptyLocale,
            });
        }

        for (key, entry) in &bucket.messages {
            let MessageEntry::Pluralized(forms) = entry else {
                continue;
            };
            if forms.is_empty() {
                issues.push(TableIssue {
                    locale: bucket.locale.clone(),
                    key: key.clone(),
                    kind: IssueKind::NoVariants,
                });
            }
            for range in forms.ranges() {
                if range.parse::<RangeExpr>().is_err() {
                    issues.push(TableIssue {
                        locale: bucket.locale.clone(),
                        key: key.clone(),
                        kind: IssueKind::InvalidRange {
                            range: range.to_string(),
                        },
                    });
                }
            }
        }
    }

    issues
}

/// Validate a table, failing with every problem found.
pub fn validate_table(table: &MessageTable) -> Result<(), Error> {
    let issues = collect_table_issues(table);
    if issues.is_empty() {
        return Ok(());
    }
    let lines: Vec<String> = issues.iter().map(ToString::to_string).collect();
    Err(Error::validation_error(format!(
        "Table validation failed:\n{}",
        lines.join("\n")
    )))
}
