use tracing::debug;
use vlang::{
    Count, LocaleSuggestions, MessageTable, TranslateOptions, Vlang, traits::Document,
};

/// Options of the `translate` subcommand.
#[derive(Debug, Clone, Default)]
pub struct TranslateRequest {
    pub tables: Vec<String>,
    pub key: String,
    pub count: Option<String>,
    pub locale: Option<String>,
    pub locales: Vec<String>,
    pub best_match: bool,
    pub no_debug: bool,
}

/// Load and merge tables, later files overriding earlier ones.
pub fn load_tables(paths: &[String]) -> Result<MessageTable, String> {
    let tables = paths
        .iter()
        .map(|path| {
            MessageTable::read_from(path).map_err(|e| format!("Failed to read {}: {}", path, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MessageTable::merge(tables))
}

/// Resolve one key the way the runtime would.
///
/// Without `--best-match`, `--locale` acts as the user's choice among the
/// enabled locales (`--locales`, or the table's own locales) and the key is
/// looked up in exactly that bucket. With it, the closest table locale to
/// `--locale` is used.
pub fn run_translate(request: &TranslateRequest) -> Result<String, String> {
    let table = load_tables(&request.tables)?;
    let count = request.count.as_deref().and_then(Count::parse);
    if request.count.is_some() && count.is_none() {
        debug!(count = ?request.count, "count is not numeric, translating as static");
    }

    let options = TranslateOptions::new().with_debug(!request.no_debug);
    let locales: Vec<String> = if request.locales.is_empty() {
        table.locales().into_iter().map(str::to_string).collect()
    } else {
        request.locales.clone()
    };

    let suggestions = LocaleSuggestions::new().with_chosen(request.locale.clone());
    let vlang = Vlang::new(locales, suggestions, options).map_err(|e| e.to_string())?;

    if request.best_match {
        Ok(vlang.translate_best_match(request.locale.as_deref(), &request.key, count, &table))
    } else {
        Ok(vlang.translate(&request.key, count, &table))
    }
}
