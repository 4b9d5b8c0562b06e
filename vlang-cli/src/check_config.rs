use std::path::Path;

use tracing::warn;
use vlang::{Config, config::CONFIG_FILE};

/// Load and validate `vlang.yml` under `root`, returning a short summary.
pub fn check_config(root: &Path) -> Result<String, String> {
    let config = Config::load(root)
        .map_err(|e| format!("Failed to load {}: {}", root.join(CONFIG_FILE).display(), e))?;
    config.validate().map_err(|e| e.to_string())?;

    let mut lines = vec![
        format!("✅ {} is valid", CONFIG_FILE),
        format!("Locales: {}", config.locales.join(", ")),
        format!("Default locale: {}", config.locales[0]),
    ];

    if let Some(source) = &config.source_locale {
        lines.push(format!("Source locale: {}", source));
    }

    match config.i18n_root(root) {
        Ok(dir) => {
            if !dir.is_dir() {
                warn!(dir = %dir.display(), "i18n directory does not exist yet");
            }
            lines.push(format!("I18n directory: {}", dir.display()));
        }
        Err(e) => warn!("{}", e),
    }

    for (locale, filters) in config.filters_by_locale().map_err(|e| e.to_string())? {
        let names: Vec<&str> = filters.iter().map(|f| f.name()).collect();
        lines.push(format!("Filters ({}): {}", locale, names.join(", ")));
    }

    Ok(lines.join("\n"))
}
