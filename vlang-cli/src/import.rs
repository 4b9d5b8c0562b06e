use std::{fs, path::Path};

use tracing::info;
use vlang::{
    Config, Dictionary,
    config::CONFIG_FILE,
    dict::{save_files, sort_dict_by_file},
};

/// Read a JSON dictionary as produced by `vlang extract --json`.
pub fn read_dictionary(path: &Path) -> Result<Dictionary, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse dictionary {}: {}", path.display(), e))
}

pub(crate) fn load_config(root: &Path) -> Result<Config, String> {
    let config = Config::load(root)
        .map_err(|e| format!("Failed to load {}: {}", root.join(CONFIG_FILE).display(), e))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Write the translated rows of `dict_path` into per-component `.vlg` files.
///
/// Translations go through the filters configured for their locale and land
/// under the configured `i18n_directory`. Returns the written paths, one per
/// line.
pub fn run_import(dict_path: &Path, root: &Path) -> Result<String, String> {
    let config = load_config(root)?;
    let i18n_root = config.i18n_root(root).map_err(|e| e.to_string())?;
    let filters = config.filters_by_locale().map_err(|e| e.to_string())?;
    let dict = read_dictionary(dict_path)?;

    let files = sort_dict_by_file(&dict, &i18n_root, &filters);
    save_files(&files).map_err(|e| e.to_string())?;
    info!(rows = dict.len(), files = files.len(), "import finished");

    Ok(files
        .keys()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
