use std::path::Path;

use tracing::info;
use vlang::{Dictionary, dict::new_lines_to_sync};

use crate::{
    extract::extract_dictionary,
    import::{load_config, read_dictionary},
};

/// Rows of the project at `root` that the external dictionary lacks.
///
/// Every extracted row is also proposed in each configured locale, so that
/// translators get a line for every language the project supports.
pub fn collect_new_lines(
    external_path: &Path,
    root: &Path,
    inputs: &[String],
) -> Result<Dictionary, String> {
    let config = load_config(root)?;
    let external = read_dictionary(external_path)?;
    let internal = extract_dictionary(inputs, Some(root))?;

    let lines = new_lines_to_sync(&internal, &external, &config.locales);
    info!(
        internal = internal.len(),
        external = external.len(),
        new = lines.len(),
        "sync computed"
    );
    Ok(lines)
}
