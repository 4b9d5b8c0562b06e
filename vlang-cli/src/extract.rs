use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};
use vlang::{Dictionary, dict::dict_from_blocks, extract_path};

use crate::source_walk::{component_name, expand_sources};

/// Output encoding for extracted dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictFormat {
    Yaml,
    Json,
}

/// Extract the messages of every source file into one flat dictionary.
///
/// With no explicit inputs the whole `root` is scanned. Component names are
/// paths relative to `root` when one is given. A file whose message block
/// cannot be read is logged and left out.
pub fn extract_dictionary(inputs: &[String], root: Option<&Path>) -> Result<Dictionary, String> {
    let inputs: Vec<String> = match (inputs.is_empty(), root) {
        (true, Some(root)) => vec![root.to_string_lossy().to_string()],
        (true, None) => return Err("No input files provided".to_string()),
        (false, _) => inputs.to_vec(),
    };

    let files = expand_sources(&inputs)?;
    let parts: Vec<Dictionary> = files
        .par_iter()
        .filter_map(|path| {
            let blocks = match extract_path(path) {
                Ok(blocks) => blocks,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping file with invalid messages");
                    return None;
                }
            };
            let component = component_name(path, root);
            debug!(component = %component, blocks = blocks.len(), "extracted");
            Some(dict_from_blocks(&component, &blocks))
        })
        .collect();

    let mut dict = Dictionary::new();
    for part in parts {
        dict.extend(part);
    }
    info!(files = files.len(), rows = dict.len(), "extraction finished");
    Ok(dict)
}

pub fn render_dictionary(dict: &Dictionary, format: DictFormat) -> Result<String, String> {
    match format {
        DictFormat::Json => serde_json::to_string_pretty(dict).map_err(|e| e.to_string()),
        DictFormat::Yaml => serde_yaml::to_string(dict).map_err(|e| e.to_string()),
    }
}
