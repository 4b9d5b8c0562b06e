//! CLI library for testing purposes

pub mod check_config;
pub mod extract;
pub mod import;
pub mod locale;
pub mod source_walk;
pub mod sync;
pub mod translate;
pub mod validation;

pub use extract::{DictFormat, extract_dictionary, render_dictionary};
pub use import::{read_dictionary, run_import};
pub use source_walk::expand_sources;
pub use sync::collect_new_lines;
