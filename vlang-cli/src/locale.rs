use vlang::{
    LocaleSuggestions, UnknownLocalePolicy, best_locale_match,
    locale::resolve_active_locale_with,
};

/// Inputs of the `locale` subcommand.
#[derive(Debug, Clone, Default)]
pub struct LocaleRequest {
    pub locales: Vec<String>,
    pub chosen: Option<String>,
    pub server: Option<String>,
    pub persisted: Option<String>,
    pub available: Vec<String>,
    pub requested: Option<String>,
}

/// Resolve a locale in one of two modes.
///
/// With `available`, picks the closest match for `requested`. Otherwise
/// computes the active locale of a session from `locales` and the three
/// suggestions.
pub fn run_locale(request: &LocaleRequest) -> Result<String, String> {
    if !request.available.is_empty() {
        return best_locale_match(&request.available, request.requested.as_deref())
            .map(str::to_string)
            .ok_or_else(|| "No locale available".to_string());
    }

    if request.locales.is_empty() {
        return Err("Either --locales or --available is required".to_string());
    }

    let suggestions = LocaleSuggestions::new()
        .with_chosen(request.chosen.clone())
        .with_server_suggested(request.server.clone())
        .with_persisted(request.persisted.clone());

    resolve_active_locale_with(&request.locales, &suggestions, UnknownLocalePolicy::Warn)
        .map_err(|e| e.to_string())
}
