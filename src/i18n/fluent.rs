// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the localization state from embedded bundles, or from `.ftl`
    /// files in `i18n_dir` when given (custom builds).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for (locale, source) in load_sources(i18n_dir) {
            match FluentResource::try_new(source) {
                Ok(resource) => {
                    let mut bundle = FluentBundle::new(vec![locale.clone()]);
                    if bundle.add_resource(resource).is_ok() {
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
                Err(_) => continue,
            }
        }

        let default_locale: LanguageIdentifier =
            "en-US".parse().expect("default locale is well-formed");
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Resolves a message key in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Resolves a message key with interpolation arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Collects `(locale, ftl source)` pairs, preferring an on-disk directory
/// over the embedded assets when one is provided.
fn load_sources(i18n_dir: Option<String>) -> Vec<(LanguageIdentifier, String)> {
    let mut sources = Vec::new();

    if let Some(dir) = i18n_dir {
        if let Ok(entries) = std::fs::read_dir(&dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if path.extension().and_then(|e| e.to_str()) != Some("ftl") {
                    continue;
                }
                if let Ok(locale) = stem.parse::<LanguageIdentifier>() {
                    if let Ok(content) = std::fs::read_to_string(&path) {
                        sources.push((locale, content));
                    }
                }
            }
        }
        if !sources.is_empty() {
            return sources;
        }
    }

    for file in Asset::iter() {
        let filename = file.as_ref();
        if let Some(locale_str) = filename.strip_suffix(".ftl") {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                if let Some(content) = Asset::get(filename) {
                    sources.push((
                        locale,
                        String::from_utf8_lossy(content.data.as_ref()).to_string(),
                    ));
                }
            }
        }
    }

    sources
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GeneralConfig};

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_languages() {
        let config = Config {
            general: GeneralConfig {
                language: Some("xx-XX".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let lang = resolve_locale(None, &config, &available());
        // Falls through to the OS locale, which may or may not be available;
        // either way the bogus config value must not win.
        assert_ne!(lang, Some("xx-XX".parse().unwrap()));
    }

    #[test]
    fn embedded_bundles_include_default_locale() {
        let i18n = I18n::default();
        assert!(i18n
            .available_locales
            .contains(&"en-US".parse::<LanguageIdentifier>().unwrap()));
    }

    #[test]
    fn tr_returns_missing_marker_for_unknown_key() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("definitely-not-a-key"),
            "MISSING: definitely-not-a-key"
        );
    }

    #[test]
    fn tr_with_args_interpolates() {
        let mut i18n = I18n::default();
        i18n.set_locale("en-US".parse().unwrap());
        let text = i18n.tr_with_args("notification-winner", &[("name", "Ada")]);
        assert!(text.contains("Ada"));
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("xx-XX".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }
}
