// SPDX-License-Identifier: MPL-2.0
use iced_wheel::config::{self, Config, GeneralConfig, WheelConfig, DEFAULT_SPIN_DURATION_MS};
use iced_wheel::i18n::fluent::I18n;
use iced_wheel::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_config_round_trip_through_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        wheel: WheelConfig {
            spin_duration_ms: Some(2500),
        },
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded, config);
    assert_eq!(loaded.wheel.spin_duration().as_millis(), 2500);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        wheel: WheelConfig::default(),
    };
    config::save_to_path(&initial_config, &config_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config =
        config::load_from_path(&config_path).expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
        wheel: WheelConfig::default(),
    };
    config::save_to_path(&french_config, &config_path)
        .expect("Failed to write french config file");

    let loaded_french_config =
        config::load_from_path(&config_path).expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        wheel: WheelConfig::default(),
    };

    let i18n = I18n::new(Some("fr".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    std::fs::write(&config_path, "this is not [ valid toml").expect("Failed to write file");

    assert!(config::load_from_path(&config_path).is_err());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_default_spin_duration_is_four_seconds() {
    assert_eq!(DEFAULT_SPIN_DURATION_MS, 4000);
    assert_eq!(
        Config::default().wheel.spin_duration().as_millis() as u64,
        DEFAULT_SPIN_DURATION_MS
    );
}

#[test]
fn test_i18n_dir_override_loads_custom_bundles() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("en-US.ftl"),
        "window-title = Custom Wheel\n",
    )
    .expect("Failed to write ftl file");

    let i18n = I18n::new(
        Some("en-US".to_string()),
        Some(dir.path().to_string_lossy().into_owned()),
        &Config::default(),
    );

    assert_eq!(i18n.tr("window-title"), "Custom Wheel");
    // Keys outside the custom bundle are reported missing, proving the
    // embedded assets were not silently merged in.
    assert!(i18n.tr("wheel-spin-button").starts_with("MISSING:"));

    dir.close().expect("Failed to close temporary directory");
}
