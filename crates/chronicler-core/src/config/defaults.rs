//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "chronicler.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "chronicler.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".chronicler.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ALT_CONFIG_FILE,
        ".chronicler.toml",
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r###"# Chronicler Configuration

changelog:
  file: CHANGELOG.md
  # keyword | emoji-flat | emoji-titled
  dialect: keyword
  # keyword | keep-a-changelog
  heading_style: keyword
  default_category: Changes
  # Every dialect reads only the text between these markers
  summary:
    start_marker: "## Summary by CodeRabbit"
    end_marker: "<sub>"

release:
  tag_env: RELEASE_TAG_NAME
  body_env: RELEASE_BODY
  tag_prefix: v
"###;
