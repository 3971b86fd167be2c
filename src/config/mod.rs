// Sub-modules
mod core;
mod loader;
mod thresholds;

pub use self::core::PowermapConfig;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{AuditConfig, RankingConfig};

/// Contents written by `powermap init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Powermap Configuration

[ranking]
# Probability of following a command edge instead of teleporting, in (0, 1)
damping = 0.85
# Stop when the L1 change between iterations drops below this
tolerance = 1e-6
max_iterations = 100
# Entities scoring above this are highlighted
highlight_threshold = 0.08

[audit]
# Mean absolute deviation (percentage points) below which a series reads as natural
consistent_below = 1.0
# Deviation above which a series is flagged as anomalous
anomalous_above = 3.0
# Smaller series are audited with a warning
min_reliable_observations = 100
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.ranking(), RankingConfig::default());
        assert_eq!(config.audit(), AuditConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert!(config.ranking.is_none());
        assert_eq!(config.ranking().damping, 0.85);
        assert_eq!(config.audit().anomalous_above, 3.0);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let toml_content = r#"
[audit]
anomalous_above = 2.0
"#;
        let config = parse_and_validate_config(toml_content).unwrap();
        let audit = config.audit();
        assert_eq!(audit.anomalous_above, 2.0);
        assert_eq!(audit.consistent_below, 1.0);
        assert_eq!(audit.min_reliable_observations, 100);
    }

    #[test]
    fn test_parse_and_validate_config_invalid_toml() {
        let result = parse_and_validate_config("invalid toml [[ content");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to parse"));
    }

    #[test]
    fn test_invalid_damping_replaced_with_defaults() {
        let toml_content = r#"
[ranking]
damping = 1.5
max_iterations = 7
"#;
        let config = parse_and_validate_config(toml_content).unwrap();
        assert_eq!(config.ranking(), RankingConfig::default());
    }

    #[test]
    fn test_inverted_audit_thresholds_replaced_with_defaults() {
        let toml_content = r#"
[audit]
consistent_below = 4.0
anomalous_above = 2.0
"#;
        let config = parse_and_validate_config(toml_content).unwrap();
        assert_eq!(config.audit(), AuditConfig::default());
    }

    #[test]
    fn test_directory_ancestors_walks_up() {
        let start = std::path::PathBuf::from("/a/b/c");
        let dirs: Vec<_> = directory_ancestors(start, 10).collect();
        assert_eq!(dirs.len(), 4);
        assert_eq!(dirs[0], std::path::PathBuf::from("/a/b/c"));
        assert_eq!(dirs[3], std::path::PathBuf::from("/"));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let start = std::path::PathBuf::from("/a/b/c");
        assert_eq!(directory_ancestors(start, 2).count(), 2);
    }

    #[test]
    fn test_discover_config_finds_file_in_parent() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[ranking]\nmax_iterations = 42\n",
        )
        .unwrap();
        let nested = temp.path().join("nested").join("deeper");
        std::fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested).unwrap();
        assert_eq!(config.ranking().max_iterations, 42);
    }

    #[test]
    fn test_load_config_from_missing_file_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = load_config_from(&temp.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
