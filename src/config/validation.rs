use crate::config::types::{Config, Provider};
use crate::ConfigError;

/// Validates a configuration
///
/// # Checks
///
/// - All timeouts are non-zero
/// - Content caps and the priority-URL cap are non-zero
/// - The user agent is non-empty
/// - The local provider has a base URL; the cloud provider has an HTTP(S)
///   endpoint
/// - Temperature is within the usual sampling range
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError::Validation)` - First failed check
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetch.page_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.page-timeout-secs must be greater than 0".to_string(),
        ));
    }

    if config.fetch.metadata_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.metadata-timeout-secs must be greater than 0".to_string(),
        ));
    }

    if config.fetch.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fetch.user-agent must not be empty".to_string(),
        ));
    }

    if config.generator.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "generator.timeout-secs must be greater than 0".to_string(),
        ));
    }

    if config.generator.max_tokens == 0 {
        return Err(ConfigError::Validation(
            "generator.max-tokens must be greater than 0".to_string(),
        ));
    }

    if !(0.0..=2.0).contains(&config.generator.temperature) {
        return Err(ConfigError::Validation(format!(
            "generator.temperature must be between 0.0 and 2.0, got {}",
            config.generator.temperature
        )));
    }

    match config.generator.provider {
        Provider::Local => {
            if config.generator.base_url.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "generator.base-url must not be empty for the local provider".to_string(),
                ));
            }
        }
        Provider::Cloud => {
            let endpoint = config.generator.endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::Validation(
                    "generator.endpoint must be set for the cloud provider".to_string(),
                ));
            }
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "generator.endpoint must be an HTTP(S) URL, got: {}",
                    endpoint
                )));
            }
        }
    }

    if config.selection.max_priority_urls == 0 {
        return Err(ConfigError::Validation(
            "selection.max-priority-urls must be greater than 0".to_string(),
        ));
    }

    if config.selection.main_content_chars == 0
        || config.selection.page_content_chars == 0
        || config.selection.metadata_content_chars == 0
    {
        return Err(ConfigError::Validation(
            "selection content caps must be greater than 0".to_string(),
        ));
    }

    if config.output.directory.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.directory must not be empty".to_string(),
        ));
    }

    if config.output.checkpoint_file.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.checkpoint-file must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Config;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_page_timeout_rejected() {
        let mut config = Config::default();
        config.fetch.page_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = Config::default();
        config.fetch.user_agent = "  ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_cloud_without_endpoint_rejected() {
        let mut config = Config::default();
        config.generator.provider = Provider::Cloud;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_cloud_with_endpoint_accepted() {
        let mut config = Config::default();
        config.generator.provider = Provider::Cloud;
        config.generator.endpoint = "https://api.example.com/v1/chat/completions".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_cloud_with_non_http_endpoint_rejected() {
        let mut config = Config::default();
        config.generator.provider = Provider::Cloud;
        config.generator.endpoint = "ftp://api.example.com".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_max_priority_urls_rejected() {
        let mut config = Config::default();
        config.selection.max_priority_urls = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let mut config = Config::default();
        config.generator.temperature = 3.5;
        assert!(validate(&config).is_err());
    }
}
