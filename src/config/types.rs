use serde::Deserialize;

/// Main configuration structure for Sitescope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FetchConfig {
    /// Timeout for page fetches, in seconds
    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Timeout for metadata-file and sitemap fetches, in seconds
    #[serde(default = "default_metadata_timeout")]
    pub metadata_timeout_secs: u64,

    /// User-agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Which generation backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Local model server over loopback HTTP
    Local,
    /// Hosted cloud inference endpoint
    Cloud,
}

/// Text-generation backend configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Backend selection
    #[serde(default = "default_provider")]
    pub provider: Provider,

    /// Base URL of the local model server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Full URL of the cloud inference endpoint (cloud provider only)
    #[serde(default)]
    pub endpoint: String,

    /// Model identifier passed to the backend
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the cloud API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Timeout for a generation call, in seconds
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens requested from the backend
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

/// Priority selection and content caps
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SelectionConfig {
    /// Overall cap on priority URLs selected per site
    #[serde(default = "default_max_priority_urls")]
    pub max_priority_urls: usize,

    /// Character cap on extracted main-page content
    #[serde(default = "default_main_content_chars")]
    pub main_content_chars: usize,

    /// Character cap on extracted content per priority page
    #[serde(default = "default_page_content_chars")]
    pub page_content_chars: usize,

    /// Character cap on kept metadata-file content
    #[serde(default = "default_metadata_content_chars")]
    pub metadata_content_chars: usize,
}

/// Output locations
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for per-site results and the batch summary
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Checkpoint file name, relative to the output directory
    #[serde(default = "default_checkpoint_file")]
    pub checkpoint_file: String,
}

fn default_page_timeout() -> u64 {
    15
}

fn default_metadata_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; sitescope/0.1)".to_string()
}

fn default_provider() -> Provider {
    Provider::Local
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_api_key_env() -> String {
    "SITESCOPE_API_KEY".to_string()
}

fn default_generation_timeout() -> u64 {
    120
}

fn default_max_tokens() -> u32 {
    3000
}

fn default_temperature() -> f64 {
    0.1
}

fn default_max_priority_urls() -> usize {
    crate::classify::DEFAULT_MAX_PRIORITY_URLS
}

fn default_main_content_chars() -> usize {
    8000
}

fn default_page_content_chars() -> usize {
    4000
}

fn default_metadata_content_chars() -> usize {
    2000
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_checkpoint_file() -> String {
    "sitescope-checkpoint.json".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: default_page_timeout(),
            metadata_timeout_secs: default_metadata_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            endpoint: String::new(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_generation_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_priority_urls: default_max_priority_urls(),
            main_content_chars: default_main_content_chars(),
            page_content_chars: default_page_content_chars(),
            metadata_content_chars: default_metadata_content_chars(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            checkpoint_file: default_checkpoint_file(),
        }
    }
}
