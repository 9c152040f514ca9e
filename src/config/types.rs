#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub summarizer: SummarizerConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub model: String,
    pub api_base: String,
    pub api_token: Option<String>,
    /// Connect timeout in seconds.
    pub connect_timeout: f64,
    /// Read timeout in seconds.
    pub read_timeout: f64,
}

#[derive(Debug, Clone)]
pub struct LimitsConfig {
    pub max_reviews: usize,
    pub max_comment_len: usize,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_reviews: default_max_reviews(),
            max_comment_len: default_max_comment_len(),
        }
    }
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_model() -> String {
    "eenzeenee/t5-base-korean-summarization".to_string()
}

pub(crate) fn default_api_base() -> String {
    "https://api-inference.huggingface.co".to_string()
}

pub(crate) fn default_connect_timeout() -> f64 {
    2.0
}

pub(crate) fn default_read_timeout() -> f64 {
    5.0
}

pub(crate) fn default_max_reviews() -> usize {
    50
}

pub(crate) fn default_max_comment_len() -> usize {
    500
}
