mod types;

pub use types::*;

use std::env;
use std::str::FromStr;
use tracing::debug;

/// Reads the process environment into a [`Config`]. `.env` loading happens in
/// `main` before this runs, so plain `env::var` sees both sources.
///
/// Malformed numeric values fall back to their defaults rather than failing
/// startup.
pub fn load() -> Config {
    let config = Config {
        server: ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port: env_parse("PORT", default_port()),
            logs: LogsConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level()),
            },
        },
        summarizer: SummarizerConfig {
            model: env::var("HF_MODEL").unwrap_or_else(|_| default_model()),
            api_base: env::var("HF_API_BASE").unwrap_or_else(|_| default_api_base()),
            api_token: env::var("HF_API_TOKEN").ok().filter(|t| !t.is_empty()),
            connect_timeout: env_parse("HTTP_CONNECT_TIMEOUT", default_connect_timeout()),
            read_timeout: env_parse("HTTP_READ_TIMEOUT", default_read_timeout()),
        },
        limits: LimitsConfig {
            max_reviews: env_parse("MAX_REVIEWS", default_max_reviews()),
            max_comment_len: env_parse("MAX_COMMENT_LEN", default_max_comment_len()),
        },
    };

    debug!(model = %config.summarizer.model, "Configuration loaded");

    config
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_missing_environment() {
        let config = Config {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                logs: LogsConfig::default(),
            },
            summarizer: SummarizerConfig {
                model: default_model(),
                api_base: default_api_base(),
                api_token: None,
                connect_timeout: default_connect_timeout(),
                read_timeout: default_read_timeout(),
            },
            limits: LimitsConfig::default(),
        };

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.limits.max_reviews, 50);
        assert_eq!(config.limits.max_comment_len, 500);
        assert_eq!(config.summarizer.model, "eenzeenee/t5-base-korean-summarization");
    }

    #[test]
    fn env_parse_falls_back_on_garbage() {
        std::env::set_var("REVIEW_INSIGHT_TEST_PORT", "not-a-number");
        let port: u16 = env_parse("REVIEW_INSIGHT_TEST_PORT", 8080);
        assert_eq!(port, 8080);
        std::env::remove_var("REVIEW_INSIGHT_TEST_PORT");
    }
}
