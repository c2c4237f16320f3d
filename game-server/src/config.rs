use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub words_file: String,
    pub word_length: usize,
    pub max_guesses: u32,
    pub session_timeout_minutes: u64,
    pub cleanup_interval_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("Invalid PORT"),
            words_file: env::var("WORDS_FILE").unwrap_or_else(|_| "./words/common.txt".to_string()),
            word_length: env::var("WORD_LENGTH")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .expect("Invalid WORD_LENGTH"),
            max_guesses: env::var("MAX_GUESSES")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .expect("Invalid MAX_GUESSES"),
            session_timeout_minutes: env::var("SESSION_TIMEOUT_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("Invalid SESSION_TIMEOUT_MINUTES"),
            cleanup_interval_seconds: env::var("CLEANUP_INTERVAL_SECONDS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("Invalid CLEANUP_INTERVAL_SECONDS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
