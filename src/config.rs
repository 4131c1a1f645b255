use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use roulette_picker::ShuffleSettings;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub shuffle: ShuffleConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SupabaseConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_table() -> String {
    "foods".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShuffleConfig {
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Fixed RNG seed, handy for demos and reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            step_delay_ms: default_step_delay_ms(),
            seed: None,
        }
    }
}

impl From<&ShuffleConfig> for ShuffleSettings {
    fn from(config: &ShuffleConfig) -> Self {
        Self {
            steps: config.steps,
            step_delay: Duration::from_millis(config.step_delay_ms),
            seed: config.seed,
        }
    }
}

fn default_steps() -> usize {
    roulette_picker::DEFAULT_STEPS
}

fn default_step_delay_ms() -> u64 {
    roulette_picker::DEFAULT_STEP_DELAY.as_millis() as u64
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy Supabase variables (SUPABASE_URL, NEXT_PUBLIC_SUPABASE_URL, ...)
    /// 2. Environment variables (ROULETTE__SUPABASE__URL, etc.)
    /// 3. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("supabase.url", "")?
            .set_default("supabase.anon_key", "")?
            .set_default("supabase.table", default_table())?
            .set_default("supabase.timeout_secs", default_timeout_secs())?
            .set_default("shuffle.steps", default_steps() as u64)?
            .set_default("shuffle.step_delay_ms", default_step_delay_ms())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, the defaults and the environment are enough to run
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ROULETTE")
                .separator("__")
                .try_parsing(true),
        );

        // Names used by the web front end and the connection script
        for (var, key) in [
            ("NEXT_PUBLIC_SUPABASE_URL", "supabase.url"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "supabase.anon_key"),
            ("SUPABASE_URL", "supabase.url"),
            ("SUPABASE_ANON_KEY", "supabase.anon_key"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.supabase.url.is_empty() {
            return Err(
                "Supabase url is not set (ROULETTE__SUPABASE__URL or SUPABASE_URL)".to_string(),
            );
        }
        if let Err(err) = url::Url::parse(&self.supabase.url) {
            return Err(format!("Supabase url is not a valid URL: {err}"));
        }
        if self.supabase.anon_key.trim().is_empty() {
            return Err(
                "Supabase anon key is not set (ROULETTE__SUPABASE__ANON_KEY or SUPABASE_ANON_KEY)"
                    .to_string(),
            );
        }
        if self.supabase.table.trim().is_empty() {
            return Err("Supabase table must not be empty".to_string());
        }
        if self.shuffle.steps < 1 {
            return Err("Shuffle steps must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn shuffle_settings(&self) -> ShuffleSettings {
        (&self.shuffle).into()
    }
}
