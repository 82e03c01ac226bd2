//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for one headless session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and `prompts.ron`.
    pub data_dir: PathBuf,
    /// Game seed; drawn at random when unset.
    pub seed: Option<u64>,
    /// Weeks the autoplayer tries to complete.
    pub weeks: u32,
    pub session_id: Option<String>,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const DEFAULT_WEEKS: u32 = 20;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLINIC_DATA_DIR` - Content directory (default: `./data`)
    /// - `CLINIC_SEED` - Game seed (default: random)
    /// - `CLINIC_WEEKS` - Weeks to autoplay (default: 20)
    /// - `CLINIC_SESSION_ID` - Session identifier for logs (default: timestamp)
    /// - `CLINIC_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("CLINIC_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.seed = read_env::<u64>("CLINIC_SEED");

        if let Some(weeks) = read_env::<u32>("CLINIC_WEEKS") {
            config.weeks = weeks;
        }

        config.session_id = env::var("CLINIC_SESSION_ID").ok();
        config.log_dir = env::var("CLINIC_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: None,
            weeks: Self::DEFAULT_WEEKS,
            session_id: None,
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
