use std::path::PathBuf;

/// Runtime settings for a scoring run, read from `PRESSAI_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub releases_dir: PathBuf,
    pub output_path: PathBuf,
    pub companies_path: PathBuf,
    /// Worker threads used for batch scoring. Always at least 1.
    pub max_parallel: usize,
}
