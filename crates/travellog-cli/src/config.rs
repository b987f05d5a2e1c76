use crate::args::CliArgs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "travellog.toml";

/// Resolved CLI settings. File names are relative to `data_dir` unless
/// absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: PathBuf,
    pub prefs_file: PathBuf,
    pub records_file: PathBuf,
    pub catalog_file: PathBuf,
    pub borders_dir: PathBuf,
    pub homeland: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            prefs_file: PathBuf::from("prefs.json"),
            records_file: PathBuf::from("records.json"),
            catalog_file: PathBuf::from("countries.json.gz"),
            borders_dir: PathBuf::from("borders"),
            homeland: None,
        }
    }
}

/// Flag values that override the file and environment layers.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefs_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    homeland: Option<String>,
}

impl Config {
    /// Defaults, then `travellog.toml`, then `TRAVELLOG_*` variables, then
    /// command-line flags.
    pub fn load(args: &CliArgs) -> Result<Self, figment::Error> {
        let file = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let overrides = Overrides {
            data_dir: args.data_dir.clone(),
            prefs_file: args.prefs_file.clone(),
            records_file: args.records_file.clone(),
            homeland: args.homeland.clone(),
        };
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("TRAVELLOG_"))
            .merge(Serialized::defaults(overrides))
            .extract()
    }

    pub fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    pub fn prefs_path(&self) -> PathBuf {
        self.resolve(&self.prefs_file)
    }

    pub fn records_path(&self) -> PathBuf {
        self.resolve(&self.records_file)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve(&self.catalog_file)
    }

    pub fn borders_path(&self) -> PathBuf {
        self.resolve(&self.borders_dir)
    }
}
