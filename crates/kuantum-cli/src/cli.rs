use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::{self, Config};

#[derive(Debug, Parser)]
#[command(name = "kuantum")]
#[command(about = "Omega Sector quantum data vault simulator.", version)]
pub struct Cli {
    /// Seed the object-kind generator for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read configuration from this file instead of ~/.kuantum/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Layer the config file, then `KUANTUM_*` variables, then these flags.
    /// A missing or rejected file falls back to defaults.
    pub fn resolve_config(&self) -> Config {
        let path = self.config.clone().unwrap_or_else(config::config_path);
        let mut cfg = match config::load_from(&path) {
            Ok(Some(cfg)) => {
                debug!(path = %path.display(), "config loaded");
                cfg
            }
            Ok(None) => Config::default(),
            Err(e) => {
                warn!(error = %e, "config rejected");
                eprintln!("{}: {} – using defaults", "Config error".red(), e);
                Config::default()
            }
        };
        config::apply_env_overrides(&mut cfg);
        self.apply_to(&mut cfg);
        cfg
    }

    /// Flags take precedence over both the config file and the environment.
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if self.no_color {
            cfg.color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["kuantum"]).expect("parse");
        let mut cfg = Config::default();
        cli.apply_to(&mut cfg);
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["kuantum", "--seed", "42", "--no-color"]).expect("parse");
        let mut cfg = Config {
            seed: Some(1),
            ..Config::default()
        };
        cli.apply_to(&mut cfg);
        assert_eq!(cfg.seed, Some(42));
        assert!(!cfg.color);
    }

    #[test]
    fn config_path_flag_is_captured() {
        let cli = Cli::try_parse_from(["kuantum", "--config", "/tmp/vault.toml"]).expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/vault.toml")));
    }

    #[test]
    fn non_numeric_seed_is_rejected() {
        assert!(Cli::try_parse_from(["kuantum", "--seed", "abc"]).is_err());
    }

    #[test]
    fn resolve_config_layers_file_then_env_then_flags() {
        let _env = config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed = 1\nmax_consecutive_faults = 4\n").expect("write config");
        let path_arg = path.to_string_lossy().into_owned();

        let file_only = Cli::try_parse_from(["kuantum", "--config", &path_arg]).expect("parse");
        let with_flag =
            Cli::try_parse_from(["kuantum", "--config", &path_arg, "--seed", "3"]).expect("parse");

        assert_eq!(file_only.resolve_config().seed, Some(1));

        // SAFETY: env-mutating tests hold ENV_LOCK.
        unsafe { std::env::set_var("KUANTUM_SEED", "2") };
        let from_env = file_only.resolve_config();
        let from_flag = with_flag.resolve_config();
        // SAFETY: as above.
        unsafe { std::env::remove_var("KUANTUM_SEED") };

        assert_eq!(from_env.seed, Some(2));
        assert_eq!(from_env.max_consecutive_faults, 4);
        assert_eq!(from_flag.seed, Some(3));
    }

    #[test]
    fn resolve_config_falls_back_to_defaults_on_bad_file() {
        let _env = config::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "color = \"loud\"\n").expect("write config");
        let path_arg = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["kuantum", "--config", &path_arg, "--no-color"]).expect("parse");
        let cfg = cli.resolve_config();
        assert!(!cfg.color);
        assert_eq!(cfg.max_consecutive_faults, Config::default().max_consecutive_faults);
    }
}
