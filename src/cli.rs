//! Command-line argument parsing for the headless runner
//!
//! Supports:
//! - Choosing the panel config (defaults to the user config file)
//! - An optional scripted event file
//! - Run length and frame rate
//! - JSON-lines output for piping into other tools

use clap::Parser;
use std::path::PathBuf;

/// Run a panel configuration headlessly against a scripted event file
#[derive(Parser, Debug)]
#[command(name = "panel-manager", version, about = "Headless panel orchestration runner")]
pub struct CliArgs {
    /// Panel configuration (YAML); defaults to the user config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scripted events (YAML)
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Seconds of real time to simulate
    #[arg(short, long, default_value_t = 10.0)]
    pub duration: f64,

    /// Frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// Validated run settings derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub config: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub duration: f64,
    pub fps: u32,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into run settings
    pub fn into_config(self) -> Result<RunConfig, String> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(format!("--duration must be non-negative, got {}", self.duration));
        }
        if self.fps == 0 || self.fps > 1000 {
            return Err(format!("--fps must be between 1 and 1000, got {}", self.fps));
        }

        Ok(RunConfig {
            config: self.config,
            script: self.script,
            duration: self.duration,
            fps: self.fps,
            json: self.json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["panel-manager"]);
        let config = args.into_config().unwrap();
        assert_eq!(config.duration, 10.0);
        assert_eq!(config.fps, 60);
        assert!(!config.json);
        assert!(config.config.is_none());
    }

    #[test]
    fn test_paths_and_flags() {
        let args = CliArgs::parse_from([
            "panel-manager",
            "--config",
            "panels.yaml",
            "-s",
            "script.yaml",
            "--json",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.config, Some(PathBuf::from("panels.yaml")));
        assert_eq!(config.script, Some(PathBuf::from("script.yaml")));
        assert!(config.json);
    }

    #[test]
    fn test_zero_fps_rejected() {
        let args = CliArgs::parse_from(["panel-manager", "--fps", "0"]);
        assert!(args.into_config().is_err());
    }
}
