//! Handler functions for `slugline config {path,init,export}`.

use std::path::PathBuf;

use slugline_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::SluglineConfig;

/// Handle a config subcommand.
///
/// Receives the raw `--config` path rather than a loaded config because
/// `path` and `init` must work before any config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
        ConfigAction::Export { docker_env } => {
            let config = SluglineConfig::load(config_path)?;
            for line in export_lines(&config, docker_env)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = SluglineConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;

    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `slugline config init` to create it)");
    }
    Ok(())
}

/// Write a default config file and return where it went.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => SluglineConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = SluglineConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    Ok(path)
}

/// Render the config as `KEY=value` lines, or `--env KEY=value` for Docker.
pub fn export_lines(config: &SluglineConfig, docker_env: bool) -> Result<Vec<String>> {
    Ok(config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| {
            if docker_env {
                format!("--env {key}={value}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_init_writes_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("nested").join("config.toml");

        let written = cmd_config_init(Some(target.to_str().unwrap()), false).unwrap();
        assert_eq!(written, target);

        let parsed: SluglineConfig =
            toml::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(parsed.project_name, "slugline");
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("config.toml");
        std::fs::write(&target, "project_name = \"mine\"").unwrap();

        let err = cmd_config_init(Some(target.to_str().unwrap()), false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        cmd_config_init(Some(target.to_str().unwrap()), true).unwrap();
        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.contains("project_name = \"slugline\""));
    }

    #[test]
    fn test_export_lines() {
        let config = SluglineConfig::default();
        let plain = export_lines(&config, false).unwrap();
        assert!(plain.contains(&"SLUGLINE_PROJECT_NAME=slugline".to_string()));

        let docker = export_lines(&config, true).unwrap();
        assert!(docker.contains(&"--env SLUGLINE_CONTENT_EXTENSION=md".to_string()));
    }

    #[test]
    fn test_handle_config_path() {
        assert!(handle_config_command(Some("/tmp/slugline.toml"), ConfigAction::Path).is_ok());
    }
}
