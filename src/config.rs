// ============================================================================
// Configuration
// ============================================================================
// Lue depuis l'environnement (et un fichier .env optionnel), puis la ligne
// de commande :
//
//   CLUBSTATS_SOURCE        URL ou répertoire des documents (assets/data)
//   CLUBSTATS_LOG_DIR       répertoire des logs
//   CLUBSTATS_TIMEOUT_SECS  timeout HTTP en secondes (10)
//
//   clubstats [--json] [SOURCE]
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::api::DataSource;

pub const DEFAULT_SOURCE: &str = "assets/data";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Mode de sortie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Tableau de bord interactif dans le terminal
    Terminal,
    /// Surface remplie, imprimée en JSON sur stdout
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: String,
    pub log_dir: PathBuf,
    pub timeout: Duration,
    pub output: OutputMode,
}

impl Config {
    /// Configuration du processus : .env, variables, arguments
    pub fn from_env() -> Result<Self> {
        // Un .env absent n'est pas une erreur
        let _ = dotenvy::dotenv();
        Self::from_parts(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    /// Construit la configuration à partir d'une table de variables et
    /// d'arguments (injectables pour les tests)
    pub fn from_parts<F, I>(lookup: F, args: I) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut source = lookup("CLUBSTATS_SOURCE").unwrap_or_else(|| DEFAULT_SOURCE.to_string());

        let log_dir = lookup("CLUBSTATS_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        let timeout_secs = match lookup("CLUBSTATS_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("CLUBSTATS_TIMEOUT_SECS invalide : {:?}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut output = OutputMode::Terminal;
        let mut positional = false;
        for arg in args {
            match arg.as_str() {
                "--json" => output = OutputMode::Json,
                flag if flag.starts_with("--") => bail!("Argument inconnu : {}", flag),
                location if !positional => {
                    source = location.to_string();
                    positional = true;
                }
                extra => bail!("Argument en trop : {}", extra),
            }
        }

        Ok(Self {
            source,
            log_dir,
            timeout: Duration::from_secs(timeout_secs),
            output,
        })
    }

    /// Source de données correspondant à la configuration
    pub fn data_source(&self) -> Result<DataSource> {
        DataSource::from_location(&self.source, self.timeout)
    }
}

/// ~/.local/share/clubstats/logs (Linux), ou ./logs si introuvable
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("clubstats").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)], args: &[&str]) -> Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_parts(|key| vars.get(key).cloned(), args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[], &[]).unwrap();
        assert_eq!(cfg.source, DEFAULT_SOURCE);
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.output, OutputMode::Terminal);
    }

    #[test]
    fn test_env_and_args() {
        let cfg = config(
            &[("CLUBSTATS_SOURCE", "https://example.org/data"), ("CLUBSTATS_TIMEOUT_SECS", "3"),
              ("CLUBSTATS_LOG_DIR", "/tmp/clubstats")],
            &["--json", "website/assets/data"],
        )
        .unwrap();

        assert_eq!(cfg.source, "website/assets/data");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
        assert_eq!(cfg.log_dir, PathBuf::from("/tmp/clubstats"));
        assert_eq!(cfg.output, OutputMode::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config(&[("CLUBSTATS_TIMEOUT_SECS", "soon")], &[]).is_err());
        assert!(config(&[], &["--verbose"]).is_err());
        assert!(config(&[], &["a", "b"]).is_err());
    }
}
