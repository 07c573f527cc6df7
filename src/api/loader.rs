// ============================================================================
// Chargeur de données
// ============================================================================
// Récupère les quatre documents JSON du club, en parallèle
//
// CONCEPTS RUST :
// 1. async/await : les quatre requêtes sont des Futures
// 2. tokio::try_join! : attend toutes les Futures, échoue dès la première
//    erreur (tout ou rien)
// 3. Enum d'erreur : chaque variante garde le chemin de la ressource
// 4. Generics + DeserializeOwned : une seule fonction pour tous les schémas
// ============================================================================

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::models::{ColorDocument, DataSnapshot, GameStatistics, HistoricalPlayerRecords, ParticipationStatistics};

/// Chemins des documents, relatifs à la source
pub const COLORS_PATH: &str = "colors.json";
pub const GAMES_STATS_PATH: &str = "games_stats.json";
pub const PLAYER_PARTICIPATION_PATH: &str = "player_participation.json";
pub const HISTORICAL_PLAYERS_PATH: &str = "historical_players.json";

/// Tous les documents requis
pub const REQUIRED_RESOURCES: [&str; 4] = [
    COLORS_PATH,
    GAMES_STATS_PATH,
    PLAYER_PARTICIPATION_PATH,
    HISTORICAL_PLAYERS_PATH,
];

// ============================================================================
// Erreur de chargement
// ============================================================================

/// Échec de chargement d'une ressource
///
/// Au niveau du contrat il n'y a qu'une seule sorte d'échec : la ressource
/// n'a pas pu être obtenue. Les variantes servent aux logs.
#[derive(Debug)]
pub enum LoadError {
    /// Réponse HTTP reçue mais pas OK (404, 500...)
    Status { path: String, status: StatusCode },
    /// La requête n'a pas pu aboutir (réseau, timeout, corps illisible)
    Transport { path: String, source: reqwest::Error },
    /// Lecture du fichier local impossible
    Io { path: String, source: std::io::Error },
    /// Document reçu mais JSON invalide
    Parse { path: String, source: serde_json::Error },
}

impl LoadError {
    /// Chemin de la ressource en cause
    pub fn path(&self) -> &str {
        match self {
            LoadError::Status { path, .. }
            | LoadError::Transport { path, .. }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }

    /// Statut HTTP, si une réponse a été reçue
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LoadError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Status { path, status } => {
                write!(f, "Échec du chargement de {} : HTTP {}", path, status)
            }
            LoadError::Transport { path, source } => {
                write!(f, "Échec de la requête pour {} : {}", path, source)
            }
            LoadError::Io { path, source } => {
                write!(f, "Échec de la lecture de {} : {}", path, source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "JSON invalide dans {} : {}", path, source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Status { .. } => None,
            LoadError::Transport { source, .. } => Some(source),
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Source des données
// ============================================================================

/// D'où viennent les documents
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Site publié : GET {base_url}/{path}
    Http { client: reqwest::Client, base_url: String },
    /// Répertoire local (ex: website/assets/data)
    Directory(PathBuf),
}

impl DataSource {
    /// Source HTTP avec un client configuré (timeout, User-Agent)
    pub fn http(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("clubstats/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Échec de la création du client HTTP")?;

        Ok(DataSource::Http {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        DataSource::Directory(path.into())
    }

    /// Choisit la source selon la forme de l'emplacement
    ///
    /// "http://..." ou "https://..." -> HTTP, sinon répertoire local.
    pub fn from_location(location: &str, timeout: Duration) -> anyhow::Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::http(location, timeout)
        } else {
            Ok(Self::directory(location))
        }
    }

    /// Emplacement complet d'une ressource (URL ou chemin)
    pub fn locate(&self, path: &str) -> String {
        match self {
            DataSource::Http { base_url, .. } => format!("{}/{}", base_url, path),
            DataSource::Directory(dir) => dir.join(path).display().to_string(),
        }
    }

    /// Description courte pour les logs et l'en-tête
    pub fn describe(&self) -> String {
        match self {
            DataSource::Http { base_url, .. } => base_url.clone(),
            DataSource::Directory(dir) => dir.display().to_string(),
        }
    }
}

// ============================================================================
// Chargement
// ============================================================================

/// Récupère et désérialise un document
///
/// CONCEPT RUST : #[instrument]
/// - Ajoute un span avec le chemin ; tous les logs internes l'héritent
#[instrument(skip(source))]
pub async fn fetch_json<T: DeserializeOwned>(source: &DataSource, path: &str) -> Result<T, LoadError> {
    let location = source.locate(path);
    debug!(location = %location, "Fetching resource");

    let bytes = match source {
        DataSource::Http { client, .. } => {
            let response = client
                .get(&location)
                .send()
                .await
                .map_err(|e| LoadError::Transport { path: path.to_string(), source: e })?;

            let status = response.status();
            debug!(status = %status, "Received HTTP response");

            if !status.is_success() {
                return Err(LoadError::Status { path: path.to_string(), status });
            }

            response
                .bytes()
                .await
                .map_err(|e| LoadError::Transport { path: path.to_string(), source: e })?
                .to_vec()
        }
        DataSource::Directory(dir) => tokio::fs::read(dir.join(path))
            .await
            .map_err(|e| LoadError::Io { path: path.to_string(), source: e })?,
    };

    let document = serde_json::from_slice(&bytes)
        .map_err(|e| LoadError::Parse { path: path.to_string(), source: e })?;

    debug!(bytes = bytes.len(), "Resource parsed");
    Ok(document)
}

/// Charge les quatre documents en parallèle
///
/// Réussit seulement si tous réussissent ; la première erreur annule
/// l'attente des autres et aucun état partiel n'est retourné.
pub async fn try_load_all(source: &DataSource) -> Result<DataSnapshot, LoadError> {
    info!(source = %source.describe(), "Loading all data");

    let (colors, games, participation, historical) = tokio::try_join!(
        fetch_json::<ColorDocument>(source, COLORS_PATH),
        fetch_json::<GameStatistics>(source, GAMES_STATS_PATH),
        fetch_json::<ParticipationStatistics>(source, PLAYER_PARTICIPATION_PATH),
        fetch_json::<HistoricalPlayerRecords>(source, HISTORICAL_PLAYERS_PATH),
    )?;

    let snapshot = DataSnapshot::new(Some(&colors), games, participation, historical);
    info!(
        rolling_points = snapshot.games().rolling_average_data.len(),
        seasons = snapshot.historical().data.len(),
        "All data loaded successfully"
    );
    Ok(snapshot)
}

/// Variante "drapeau" : log la cause et retourne None en cas d'échec
pub async fn load_all(source: &DataSource) -> Option<DataSnapshot> {
    match try_load_all(source).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            error!(path = %e.path(), status = ?e.status(), error = %e, "Error loading data");
            None
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
