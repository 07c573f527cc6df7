// ============================================================================
// Structure : GameStatistics
// ============================================================================
// Document games_stats.json : bilan de la saison + moyennes glissantes
//
// CONCEPTS RUST :
// 1. Serde avec valeurs par défaut : un champ manquant vaut 0
// 2. Séries parallèles : plusieurs Vec indexés par la même date
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::defaults::{align_lengths, lenient_numbers, lenient_strings, null_as_default, optional_numbers};

/// Compteurs agrégés de la saison
///
/// Tous en f64 : le JSON peut écrire `12` ou `12.0`, les deux sont acceptés.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_games: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wins: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub draws: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub losses: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_goals_for: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_goals_against: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal_difference: f64,
    /// Pourcentage de victoires (0-100)
    #[serde(default, deserialize_with = "null_as_default")]
    pub win_percentage: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_goals_for: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_goals_against: f64,
}

/// Moyennes glissantes (fenêtre de 5 matchs), alignées par date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollingAverageSeries {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub dates: Vec<String>,
    #[serde(default, deserialize_with = "lenient_numbers")]
    pub goals_for: Vec<f64>,
    #[serde(default, deserialize_with = "lenient_numbers")]
    pub goals_against: Vec<f64>,
    /// Différence de buts par match (non glissante), optionnelle
    #[serde(default, deserialize_with = "optional_numbers", skip_serializing_if = "Option::is_none")]
    pub goal_difference: Option<Vec<f64>>,
}

impl RollingAverageSeries {
    /// Nombre de points de la série
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Ramène toutes les séries à la même longueur
    pub(crate) fn align(&mut self) {
        let mut lengths = vec![self.dates.len(), self.goals_for.len(), self.goals_against.len()];
        if let Some(diff) = self.goal_difference.as_ref().filter(|d| !d.is_empty()) {
            lengths.push(diff.len());
        }
        let len = align_lengths(&lengths);

        if lengths.iter().any(|&l| l != len) {
            warn!(?lengths, aligned = len, "Rolling average series have different lengths, truncating");
        }

        self.dates.truncate(len);
        self.goals_for.truncate(len);
        self.goals_against.truncate(len);
        match self.goal_difference.as_mut() {
            Some(diff) if !diff.is_empty() => diff.truncate(len),
            _ => self.goal_difference = None,
        }
    }
}

/// Document complet games_stats.json
///
/// Le champ "games" (liste des matchs bruts) n'est pas utilisé par le
/// tableau de bord ; serde l'ignore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStatistics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub statistics: SeasonSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rolling_average_data: RollingAverageSeries,
}

impl GameStatistics {
    pub(crate) fn normalize(&mut self) {
        self.rolling_average_data.align();
    }
}
