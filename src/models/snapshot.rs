// ============================================================================
// Structure : DataSnapshot
// ============================================================================
// Toutes les données chargées pour une session, en lecture seule
//
// CONCEPT RUST : Immutabilité par construction
// - Les champs sont privés, exposés via des accesseurs &T
// - Aucune méthode &mut self : un rechargement crée un nouveau snapshot
// ============================================================================

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::models::{ColorDocument, ColorTheme, GameStatistics, HistoricalPlayerRecords, ParticipationStatistics};

/// Snapshot immuable des quatre documents
#[derive(Debug, Clone, Serialize)]
pub struct DataSnapshot {
    colors: ColorTheme,
    games: GameStatistics,
    participation: ParticipationStatistics,
    historical: HistoricalPlayerRecords,
    loaded_at: DateTime<Local>,
}

impl DataSnapshot {
    /// Assemble le snapshot et normalise les séries parallèles
    pub fn new(
        colors: Option<&ColorDocument>,
        mut games: GameStatistics,
        mut participation: ParticipationStatistics,
        historical: HistoricalPlayerRecords,
    ) -> Self {
        games.normalize();
        participation.normalize();

        Self {
            colors: ColorTheme::from_document(colors),
            games,
            participation,
            historical,
            loaded_at: Local::now(),
        }
    }

    /// Thème de couleurs entièrement résolu (jamais d'échec)
    pub fn colors(&self) -> &ColorTheme {
        &self.colors
    }

    pub fn games(&self) -> &GameStatistics {
        &self.games
    }

    pub fn participation(&self) -> &ParticipationStatistics {
        &self.participation
    }

    pub fn historical(&self) -> &HistoricalPlayerRecords {
        &self.historical
    }

    /// Horodatage du chargement
    pub fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RollingAverageSeries;

    #[test]
    fn test_snapshot_normalizes_series() {
        let games = GameStatistics {
            rolling_average_data: RollingAverageSeries {
                dates: vec!["a".into(), "b".into()],
                goals_for: vec![1.0, 2.0, 3.0],
                goals_against: vec![1.0, 2.0],
                goal_difference: None,
            },
            ..Default::default()
        };

        let snapshot = DataSnapshot::new(
            None,
            games,
            ParticipationStatistics::default(),
            HistoricalPlayerRecords::default(),
        );

        assert_eq!(snapshot.games().rolling_average_data.goals_for.len(), 2);
        assert_eq!(snapshot.colors(), &ColorTheme::default());
    }
}
