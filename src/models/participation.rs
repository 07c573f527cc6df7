// ============================================================================
// Structure : ParticipationStatistics
// ============================================================================
// Document player_participation.json : présence aux entraînements et matchs
// ============================================================================

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::defaults::{align_lengths, lenient_numbers, lenient_strings, null_as_default, optional_numbers};

/// Compteurs globaux de participation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipationSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub unique_players: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_training_sessions: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_game_sessions: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_events: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_confirmed: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_rejected: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_absence: f64,
    /// Taux de réponse en pourcentage
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_rate: f64,
    /// Taux de présence en pourcentage
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall_attendance_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_attendees_per_training: f64,
}

/// Participants par entraînement, dans l'ordre chronologique
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingAttendanceSeries {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub dates: Vec<String>,
    #[serde(default, deserialize_with = "lenient_numbers")]
    pub attendees: Vec<f64>,
    /// Moyenne glissante sur 6 entraînements (absente dans les anciens exports)
    #[serde(default, deserialize_with = "optional_numbers", skip_serializing_if = "Option::is_none")]
    pub rolling_avg: Option<Vec<f64>>,
}

impl TrainingAttendanceSeries {
    pub(crate) fn align(&mut self) {
        let mut lengths = vec![self.dates.len(), self.attendees.len()];
        if let Some(rolling) = self.rolling_avg.as_ref().filter(|r| !r.is_empty()) {
            lengths.push(rolling.len());
        }
        let len = align_lengths(&lengths);

        if lengths.iter().any(|&l| l != len) {
            warn!(?lengths, aligned = len, "Training attendance series have different lengths, truncating");
        }

        self.dates.truncate(len);
        self.attendees.truncate(len);
        match self.rolling_avg.as_mut() {
            Some(rolling) if !rolling.is_empty() => rolling.truncate(len),
            _ => self.rolling_avg = None,
        }
    }
}

/// Statistiques d'entraînement agrégées par mois
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrainingSeries {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub months: Vec<String>,
    #[serde(default, deserialize_with = "lenient_numbers")]
    pub training_counts: Vec<f64>,
    #[serde(default, deserialize_with = "lenient_numbers")]
    pub avg_attendees: Vec<f64>,
}

impl MonthlyTrainingSeries {
    pub(crate) fn align(&mut self) {
        let lengths = [self.months.len(), self.training_counts.len(), self.avg_attendees.len()];
        let len = align_lengths(&lengths);

        if lengths.iter().any(|&l| l != len) {
            warn!(?lengths, aligned = len, "Monthly training series have different lengths, truncating");
        }

        self.months.truncate(len);
        self.training_counts.truncate(len);
        self.avg_attendees.truncate(len);
    }
}

/// Document complet player_participation.json
///
/// "player_stats" (détail anonymisé par joueur) est ignoré.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipationStatistics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall_statistics: ParticipationSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub training_attendance_over_time: TrainingAttendanceSeries,
    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_training_stats: MonthlyTrainingSeries,
}

impl ParticipationStatistics {
    pub(crate) fn normalize(&mut self) {
        self.training_attendance_over_time.align();
        self.monthly_training_stats.align();
    }
}
