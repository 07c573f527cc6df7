// ============================================================================
// Module : models
// ============================================================================
// Schémas des documents JSON publiés par le club, et le snapshot qui les
// regroupe une fois chargés
// ============================================================================

mod defaults;            // Valeurs par défaut à la désérialisation
pub mod colors;          // colors.json
pub mod games;           // games_stats.json
pub mod participation;   // player_participation.json
pub mod historical;      // historical_players.json
pub mod snapshot;        // Snapshot immuable des quatre documents

// Re-export des structures principales pour simplifier les imports
pub use colors::{with_alpha, ColorDocument, ColorTheme, HolidayPalette};
pub use games::{GameStatistics, RollingAverageSeries, SeasonSummary};
pub use historical::{HistoricalPlayerRecords, SeasonRecord};
pub use participation::{
    MonthlyTrainingSeries, ParticipationStatistics, ParticipationSummary, TrainingAttendanceSeries,
};
pub use snapshot::DataSnapshot;
