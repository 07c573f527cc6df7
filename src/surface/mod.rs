// ============================================================================
// Module : surface
// ============================================================================
// Surface d'affichage : les zones nommées dans lesquelles le pipeline écrit
// du texte ou monte des graphiques
//
// CONCEPT RUST : Trait comme capacité
// - Le pipeline ne connaît que DisplaySurface
// - Le terminal, l'export JSON et les tests fournissent chacun leur surface
// ============================================================================

pub mod memory; // Surface en mémoire (TUI, export, tests)

pub use memory::MemorySurface;

use crate::charts::ChartSpec;

/// Capacité d'affichage utilisée par le pipeline
///
/// Une zone absente n'est jamais une erreur : l'écriture est simplement
/// ignorée et la méthode retourne false.
pub trait DisplaySurface {
    /// Écrit un texte dans une zone ; false si la zone n'existe pas
    fn set_text(&mut self, slot: &str, text: &str) -> bool;

    /// Indique si un point de montage de graphique existe
    fn has_mount(&self, mount: &str) -> bool;

    /// Monte un graphique ; false si le point de montage n'existe pas
    fn mount_chart(&mut self, mount: &str, spec: ChartSpec) -> bool;

    /// Affiche l'unique message d'erreur destiné à l'utilisateur
    fn show_error(&mut self, message: &str);
}

/// Identifiants des zones de texte
pub mod slots {
    pub const TOTAL_GAMES: &str = "totalGames";
    pub const TOTAL_WINS: &str = "totalWins";
    pub const TOTAL_DRAWS: &str = "totalDraws";
    pub const TOTAL_LOSSES: &str = "totalLosses";
    pub const GOALS_FOR: &str = "goalsFor";
    pub const GOALS_AGAINST: &str = "goalsAgainst";
    pub const GOAL_DIFFERENCE: &str = "goalDifference";
    pub const WIN_PERCENTAGE: &str = "winPercentage";

    pub const UNIQUE_PLAYERS: &str = "uniquePlayers";
    pub const TOTAL_TRAINING_SESSIONS: &str = "totalTrainingSessions";
    pub const TOTAL_GAME_SESSIONS: &str = "totalGameSessions";
    pub const AVG_ATTENDEES_PER_TRAINING: &str = "avgAttendeesPerTraining";
    pub const OVERALL_ATTENDANCE: &str = "overallAttendance";
    pub const TOTAL_CONFIRMED: &str = "totalConfirmed";

    pub const TREND_INSIGHT: &str = "trendInsight";

    /// Bilan de saison, dans l'ordre d'affichage
    pub const SEASON: [&str; 8] = [
        TOTAL_GAMES,
        TOTAL_WINS,
        TOTAL_DRAWS,
        TOTAL_LOSSES,
        GOALS_FOR,
        GOALS_AGAINST,
        GOAL_DIFFERENCE,
        WIN_PERCENTAGE,
    ];

    /// Entraînement et participation, dans l'ordre d'affichage
    pub const TRAINING: [&str; 6] = [
        UNIQUE_PLAYERS,
        TOTAL_TRAINING_SESSIONS,
        TOTAL_GAME_SESSIONS,
        AVG_ATTENDEES_PER_TRAINING,
        OVERALL_ATTENDANCE,
        TOTAL_CONFIRMED,
    ];

    /// Libellé affiché à côté d'une zone
    pub fn label(slot: &str) -> &'static str {
        match slot {
            TOTAL_GAMES => "Spiele",
            TOTAL_WINS => "Siege",
            TOTAL_DRAWS => "Unentschieden",
            TOTAL_LOSSES => "Niederlagen",
            GOALS_FOR => "Tore erzielt",
            GOALS_AGAINST => "Tore kassiert",
            GOAL_DIFFERENCE => "Tordifferenz",
            WIN_PERCENTAGE => "Siegquote (%)",
            UNIQUE_PLAYERS => "Aktive Spieler",
            TOTAL_TRAINING_SESSIONS => "Trainings",
            TOTAL_GAME_SESSIONS => "Spieltermine",
            AVG_ATTENDEES_PER_TRAINING => "Ø Teilnehmer",
            OVERALL_ATTENDANCE => "Teilnahmequote (%)",
            TOTAL_CONFIRMED => "Zusagen",
            TREND_INSIGHT => "Trend",
            _ => "",
        }
    }
}

/// Identifiants des points de montage des graphiques
pub mod mounts {
    pub const ROLLING_AVERAGE: &str = "rollingAverageChart";
    pub const HISTORICAL: &str = "historicalChart";
    pub const TRAINING_ATTENDANCE: &str = "trainingAttendanceChart";
    pub const MONTHLY_TRAINING: &str = "monthlyTrainingChart";

    /// Tous les graphiques, dans l'ordre d'affichage
    pub const ALL: [&str; 4] = [ROLLING_AVERAGE, HISTORICAL, TRAINING_ATTENDANCE, MONTHLY_TRAINING];
}
