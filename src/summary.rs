// ============================================================================
// Remplissage des chiffres clés
// ============================================================================
// Écrit les compteurs du snapshot dans leurs zones de texte, tels quels
//
// CONCEPT RUST : Display par défaut
// - f64 : "47.9", et "80" pour 80.0 (pas de ".0" superflu)
// Les compteurs sont des f64 : "12" comme "12.0" dans le JSON donnent "12"
// Une zone absente est ignorée par la surface : rien à vérifier ici.
// ============================================================================

use tracing::debug;

use crate::models::{GameStatistics, ParticipationStatistics};
use crate::surface::{slots, DisplaySurface};

/// Bilan de la saison : matchs, victoires, nuls, défaites, buts
pub fn populate_season_overview<S: DisplaySurface>(games: &GameStatistics, surface: &mut S) {
    let stats = &games.statistics;

    let values = [
        (slots::TOTAL_GAMES, stats.total_games.to_string()),
        (slots::TOTAL_WINS, stats.wins.to_string()),
        (slots::TOTAL_DRAWS, stats.draws.to_string()),
        (slots::TOTAL_LOSSES, stats.losses.to_string()),
        (slots::GOALS_FOR, stats.total_goals_for.to_string()),
        (slots::GOALS_AGAINST, stats.total_goals_against.to_string()),
        (slots::GOAL_DIFFERENCE, stats.goal_difference.to_string()),
        (slots::WIN_PERCENTAGE, stats.win_percentage.to_string()),
    ];

    let written = write_all(surface, &values);
    debug!(written, total = values.len(), "Season overview populated");
}

/// Entraînement et participation
pub fn populate_training_stats<S: DisplaySurface>(participation: &ParticipationStatistics, surface: &mut S) {
    let stats = &participation.overall_statistics;

    let values = [
        (slots::UNIQUE_PLAYERS, stats.unique_players.to_string()),
        (slots::TOTAL_TRAINING_SESSIONS, stats.total_training_sessions.to_string()),
        (slots::TOTAL_GAME_SESSIONS, stats.total_game_sessions.to_string()),
        (slots::AVG_ATTENDEES_PER_TRAINING, stats.avg_attendees_per_training.to_string()),
        (slots::OVERALL_ATTENDANCE, stats.overall_attendance_rate.to_string()),
        (slots::TOTAL_CONFIRMED, stats.total_confirmed.to_string()),
    ];

    let written = write_all(surface, &values);
    debug!(written, total = values.len(), "Training stats populated");
}

/// Écrit chaque valeur ; retourne le nombre de zones effectivement présentes
fn write_all<S: DisplaySurface>(surface: &mut S, values: &[(&str, String)]) -> usize {
    let mut written = 0;
    for (slot, text) in values {
        if surface.set_text(slot, text) {
            written += 1;
        }
    }
    written
}
