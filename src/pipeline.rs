// ============================================================================
// Pipeline du tableau de bord
// ============================================================================
// 1. Chargement parallèle des documents
// 2. Chiffres clés (bilan de saison, puis entraînement)
// 3. Graphiques (moyennes glissantes + tendance, historique, participation,
//    mensuel)
//
// En cas d'échec du chargement : un seul message d'erreur, et rien d'autre
// n'est écrit sur la surface.
// ============================================================================

use tracing::{info, warn};

use crate::api::{load_all, DataSource};
use crate::charts::{
    create_historical_chart, create_monthly_training_chart, create_rolling_average_chart,
    create_training_attendance_chart,
};
use crate::models::DataSnapshot;
use crate::summary::{populate_season_overview, populate_training_stats};
use crate::surface::DisplaySurface;

/// Message affiché quand les données n'ont pas pu être chargées
pub const LOAD_ERROR_MESSAGE: &str = "Fehler beim Laden der Daten. Bitte überprüfen Sie Ihre \
     Internetverbindung und laden Sie die Seite neu.";

/// Remplit la surface à partir d'un snapshot chargé
///
/// Retourne le nombre de graphiques effectivement montés.
pub fn render_dashboard<S: DisplaySurface>(snapshot: &DataSnapshot, surface: &mut S) -> usize {
    let colors = snapshot.colors();

    populate_season_overview(snapshot.games(), surface);
    populate_training_stats(snapshot.participation(), surface);

    let mounted = [
        create_rolling_average_chart(surface, snapshot.games(), colors),
        create_historical_chart(surface, snapshot.historical(), colors),
        create_training_attendance_chart(surface, snapshot.participation(), colors),
        create_monthly_training_chart(surface, snapshot.participation(), colors),
    ]
    .iter()
    .filter(|&&m| m)
    .count();

    info!(charts = mounted, "Dashboard rendered");
    mounted
}

/// Charge puis rend ; retourne le snapshot si le chargement a réussi
pub async fn run<S: DisplaySurface>(source: &DataSource, surface: &mut S) -> Option<DataSnapshot> {
    let Some(snapshot) = load_all(source).await else {
        warn!("Loading failed, showing error and stopping");
        surface.show_error(LOAD_ERROR_MESSAGE);
        return None;
    };

    render_dashboard(&snapshot, surface);
    Some(snapshot)
}
