// ============================================================================
// Construction des graphiques
// ============================================================================
// Transforme les séries du snapshot en spécifications de graphiques
//
// Chaque graphique a deux fonctions :
// - une fonction pure `*_chart` qui retourne la ChartSpec
// - une fonction `create_*` qui vérifie le point de montage puis monte
//
// Un point de montage absent n'est pas une erreur : rien n'est construit.
// ============================================================================

use serde_json::json;
use tracing::debug;

use crate::charts::spec::{ChartData, ChartKind, ChartSpec, Dataset};
use crate::charts::trend::generate_trend_insight;
use crate::models::{
    with_alpha, ColorTheme, GameStatistics, HistoricalPlayerRecords, MonthlyTrainingSeries,
    ParticipationStatistics, RollingAverageSeries, SeasonRecord, TrainingAttendanceSeries,
};
use crate::surface::{mounts, DisplaySurface};

/// Alpha des zones remplies sous les courbes
const FILL_ALPHA: &str = "30";
/// Alpha des barres
const BAR_ALPHA: &str = "CC";

// ============================================================================
// Moyenne glissante des buts (graphique principal)
// ============================================================================

/// Buts marqués / encaissés, moyenne glissante sur 5 matchs
pub fn rolling_average_chart(series: &RollingAverageSeries, colors: &ColorTheme) -> ChartSpec {
    let line = |label: &str, data: &[f64], color: &str| {
        Dataset::new(label, data.to_vec(), color, with_alpha(color, FILL_ALPHA))
            .border_width(3)
            .fill(true)
            .tension(0.4)
            .points(5, 7)
    };

    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.dates.clone(),
            datasets: vec![
                line("Tore erzielt (Durchschnitt)", &series.goals_for, &colors.primary),
                line("Tore kassiert (Durchschnitt)", &series.goals_against, &colors.highlight),
            ],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {"display": true, "position": "top"},
                "title": {"display": true, "text": "Rollierender 5-Spiele-Durchschnitt"},
                "tooltip": {"mode": "index", "intersect": false}
            },
            "scales": {
                "y": {"beginAtZero": true, "title": {"display": true, "text": "Durchschnittliche Tore"}},
                "x": {"title": {"display": true, "text": "Datum"}}
            }
        }),
    }
}

/// Monte le graphique des moyennes glissantes puis écrit la tendance
pub fn create_rolling_average_chart<S: DisplaySurface>(
    surface: &mut S,
    games: &GameStatistics,
    colors: &ColorTheme,
) -> bool {
    if !surface.has_mount(mounts::ROLLING_AVERAGE) {
        debug!(mount = mounts::ROLLING_AVERAGE, "Mount point absent, skipping chart");
        return false;
    }

    let series = &games.rolling_average_data;
    let mounted = surface.mount_chart(mounts::ROLLING_AVERAGE, rolling_average_chart(series, colors));
    generate_trend_insight(series, surface);
    mounted
}

// ============================================================================
// Effectifs historiques (barres groupées + ligne du total)
// ============================================================================

/// Joueurs par équipe et par saison, total sur l'axe secondaire
pub fn historical_chart(records: &HistoricalPlayerRecords, colors: &ColorTheme) -> ChartSpec {
    let rows = &records.data;
    let column = |f: fn(&SeasonRecord) -> f64| rows.iter().map(f).collect::<Vec<f64>>();

    let bar = |label: &str, data: Vec<f64>, color: &str| {
        Dataset::new(label, data, color, with_alpha(color, BAR_ALPHA))
    };

    let total = Dataset::new(
        "Gesamt Spieler",
        column(|r| r.total_players),
        &colors.highlight,
        with_alpha(&colors.highlight, BAR_ALPHA),
    )
    .kind(ChartKind::Line)
    .tension(0.3)
    .points(5, 7)
    .fill(false)
    .y_axis("y1");

    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: rows.iter().map(|r| r.label()).collect(),
            datasets: vec![
                bar("1. Mannschaft", column(|r| r.first_team), &colors.primary),
                total,
                bar("2. Mannschaft", column(|r| r.second_team), &colors.accent),
                bar("A-Jugend", column(|r| r.youth), &colors.holiday.gold),
            ],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {"display": true, "position": "top"},
                "title": {"display": true, "text": "Spieleranzahl pro Team über 10 Jahre"}
            },
            "scales": {
                "y": {"beginAtZero": true, "stacked": false, "position": "left",
                      "title": {"display": true, "text": "Anzahl Spieler (Team)"}},
                "y1": {"beginAtZero": true, "position": "right",
                       "title": {"display": true, "text": "Gesamt Spieler"},
                       "grid": {"drawOnChartArea": false}},
                "x": {"stacked": false, "title": {"display": true, "text": "Saison (Klasse)"}}
            }
        }),
    }
}

pub fn create_historical_chart<S: DisplaySurface>(
    surface: &mut S,
    records: &HistoricalPlayerRecords,
    colors: &ColorTheme,
) -> bool {
    if !surface.has_mount(mounts::HISTORICAL) {
        debug!(mount = mounts::HISTORICAL, "Mount point absent, skipping chart");
        return false;
    }
    surface.mount_chart(mounts::HISTORICAL, historical_chart(records, colors))
}

// ============================================================================
// Participation aux entraînements
// ============================================================================

/// Participants par entraînement, avec la moyenne glissante si disponible
pub fn training_attendance_chart(series: &TrainingAttendanceSeries, colors: &ColorTheme) -> ChartSpec {
    let mut datasets = vec![Dataset::new(
        "Teilnehmer pro Training",
        series.attendees.clone(),
        &colors.accent,
        with_alpha(&colors.accent, FILL_ALPHA),
    )
    .fill(true)
    .tension(0.3)
    .points(3, 5)];

    if let Some(rolling) = &series.rolling_avg {
        datasets.push(
            Dataset::new(
                "Rollierender Durchschnitt (6 Trainings)",
                rolling.clone(),
                &colors.highlight,
                "transparent".to_string(),
            )
            .border_width(3)
            .fill(false)
            .tension(0.4)
            .points(0, 5),
        );
    }

    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.dates.clone(),
            datasets,
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {"display": true, "position": "top"},
                "title": {"display": true, "text": "Trainingsteilnahme über das Jahr"}
            },
            "scales": {
                "y": {"beginAtZero": true, "title": {"display": true, "text": "Anzahl Teilnehmer"}},
                "x": {"title": {"display": true, "text": "Datum"},
                      "ticks": {"maxRotation": 45, "minRotation": 45}}
            }
        }),
    }
}

pub fn create_training_attendance_chart<S: DisplaySurface>(
    surface: &mut S,
    participation: &ParticipationStatistics,
    colors: &ColorTheme,
) -> bool {
    if !surface.has_mount(mounts::TRAINING_ATTENDANCE) {
        debug!(mount = mounts::TRAINING_ATTENDANCE, "Mount point absent, skipping chart");
        return false;
    }
    let spec = training_attendance_chart(&participation.training_attendance_over_time, colors);
    surface.mount_chart(mounts::TRAINING_ATTENDANCE, spec)
}

// ============================================================================
// Statistiques mensuelles (deux axes)
// ============================================================================

/// Nombre d'entraînements (axe y) et participants moyens (axe y1) par mois
pub fn monthly_training_chart(series: &MonthlyTrainingSeries, colors: &ColorTheme) -> ChartSpec {
    let gold = &colors.holiday.gold;

    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: series.months.clone(),
            datasets: vec![
                Dataset::new(
                    "Anzahl Trainings",
                    series.training_counts.clone(),
                    &colors.primary,
                    with_alpha(&colors.primary, BAR_ALPHA),
                )
                .y_axis("y"),
                Dataset::new("Ø Teilnehmer", series.avg_attendees.clone(), gold, with_alpha(gold, BAR_ALPHA))
                    .y_axis("y1"),
            ],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {"display": true, "position": "top"},
                "title": {"display": true, "text": "Monatliche Trainingsstatistiken"}
            },
            "scales": {
                "y": {"type": "linear", "position": "left", "beginAtZero": true,
                      "title": {"display": true, "text": "Anzahl Trainings"}},
                "y1": {"type": "linear", "position": "right", "beginAtZero": true,
                       "title": {"display": true, "text": "Ø Teilnehmer"},
                       "grid": {"drawOnChartArea": false}}
            }
        }),
    }
}

pub fn create_monthly_training_chart<S: DisplaySurface>(
    surface: &mut S,
    participation: &ParticipationStatistics,
    colors: &ColorTheme,
) -> bool {
    if !surface.has_mount(mounts::MONTHLY_TRAINING) {
        debug!(mount = mounts::MONTHLY_TRAINING, "Mount point absent, skipping chart");
        return false;
    }
    let spec = monthly_training_chart(&participation.monthly_training_stats, colors);
    surface.mount_chart(mounts::MONTHLY_TRAINING, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{slots, MemorySurface};

    fn rolling_series() -> RollingAverageSeries {
        RollingAverageSeries {
            dates: vec!["01.09.".into(), "08.09.".into(), "15.09.".into(), "22.09.".into()],
            goals_for: vec![1.0, 1.0, 3.0, 3.0],
            goals_against: vec![2.0, 2.0, 2.0, 2.0],
            goal_difference: None,
        }
    }

    #[test]
    fn test_rolling_average_chart() {
        let colors = ColorTheme::default();
        let spec = rolling_average_chart(&rolling_series(), &colors);

        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.data.labels.len(), 4);
        assert_eq!(spec.data.datasets.len(), 2);

        let goals_for = &spec.data.datasets[0];
        assert_eq!(goals_for.border_color, "#53a612");
        assert_eq!(goals_for.background_color, "#53a61230");
        assert_eq!(goals_for.fill, Some(true));
        assert_eq!(goals_for.tension, Some(0.4));

        let goals_against = &spec.data.datasets[1];
        assert_eq!(goals_against.border_color, colors.highlight);
        assert_ne!(goals_for.border_color, goals_against.border_color);
        assert_eq!(spec.title(), Some("Rollierender 5-Spiele-Durchschnitt"));
    }

    #[test]
    fn test_create_rolling_average_writes_trend() {
        let games = GameStatistics {
            rolling_average_data: rolling_series(),
            ..Default::default()
        };
        let mut surface = MemorySurface::dashboard();

        assert!(create_rolling_average_chart(&mut surface, &games, &ColorTheme::default()));
        assert!(surface.chart(mounts::ROLLING_AVERAGE).is_some());
        assert!(surface
            .text(slots::TREND_INSIGHT)
            .unwrap()
            .contains("Offensive stark verbessert"));
    }

    /// Surface qui annonce le montage mais refuse le graphique
    struct RefusingSurface {
        inner: MemorySurface,
    }

    impl DisplaySurface for RefusingSurface {
        fn set_text(&mut self, slot: &str, text: &str) -> bool {
            self.inner.set_text(slot, text)
        }
        fn has_mount(&self, _mount: &str) -> bool {
            true
        }
        fn mount_chart(&mut self, _mount: &str, _spec: ChartSpec) -> bool {
            false
        }
        fn show_error(&mut self, message: &str) {
            self.inner.show_error(message)
        }
    }

    #[test]
    fn test_create_rolling_average_reports_refused_mount() {
        let games = GameStatistics {
            rolling_average_data: rolling_series(),
            ..Default::default()
        };
        let mut surface = RefusingSurface { inner: MemorySurface::dashboard() };

        assert!(!create_rolling_average_chart(&mut surface, &games, &ColorTheme::default()));
        // La tendance est écrite quand même
        assert!(surface.inner.text(slots::TREND_INSIGHT).is_some());
    }

    #[test]
    fn test_historical_chart_defaults_missing_counts() {
        let records = HistoricalPlayerRecords {
            data: vec![
                SeasonRecord {
                    season: "2022/23".into(),
                    league: Some("Kreisklasse".into()),
                    first_team: 21.0,
                    second_team: 17.0,
                    youth: 14.0,
                    total_players: 52.0,
                },
                SeasonRecord {
                    season: "2023/24".into(),
                    first_team: 19.0,
                    ..Default::default()
                },
            ],
        };
        let spec = historical_chart(&records, &ColorTheme::default());

        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.data.labels, vec!["2022/23 (Kreisklasse)", "2023/24"]);
        assert_eq!(spec.data.datasets.len(), 4);

        let total = &spec.data.datasets[1];
        assert_eq!(total.label, "Gesamt Spieler");
        assert_eq!(total.kind, Some(ChartKind::Line));
        assert!(total.is_secondary_axis());
        assert_eq!(total.data, vec![52.0, 0.0]);

        let youth = &spec.data.datasets[3];
        assert_eq!(youth.border_color, "#d4af37");
        assert_eq!(youth.data, vec![14.0, 0.0]);

        // Les valeurs manquantes sont sérialisées en 0, jamais en null
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["data"]["datasets"][1]["data"][1], 0.0);
    }

    #[test]
    fn test_training_attendance_optional_rolling_line() {
        let colors = ColorTheme::default();
        let mut series = TrainingAttendanceSeries {
            dates: vec!["03.09.2024".into(), "05.09.2024".into()],
            attendees: vec![12.0, 15.0],
            rolling_avg: None,
        };

        let single = training_attendance_chart(&series, &colors);
        assert_eq!(single.data.datasets.len(), 1);
        assert_eq!(single.data.datasets[0].border_color, colors.accent);

        series.rolling_avg = Some(vec![12.0, 13.5]);
        let dual = training_attendance_chart(&series, &colors);
        assert_eq!(dual.data.datasets.len(), 2);
        assert_eq!(dual.data.datasets[1].background_color, "transparent");
        assert_eq!(dual.data.datasets[1].point_radius, Some(0));
    }

    #[test]
    fn test_monthly_chart_uses_two_axes() {
        let series = MonthlyTrainingSeries {
            months: vec!["2024-09".into(), "2024-10".into()],
            training_counts: vec![8.0, 9.0],
            avg_attendees: vec![12.1, 10.4],
        };
        let spec = monthly_training_chart(&series, &ColorTheme::default());

        assert_eq!(spec.data.datasets[0].y_axis_id.as_deref(), Some("y"));
        assert_eq!(spec.data.datasets[1].y_axis_id.as_deref(), Some("y1"));
        assert_eq!(spec.axis_title("y1"), Some("Ø Teilnehmer"));
    }

    #[test]
    fn test_absent_mount_points_are_noops() {
        let colors = ColorTheme::default();
        let mut surface = MemorySurface::new().with_text_slots([slots::TREND_INSIGHT]);
        let games = GameStatistics {
            rolling_average_data: rolling_series(),
            ..Default::default()
        };
        let participation = ParticipationStatistics::default();

        assert!(!create_rolling_average_chart(&mut surface, &games, &colors));
        assert!(!create_historical_chart(&mut surface, &HistoricalPlayerRecords::default(), &colors));
        assert!(!create_training_attendance_chart(&mut surface, &participation, &colors));
        assert!(!create_monthly_training_chart(&mut surface, &participation, &colors));

        assert_eq!(surface.mounted_charts().count(), 0);
        // Pas de graphique, donc pas de tendance non plus
        assert_eq!(surface.text(slots::TREND_INSIGHT), None);
    }
}
