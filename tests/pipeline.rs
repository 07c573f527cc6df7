// Pipeline complet sur les documents de tests/fixtures

use clubstats::api::{try_load_all, DataSource};
use clubstats::charts::ChartKind;
use clubstats::pipeline::{render_dashboard, run};
use clubstats::surface::{mounts, slots, MemorySurface};

fn fixtures() -> DataSource {
    DataSource::directory(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

#[tokio::test]
async fn full_dashboard_is_rendered() {
    let mut surface = MemorySurface::dashboard();
    let snapshot = run(&fixtures(), &mut surface).await;

    assert!(snapshot.is_some());
    assert!(surface.error().is_none());
    assert_eq!(surface.mounted_charts().count(), 4);

    let keys: Vec<&str> = surface.mounted_charts().map(|(key, _)| key).collect();
    assert_eq!(keys, mounts::ALL.to_vec());
}

#[tokio::test]
async fn summary_texts_are_written_verbatim() {
    let mut surface = MemorySurface::dashboard();
    run(&fixtures(), &mut surface).await;

    assert_eq!(surface.text(slots::TOTAL_GAMES), Some("8"));
    assert_eq!(surface.text(slots::TOTAL_WINS), Some("4"));
    assert_eq!(surface.text(slots::GOAL_DIFFERENCE), Some("0"));
    assert_eq!(surface.text(slots::WIN_PERCENTAGE), Some("50"));
    assert_eq!(surface.text(slots::UNIQUE_PLAYERS), Some("31"));
    assert_eq!(surface.text(slots::AVG_ATTENDEES_PER_TRAINING), Some("11.4"));
    assert_eq!(surface.text(slots::OVERALL_ATTENDANCE), Some("47.9"));
    assert_eq!(surface.text(slots::TOTAL_CONFIRMED), Some("1450"));
}

#[tokio::test]
async fn rising_goals_and_falling_conceded_give_great_development() {
    let mut surface = MemorySurface::dashboard();
    run(&fixtures(), &mut surface).await;

    let insight = surface.text(slots::TREND_INSIGHT).unwrap();
    assert!(insight.starts_with("📊 Trend-Analyse: "));
    assert!(insight.contains("Großartige Entwicklung!"));
}

#[tokio::test]
async fn rolling_chart_uses_loaded_colors() {
    let mut surface = MemorySurface::dashboard();
    run(&fixtures(), &mut surface).await;

    let chart = surface.chart(mounts::ROLLING_AVERAGE).unwrap();
    assert_eq!(chart.kind, ChartKind::Line);
    assert_eq!(chart.data.labels.len(), 8);
    // primary vient de colors.json, highlight prend la valeur par défaut
    assert_eq!(chart.data.datasets[0].border_color, "#1a472a");
    assert_eq!(chart.data.datasets[1].border_color, "#8b0000");
}

#[tokio::test]
async fn historical_missing_counts_render_as_zero() {
    let mut surface = MemorySurface::dashboard();
    run(&fixtures(), &mut surface).await;

    let chart = surface.chart(mounts::HISTORICAL).unwrap();
    assert_eq!(
        chart.data.labels,
        vec!["2021/22 (A-Klasse)", "2022/23 (Kreisklasse)", "2023/24"]
    );

    let labels: Vec<&str> = chart.data.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["1. Mannschaft", "Gesamt Spieler", "2. Mannschaft", "A-Jugend"]);

    assert_eq!(chart.data.datasets[0].data, vec![22.0, 21.0, 19.0]);
    assert_eq!(chart.data.datasets[1].data, vec![55.0, 38.0, 0.0]);
    assert_eq!(chart.data.datasets[3].data, vec![15.0, 0.0, 0.0]);
    assert!(chart.data.datasets[1].is_secondary_axis());
}

#[tokio::test]
async fn attendance_chart_keeps_null_as_zero_and_adds_rolling_line() {
    let mut surface = MemorySurface::dashboard();
    run(&fixtures(), &mut surface).await;

    let chart = surface.chart(mounts::TRAINING_ATTENDANCE).unwrap();
    assert_eq!(chart.data.datasets.len(), 2);
    assert_eq!(chart.data.datasets[0].data, vec![14.0, 12.0, 0.0, 11.0]);
    assert_eq!(chart.data.datasets[1].data, vec![14.0, 13.0, 8.7, 9.3]);
}

#[tokio::test]
async fn partial_surface_only_receives_what_it_declares() {
    let snapshot = try_load_all(&fixtures()).await.unwrap();

    let mut surface = MemorySurface::new()
        .with_text_slots([slots::TOTAL_GAMES])
        .with_mounts([mounts::MONTHLY_TRAINING]);

    let mounted = render_dashboard(&snapshot, &mut surface);

    assert_eq!(mounted, 1);
    assert_eq!(surface.written_text_count(), 1);
    assert!(surface.chart(mounts::ROLLING_AVERAGE).is_none());
    assert!(surface.text(slots::TREND_INSIGHT).is_none());
}

#[tokio::test]
async fn json_export_has_chart_js_shape() {
    let mut surface = MemorySurface::dashboard();
    run(&fixtures(), &mut surface).await;

    let value = serde_json::to_value(&surface).unwrap();

    assert_eq!(value["texts"]["totalGames"], "8");
    assert!(value.get("error").is_none());

    let rolling = &value["mounts"][0];
    assert_eq!(rolling["key"], "rollingAverageChart");
    assert_eq!(rolling["spec"]["type"], "line");
    assert_eq!(rolling["spec"]["data"]["datasets"][0]["borderColor"], "#1a472a");
    assert_eq!(
        rolling["spec"]["options"]["plugins"]["title"]["text"],
        "Rollierender 5-Spiele-Durchschnitt"
    );

    let historical = &value["mounts"][1]["spec"];
    assert_eq!(historical["type"], "bar");
    assert_eq!(historical["data"]["datasets"][1]["type"], "line");
    assert_eq!(historical["data"]["datasets"][1]["yAxisID"], "y1");
}
