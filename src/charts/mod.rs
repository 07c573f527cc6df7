// ============================================================================
// Module : charts
// ============================================================================
// Spécifications de graphiques, construction depuis le snapshot, et
// analyse de tendance des moyennes glissantes
// ============================================================================

pub mod spec;     // Forme { type, data, options }
pub mod builder;  // Les quatre graphiques du tableau de bord
pub mod trend;    // Phrase de tendance

pub use builder::{
    create_historical_chart, create_monthly_training_chart, create_rolling_average_chart,
    create_training_attendance_chart, historical_chart, monthly_training_chart,
    rolling_average_chart, training_attendance_chart,
};
pub use spec::{ChartData, ChartKind, ChartSpec, Dataset};
pub use trend::{generate_trend_insight, TrendBucket, TrendInsight};
