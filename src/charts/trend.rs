// ============================================================================
// Analyse de tendance
// ============================================================================
// Compare la première et la seconde moitié de la saison sur les moyennes
// glissantes de buts marqués et encaissés, puis choisit une phrase fixe.
//
// Pour les buts encaissés le signe est inversé : en encaisser moins est
// une amélioration.
// ============================================================================

use tracing::debug;

use crate::models::RollingAverageSeries;
use crate::surface::{slots, DisplaySurface};

/// Seuil de variation significative (en buts par match)
pub const TREND_THRESHOLD: f64 = 0.3;

const INSIGHT_PREFIX: &str = "📊 Trend-Analyse: ";

/// Catégories de tendance, mutuellement exclusives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendBucket {
    /// Plus de buts marqués et moins de buts encaissés
    GreatDevelopment,
    /// Seule l'attaque progresse
    OffenseImproved,
    /// Seule la défense progresse
    DefenseStabilized,
    /// Les deux régressent
    ChallengingPhase,
    /// Rien de significatif
    SteadyPerformance,
}

impl TrendBucket {
    /// Classe les deux améliorations ; l'ordre des tests fait foi
    pub fn classify(for_improvement: f64, against_improvement: f64) -> Self {
        if for_improvement > TREND_THRESHOLD && against_improvement > TREND_THRESHOLD {
            TrendBucket::GreatDevelopment
        } else if for_improvement > TREND_THRESHOLD {
            TrendBucket::OffenseImproved
        } else if against_improvement > TREND_THRESHOLD {
            TrendBucket::DefenseStabilized
        } else if for_improvement < -TREND_THRESHOLD && against_improvement < -TREND_THRESHOLD {
            TrendBucket::ChallengingPhase
        } else {
            TrendBucket::SteadyPerformance
        }
    }

    /// Phrase affichée pour la catégorie
    pub fn message(&self) -> &'static str {
        match self {
            TrendBucket::GreatDevelopment => {
                "Großartige Entwicklung! Die Mannschaft erzielt mehr Tore und kassiert weniger. 🚀"
            }
            TrendBucket::OffenseImproved => {
                "Offensive stark verbessert! Die Mannschaft erzielt deutlich mehr Tore. ⚽"
            }
            TrendBucket::DefenseStabilized => {
                "Defensive stabilisiert! Die Mannschaft kassiert weniger Gegentore. 🛡️"
            }
            TrendBucket::ChallengingPhase => {
                "Herausfordernde Phase. Fokus auf Training und Teamgeist! 💪"
            }
            TrendBucket::SteadyPerformance => "Konstante Leistung über die Saison. Weiter so! 👍",
        }
    }
}

/// Résultat de l'analyse
#[derive(Debug, Clone, PartialEq)]
pub struct TrendInsight {
    /// Moyenne seconde moitié - première moitié (buts marqués)
    pub for_improvement: f64,
    /// Moyenne première moitié - seconde moitié (buts encaissés)
    pub against_improvement: f64,
    pub bucket: TrendBucket,
}

impl TrendInsight {
    /// Calcule la tendance ; None si une moitié serait vide
    pub fn compute(goals_for: &[f64], goals_against: &[f64]) -> Option<Self> {
        let n = goals_for.len().min(goals_against.len());
        let mid = n / 2;
        if mid == 0 {
            return None;
        }

        let (first_for, second_for) = half_means(&goals_for[..n], mid)?;
        let (first_against, second_against) = half_means(&goals_against[..n], mid)?;

        let for_improvement = second_for - first_for;
        let against_improvement = first_against - second_against;

        Some(Self {
            for_improvement,
            against_improvement,
            bucket: TrendBucket::classify(for_improvement, against_improvement),
        })
    }

    /// Texte complet, préfixe compris
    pub fn text(&self) -> String {
        format!("{}{}", INSIGHT_PREFIX, self.bucket.message())
    }
}

/// Moyenne de [0, mid) et de [mid, len)
fn half_means(values: &[f64], mid: usize) -> Option<(f64, f64)> {
    let (first, second) = values.split_at(mid);
    Some((mean(first)?, mean(second)?))
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Calcule la tendance et l'écrit dans la zone "trendInsight"
///
/// Retourne l'analyse calculée, même si la zone n'existe pas ; None si la
/// série est trop courte (aucun texte n'est alors écrit).
pub fn generate_trend_insight<S: DisplaySurface>(
    series: &RollingAverageSeries,
    surface: &mut S,
) -> Option<TrendInsight> {
    let Some(insight) = TrendInsight::compute(&series.goals_for, &series.goals_against) else {
        debug!(points = series.goals_for.len(), "Not enough data for trend insight, skipping");
        return None;
    };

    debug!(
        for_improvement = insight.for_improvement,
        against_improvement = insight.against_improvement,
        bucket = ?insight.bucket,
        "Computed trend insight"
    );
    surface.set_text(slots::TREND_INSIGHT, &insight.text());
    Some(insight)
}
