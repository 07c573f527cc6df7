// ============================================================================
// Spécification de graphique
// ============================================================================
// Forme déclarative acceptée par la bibliothèque de rendu :
//   { type, data: { labels, datasets }, options }
//
// La sérialisation suit les noms Chart.js (camelCase, "yAxisID") pour que
// l'export JSON soit directement utilisable par une page web.
// ============================================================================

use serde::Serialize;

/// Type de graphique (ou de série dans un graphique combiné)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Une série de données
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,

    /// Type de la série quand il diffère du graphique (combo barre + ligne)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,

    /// Lissage de la courbe (0 = segments droits)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,

    /// Axe vertical de rattachement ("y" principal, "y1" secondaire)
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

impl Dataset {
    /// Nouvelle série avec les champs obligatoires
    pub fn new(label: &str, data: Vec<f64>, border_color: &str, background_color: String) -> Self {
        Self {
            label: label.to_string(),
            data,
            border_color: border_color.to_string(),
            background_color,
            border_width: 2,
            kind: None,
            fill: None,
            tension: None,
            point_radius: None,
            point_hover_radius: None,
            y_axis_id: None,
        }
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = width;
        self
    }

    pub fn kind(mut self, kind: ChartKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    /// Rayon des points (normal, survol)
    pub fn points(mut self, radius: u32, hover_radius: u32) -> Self {
        self.point_radius = Some(radius);
        self.point_hover_radius = Some(hover_radius);
        self
    }

    pub fn y_axis(mut self, axis: &str) -> Self {
        self.y_axis_id = Some(axis.to_string());
        self
    }

    /// Vrai si la série est rattachée à l'axe secondaire
    pub fn is_secondary_axis(&self) -> bool {
        self.y_axis_id.as_deref() == Some("y1")
    }
}

/// Labels + séries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Spécification complète d'un graphique
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    /// Options de présentation (titre, légende, axes), en JSON libre
    pub options: serde_json::Value,
}

impl ChartSpec {
    /// Titre déclaré dans les options, s'il existe
    pub fn title(&self) -> Option<&str> {
        self.options
            .pointer("/plugins/title/text")
            .and_then(|v| v.as_str())
    }

    /// Titre d'un axe ("x", "y", "y1") déclaré dans les options
    pub fn axis_title(&self, axis: &str) -> Option<&str> {
        self.options
            .get("scales")
            .and_then(|scales| scales.get(axis))
            .and_then(|scale| scale.pointer("/title/text"))
            .and_then(|v| v.as_str())
    }
}
