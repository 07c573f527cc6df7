// ============================================================================
// Structure : ColorTheme
// ============================================================================
// Couleurs du club utilisées par les graphiques
//
// Le document colors.json est extrait du logo ; chaque clé absente, null ou
// vide retombe sur une valeur fixe. La palette de Noël est toujours fixe.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::defaults::{lenient_strings, non_empty_string};

pub const DEFAULT_PRIMARY: &str = "#53a612";
pub const DEFAULT_SECONDARY: &str = "#c0c7c7";
pub const DEFAULT_ACCENT: &str = "#04a0f6";
pub const DEFAULT_HIGHLIGHT: &str = "#8b0000";

pub const HOLIDAY_RED: &str = "#c41e3a";
pub const HOLIDAY_GREEN: &str = "#165b33";
pub const HOLIDAY_GOLD: &str = "#d4af37";

/// Document brut colors.json, tel que publié
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorDocument {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub primary: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub secondary: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub accent: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub highlight: Option<String>,
    /// Toutes les couleurs dominantes du logo (informatif)
    #[serde(default, deserialize_with = "lenient_strings")]
    pub all_colors: Vec<String>,
}

/// Palette fixe (saison de Noël)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayPalette {
    pub red: String,
    pub green: String,
    pub gold: String,
}

impl Default for HolidayPalette {
    fn default() -> Self {
        Self {
            red: HOLIDAY_RED.to_string(),
            green: HOLIDAY_GREEN.to_string(),
            gold: HOLIDAY_GOLD.to_string(),
        }
    }
}

/// Thème entièrement résolu : aucun champ n'est optionnel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub highlight: String,
    pub holiday: HolidayPalette,
    pub palette: Vec<String>,
}

impl ColorTheme {
    /// Résout un document (éventuellement absent) en thème complet
    ///
    /// Ne peut pas échouer : chaque trou est comblé par sa valeur par défaut.
    pub fn from_document(document: Option<&ColorDocument>) -> Self {
        let pick = |value: Option<&String>, fallback: &str| {
            value.cloned().unwrap_or_else(|| fallback.to_string())
        };

        match document {
            Some(doc) => Self {
                primary: pick(doc.primary.as_ref(), DEFAULT_PRIMARY),
                secondary: pick(doc.secondary.as_ref(), DEFAULT_SECONDARY),
                accent: pick(doc.accent.as_ref(), DEFAULT_ACCENT),
                highlight: pick(doc.highlight.as_ref(), DEFAULT_HIGHLIGHT),
                holiday: HolidayPalette::default(),
                palette: doc.all_colors.clone(),
            },
            None => Self::default(),
        }
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
            highlight: DEFAULT_HIGHLIGHT.to_string(),
            holiday: HolidayPalette::default(),
            palette: Vec::new(),
        }
    }
}

/// Ajoute un canal alpha hexadécimal à une couleur ("#53a612" + "30")
pub fn with_alpha(color: &str, alpha: &str) -> String {
    format!("{}{}", color, alpha)
}
