// ============================================================================
// Structure : MemorySurface
// ============================================================================
// Surface d'affichage en mémoire
//
// Les zones sont déclarées à la construction ; écrire dans une zone non
// déclarée est ignoré, exactement comme un élément absent de la page.
// La TUI lit cette surface pour dessiner, l'export --json la sérialise.
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::charts::ChartSpec;
use crate::surface::{mounts, slots, DisplaySurface};

/// Un point de montage et le graphique éventuellement monté
#[derive(Debug, Clone, Serialize)]
pub struct Mount {
    pub key: String,
    pub spec: Option<ChartSpec>,
}

/// Surface en mémoire
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemorySurface {
    /// Zones de texte déclarées -> contenu (None tant que rien n'est écrit)
    texts: BTreeMap<String, Option<String>>,

    /// Points de montage, dans l'ordre de déclaration
    mounts: Vec<Mount>,

    /// Message d'erreur affiché à l'utilisateur
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl MemorySurface {
    /// Surface vide : aucune zone, aucun montage
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface complète du tableau de bord (toutes les zones connues)
    pub fn dashboard() -> Self {
        let text_slots = slots::SEASON
            .iter()
            .chain(slots::TRAINING.iter())
            .chain(std::iter::once(&slots::TREND_INSIGHT))
            .copied();

        Self::new().with_text_slots(text_slots).with_mounts(mounts::ALL)
    }

    /// Déclare des zones de texte (builder pattern)
    pub fn with_text_slots<'a>(mut self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        for key in keys {
            self.texts.entry(key.to_string()).or_insert(None);
        }
        self
    }

    /// Déclare des points de montage (builder pattern)
    pub fn with_mounts<'a>(mut self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        for key in keys {
            if !self.mounts.iter().any(|m| m.key == key) {
                self.mounts.push(Mount {
                    key: key.to_string(),
                    spec: None,
                });
            }
        }
        self
    }

    /// Contenu d'une zone de texte, si elle existe et a été écrite
    pub fn text(&self, slot: &str) -> Option<&str> {
        self.texts.get(slot).and_then(|t| t.as_deref())
    }

    /// Graphique monté sur un point de montage
    pub fn chart(&self, mount: &str) -> Option<&ChartSpec> {
        self.mounts
            .iter()
            .find(|m| m.key == mount)
            .and_then(|m| m.spec.as_ref())
    }

    /// Graphiques montés, dans l'ordre de déclaration
    pub fn mounted_charts(&self) -> impl Iterator<Item = (&str, &ChartSpec)> {
        self.mounts
            .iter()
            .filter_map(|m| m.spec.as_ref().map(|spec| (m.key.as_str(), spec)))
    }

    /// Nombre de zones de texte écrites
    pub fn written_text_count(&self) -> usize {
        self.texts.values().filter(|t| t.is_some()).count()
    }

    /// Message d'erreur éventuel
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&mut self, slot: &str, text: &str) -> bool {
        match self.texts.get_mut(slot) {
            Some(content) => {
                *content = Some(text.to_string());
                true
            }
            None => {
                debug!(slot, "Text slot not present, skipping");
                false
            }
        }
    }

    fn has_mount(&self, mount: &str) -> bool {
        self.mounts.iter().any(|m| m.key == mount)
    }

    fn mount_chart(&mut self, mount: &str, spec: ChartSpec) -> bool {
        match self.mounts.iter_mut().find(|m| m.key == mount) {
            Some(slot) => {
                slot.spec = Some(spec);
                true
            }
            None => false,
        }
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartData, ChartKind};

    fn empty_spec() -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            data: ChartData {
                labels: Vec::new(),
                datasets: Vec::new(),
            },
            options: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_missing_slot_is_ignored() {
        let mut surface = MemorySurface::new().with_text_slots(["totalGames"]);

        assert!(surface.set_text("totalGames", "12"));
        assert!(!surface.set_text("unknown", "1"));
        assert_eq!(surface.text("totalGames"), Some("12"));
        assert_eq!(surface.text("unknown"), None);
        assert_eq!(surface.written_text_count(), 1);
    }

    #[test]
    fn test_mount_order_is_preserved() {
        let mut surface = MemorySurface::new().with_mounts(["b", "a"]);
        assert!(surface.mount_chart("a", empty_spec()));
        assert!(surface.mount_chart("b", empty_spec()));
        assert!(!surface.mount_chart("c", empty_spec()));

        let keys: Vec<&str> = surface.mounted_charts().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_dashboard_declares_all_slots() {
        let surface = MemorySurface::dashboard();
        for mount in mounts::ALL {
            assert!(surface.has_mount(mount));
        }
        assert_eq!(surface.written_text_count(), 0);
        assert!(surface.error().is_none());
    }
}
