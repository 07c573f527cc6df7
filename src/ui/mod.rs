// ============================================================================
// Module : ui
// ============================================================================
// Interface terminal : rend la surface remplie par le pipeline
// ============================================================================

pub mod events;    // Gestion des événements clavier
pub mod dashboard; // Rendu de l'interface principale
pub mod chart;     // Rendu d'une ChartSpec (lignes, barres groupées)

// Re-exports pour simplifier les imports
pub use dashboard::render;
pub use events::{Event, EventHandler};
