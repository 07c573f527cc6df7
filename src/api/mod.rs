// ============================================================================
// Module : api
// ============================================================================
// Récupération des documents JSON publiés par le club (HTTP ou répertoire)
// ============================================================================

pub mod loader; // Chargement parallèle des quatre documents

// Re-export des fonctions principales
pub use loader::{fetch_json, load_all, try_load_all, DataSource, LoadError};
