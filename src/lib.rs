// ============================================================================
// ClubStats - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;      // Chargement des documents JSON
pub mod models;   // Structures de données
pub mod surface;  // Surface d'affichage (zones de texte, montages)
pub mod charts;   // Spécifications de graphiques + tendance
pub mod summary;  // Chiffres clés
pub mod pipeline; // Chargement puis rendu
pub mod config;   // Configuration (.env, variables, arguments)
pub mod app;      // État de l'application
pub mod ui;       // Interface utilisateur
