// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état du tableau de bord dans le terminal
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Enum pour l'état de chargement : Loading / Failed / Ready
// 3. La surface remplie par le pipeline est possédée par App ; l'UI la lit
// ============================================================================

use chrono::{DateTime, Local};

use crate::charts::ChartSpec;
use crate::surface::MemorySurface;

/// État du chargement des données
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Chargement en cours
    Loading,

    /// Échec : message destiné à l'utilisateur
    Failed(String),

    /// Données chargées et rendues sur la surface
    Ready,
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Surface remplie par le dernier chargement
    pub surface: MemorySurface,

    pub state: LoadState,

    /// Index du graphique affiché parmi les graphiques montés
    pub selected_chart: usize,

    /// Two-step quit : première pression de 'q' -> confirmation
    pub confirm_quit: bool,

    /// Source des données (affichée dans l'en-tête)
    pub source_label: String,

    /// Horodatage du dernier chargement réussi
    pub loaded_at: Option<DateTime<Local>>,
}

impl App {
    /// Crée une application en cours de chargement
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            running: true,
            surface: MemorySurface::dashboard(),
            state: LoadState::Loading,
            selected_chart: 0,
            confirm_quit: false,
            source_label: source_label.into(),
            loaded_at: None,
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ========================================================================
    // Chargement
    // ========================================================================

    /// Repart d'une surface vide (équivalent d'un rechargement de page)
    pub fn start_loading(&mut self) {
        self.state = LoadState::Loading;
        self.surface = MemorySurface::dashboard();
        self.selected_chart = 0;
    }

    /// Installe la surface produite par le pipeline
    ///
    /// L'état est dérivé de la surface : un message d'erreur signifie que le
    /// chargement a échoué et que rien d'autre n'a été rendu.
    pub fn finish_loading(&mut self, surface: MemorySurface, loaded_at: Option<DateTime<Local>>) {
        self.state = match surface.error() {
            Some(message) => LoadState::Failed(message.to_string()),
            None => LoadState::Ready,
        };
        if loaded_at.is_some() {
            self.loaded_at = loaded_at;
        }
        self.surface = surface;
        self.selected_chart = 0;
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    // ========================================================================
    // Navigation entre les graphiques
    // ========================================================================

    /// Nombre de graphiques montés
    pub fn chart_count(&self) -> usize {
        self.surface.mounted_charts().count()
    }

    /// Graphique affiché (clé de montage + spécification)
    pub fn selected_chart(&self) -> Option<(&str, &ChartSpec)> {
        self.surface.mounted_charts().nth(self.selected_chart)
    }

    /// Graphique suivant (boucle)
    pub fn next_chart(&mut self) {
        let count = self.chart_count();
        if count > 0 {
            self.selected_chart = (self.selected_chart + 1) % count;
        }
    }

    /// Graphique précédent (boucle)
    pub fn previous_chart(&mut self) {
        let count = self.chart_count();
        if count > 0 {
            self.selected_chart = (self.selected_chart + count - 1) % count;
        }
    }

    // ========================================================================
    // Confirmation de sortie
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
