// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Non-blocking I/O : poll avec timeout, sinon Tick
// 3. matches! : tester un KeyCode contre plusieurs patterns
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (pas d'événement pendant le timeout)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Crée un gestionnaire avec un tick de 250ms
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// - Si pas d'événement avant le timeout, retourne Ok(Event::Tick)
    /// - Les Release (certains OS) et événements souris/resize -> Tick
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : Convertir KeyEvent en action
// ============================================================================

/// Code de la touche si l'événement est clavier
fn key_code(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) => Some(key.code),
        Event::Tick => None,
    }
}

/// 'q' (quitter, avec confirmation)
pub fn is_quit_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('q') | KeyCode::Char('Q')))
}

/// Échap
pub fn is_escape_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Esc))
}

/// Graphique suivant : → / l / Tab
pub fn is_next_chart_event(event: &Event) -> bool {
    matches!(
        key_code(event),
        Some(KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab)
    )
}

/// Graphique précédent : ← / h / Shift+Tab
pub fn is_previous_chart_event(event: &Event) -> bool {
    matches!(
        key_code(event),
        Some(KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab)
    )
}

/// 'r' : recharger les données
pub fn is_reload_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('r') | KeyCode::Char('R')))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key(KeyCode::Char('q'))));
        assert!(!is_quit_event(&key(KeyCode::Char('a'))));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_chart_navigation_keys() {
        assert!(is_next_chart_event(&key(KeyCode::Right)));
        assert!(is_next_chart_event(&key(KeyCode::Tab)));
        assert!(is_previous_chart_event(&key(KeyCode::Char('h'))));
        assert!(is_previous_chart_event(&key(KeyCode::BackTab)));
        assert!(!is_next_chart_event(&key(KeyCode::Left)));
    }

    #[test]
    fn test_reload_and_escape() {
        assert!(is_reload_event(&key(KeyCode::Char('r'))));
        assert!(is_escape_event(&key(KeyCode::Esc)));
        assert!(!is_reload_event(&Event::Tick));
    }
}
