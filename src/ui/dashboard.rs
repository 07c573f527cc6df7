// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Dessine la surface remplie par le pipeline : chiffres clés, graphique
// sélectionné, phrase de tendance
//
// CONCEPTS RATATUI :
// 1. Layout : header / chiffres / graphique / tendance / footer
// 2. Paragraph + Line + Span : texte stylé
// 3. Le rendu ne fait que lire App (&App), jamais modifier
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, LoadState};
use crate::surface::slots;
use crate::ui::chart::render_chart_spec;

/// Dessine l'interface complète selon l'état de chargement
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, app, chunks[0]);

    match &app.state {
        LoadState::Loading => render_message(frame, chunks[1], "Daten werden geladen...", Color::Yellow),
        LoadState::Failed(message) => render_message(frame, chunks[1], message, Color::Red),
        LoadState::Ready => render_main_content(frame, app, chunks[1]),
    }

    render_footer(frame, app, chunks[2]);
}

// ============================================================================
// Layout : Découpage de l'écran
// ============================================================================

/// Crée le layout principal (header, content, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Contenu
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

// ============================================================================
// Header
// ============================================================================

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" TSV Marquartstein - Statistiken ")
        .title_alignment(Alignment::Center);

    let loaded = app
        .loaded_at
        .map(|at| format!("Stand: {}", at.format("%d.%m.%Y %H:%M")))
        .unwrap_or_else(|| "Noch nicht geladen".to_string());

    let text = Line::from(vec![
        Span::styled(&app.source_label, Style::default().fg(Color::Gray)),
        Span::raw("  ·  "),
        Span::styled(loaded, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
    ]);

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Contenu principal
// ============================================================================

/// Chiffres clés en haut, graphique au milieu, tendance en bas
fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(slots::SEASON.len() as u16 + 2), // Chiffres clés
            Constraint::Min(8),                                 // Graphique
            Constraint::Length(3),                              // Tendance
        ])
        .split(area)
        .to_vec();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0])
        .to_vec();

    render_stat_panel(frame, app, " ⚽ Saisonübersicht ", &slots::SEASON, columns[0]);
    render_stat_panel(frame, app, " 🏃 Training & Teilnahme ", &slots::TRAINING, columns[1]);

    match app.selected_chart() {
        Some((_, spec)) => render_chart_spec(frame, spec, (app.selected_chart, app.chart_count()), rows[1]),
        None => render_message(frame, rows[1], "Keine Diagramme vorhanden", Color::Gray),
    }

    render_trend(frame, app, rows[2]);
}

/// Panneau "libellé : valeur" pour une liste de zones
fn render_stat_panel(frame: &mut Frame, app: &App, title: &str, keys: &[&str], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title.to_string());

    let lines: Vec<Line> = keys
        .iter()
        .map(|key| {
            let value = app.surface.text(key).unwrap_or("–");
            Line::from(vec![
                Span::raw(format!(" {:<20}", slots::label(key))),
                Span::styled(value.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Phrase de tendance (vide si la série était trop courte)
fn render_trend(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text = app.surface.text(slots::TREND_INSIGHT).unwrap_or("");
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow),
    )))
    .block(block)
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Message centré (chargement, erreur, absence de données)
fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Footer : raccourcis clavier
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Nochmal ", key_style),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(" zum Beenden, andere Taste zum Abbrechen ⚠", key_style),
        ])
    } else {
        Line::from(vec![
            Span::styled("[q]", key_style),
            Span::raw(" Beenden  "),
            Span::styled("[← → / h l / Tab]", key_style),
            Span::raw(" Diagramm  "),
            Span::styled("[r]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" Neu laden"),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================
