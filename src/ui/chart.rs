// ============================================================================
// Chart - Rendu d'une ChartSpec dans le terminal
// ============================================================================
// Traduit une spécification déclarative en widgets ratatui
//
// CONCEPTS RATATUI :
// 1. Chart widget : graphique ligne (type "line")
// 2. BarChart + BarGroup : barres groupées par label (type "bar")
// 3. Couleurs RGB : les couleurs hexadécimales du thème du club
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::charts::{ChartKind, ChartSpec};

/// Largeur maximale d'une barre
const MAX_BAR_WIDTH: u16 = 6;

// ============================================================================
// Fonction principale de rendu du graphique
// ============================================================================

/// Dessine un graphique monté ; `position` = (index, total) pour le titre
pub fn render_chart_spec(frame: &mut Frame, spec: &ChartSpec, position: (usize, usize), area: Rect) {
    let title = format!(
        " {} ({}/{}) ",
        spec.title().unwrap_or("Diagramm"),
        position.0 + 1,
        position.1
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    if spec.data.labels.is_empty() || spec.data.datasets.is_empty() {
        render_no_data(frame, block, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Légende au-dessus, graphique en dessous
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner)
        .to_vec();

    render_legend(frame, spec, chunks[0]);

    match spec.kind {
        ChartKind::Line => render_line_chart(frame, spec, chunks[1]),
        ChartKind::Bar => render_bar_chart(frame, spec, chunks[1]),
    }
}

// ============================================================================
// Légende
// ============================================================================

fn render_legend(frame: &mut Frame, spec: &ChartSpec, area: Rect) {
    let mut spans = Vec::new();
    for dataset in &spec.data.datasets {
        spans.push(Span::styled("■ ", Style::default().fg(parse_hex_color(&dataset.border_color))));
        let suffix = if dataset.is_secondary_axis() { " (rechts)" } else { "" };
        spans.push(Span::raw(format!("{}{}   ", dataset.label, suffix)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Graphique ligne
// ============================================================================

/// Dessine les séries en lignes (x = index du label)
fn render_line_chart(frame: &mut Frame, spec: &ChartSpec, area: Rect) {
    // Les points doivent vivre jusqu'au rendu : Dataset les emprunte
    let series: Vec<Vec<(f64, f64)>> = spec
        .data
        .datasets
        .iter()
        .map(|d| d.data.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect())
        .collect();

    let datasets: Vec<Dataset> = spec
        .data
        .datasets
        .iter()
        .zip(series.iter())
        .map(|(dataset, points)| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(parse_hex_color(&dataset.border_color)))
                .data(points)
        })
        .collect();

    let (y_min, y_max) = y_bounds(spec.data.datasets.iter().flat_map(|d| d.data.iter().copied()));
    let x_max = (spec.data.labels.len().saturating_sub(1)).max(1) as f64;

    let x_axis = Axis::default()
        .title(spec.axis_title("x").unwrap_or(""))
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, x_max])
        .labels(x_labels(&spec.data.labels).into_iter().map(Span::raw).collect());

    let y_axis = Axis::default()
        .title(spec.axis_title("y").unwrap_or(""))
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format!("{:.1}", y_min)),
            Span::raw(format!("{:.1}", (y_min + y_max) / 2.0)),
            Span::raw(format!("{:.1}", y_max)),
        ]);

    // Sans .name() sur les Dataset, ratatui n'ajoute pas sa propre légende
    let chart = Chart::new(datasets).x_axis(x_axis).y_axis(y_axis);

    frame.render_widget(chart, area);
}

// ============================================================================
// Graphique en barres groupées
// ============================================================================

/// Une groupe par label, une barre par série (y compris la ligne du total)
fn render_bar_chart(frame: &mut Frame, spec: &ChartSpec, area: Rect) {
    let series_count = spec.data.datasets.len() as u16;
    let group_count = spec.data.labels.len() as u16;
    let bar_width = bar_width(area.width, group_count, series_count);

    let groups: Vec<BarGroup> = spec
        .data
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let bars: Vec<Bar> = spec
                .data
                .datasets
                .iter()
                .map(|dataset| {
                    let value = dataset.data.get(i).copied().unwrap_or(0.0);
                    let color = parse_hex_color(&dataset.border_color);
                    Bar::default()
                        .value(value.max(0.0).round() as u64)
                        .text_value(format_value(value))
                        .style(Style::default().fg(color))
                        .value_style(Style::default().fg(Color::Black).bg(color))
                })
                .collect();

            BarGroup::default()
                .label(Line::from(label.clone()))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(1)
        .label_style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC));

    for group in groups {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

// ============================================================================
// Helpers
// ============================================================================

/// Message quand le graphique n'a aucune donnée
fn render_no_data(frame: &mut Frame, block: Block, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Keine Daten vorhanden", Style::default().fg(Color::Gray))),
    ];
    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// "#53a612" (ou "#53a612CC") -> Color::Rgb ; gris si illisible
pub fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');

    // get() plutôt que l'indexation : pas de panique hors frontière UTF-8
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .filter(|s| s.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}

/// Bornes de l'axe Y : à partir de zéro, 10% de marge au-dessus
pub fn y_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let max = if max <= min { min + 1.0 } else { max + (max - min) * 0.1 };
    (min, max)
}

/// Labels de l'axe X : premier, milieu, dernier
pub fn x_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => vec![labels[0].clone(), labels[1].clone()],
        n => vec![labels[0].clone(), labels[n / 2].clone(), labels[n - 1].clone()],
    }
}

/// Largeur des barres pour que tous les groupes tiennent
fn bar_width(area_width: u16, groups: u16, series: u16) -> u16 {
    if groups == 0 || series == 0 {
        return 1;
    }
    // Chaque groupe : `series` barres + 1 colonne d'espace
    let per_group = area_width / groups;
    (per_group.saturating_sub(1) / series).clamp(1, MAX_BAR_WIDTH)
}

/// 12.0 -> "12", 10.4 -> "10.4"
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
