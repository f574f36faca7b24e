//! Application view logic (View in Elm architecture)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use alp_common::ModelTier;

use crate::{
    application::AppModel,
    message::{level_color, PaneId},
};

/// Apply focus-dependent styling to the prompt editor.
pub fn style_input_editor(textarea: &mut TextArea<'static>, model: &AppModel) {
    let title = if model.comparison_mode {
        " Input (comparison mode) "
    } else {
        " Input "
    };

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style(model, PaneId::Input)),
    );
    textarea.set_cursor_line_style(Style::default());
}

/// Render the complete application UI
pub fn render_app(model: &AppModel, textarea: &TextArea<'_>, frame: &mut Frame) {
    let area = frame.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(12),   // Dashboard body
            Constraint::Length(1), // Status line
        ])
        .split(area);

    render_title(frame, outer[0]);

    if model.comparison_mode {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(10)])
            .split(outer[1]);
        render_body(model, textarea, frame, body[0]);
        render_comparison(model, frame, body[1]);
    } else {
        render_body(model, textarea, frame, outer[1]);
    }

    render_status_line(model, frame, outer[2]);

    if model.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![Span::styled(
        "Adaptive LLaMA Proxy (ALP)",
        Style::default().add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Two-column dashboard: prompt/analysis/response on the left, model
/// selection and performance on the right.
fn render_body(model: &AppModel, textarea: &TextArea<'_>, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Prompt editor
            Constraint::Length(9), // Complexity breakdown
            Constraint::Min(5),    // Response
        ])
        .split(columns[0]);

    frame.render_widget(textarea, left[0]);
    render_complexity(model, frame, left[1]);
    render_response(model, frame, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Model selection
            Constraint::Length(9), // Performance metrics
            Constraint::Min(5),    // Model usage distribution
        ])
        .split(columns[1]);

    render_model_selection(model, frame, right[0]);
    render_performance(model, frame, right[1]);
    render_dashboard(model, frame, right[2]);
}

fn render_complexity(model: &AppModel, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Task Complexity ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(inner);

    let factors = &model.complexity.factors;
    let pending = if model.analysis_pending { " (recomputing...)" } else { "" };

    let lines = vec![
        Line::from(vec![
            Span::raw("Level: "),
            Span::styled(
                model.complexity.level.as_str(),
                Style::default()
                    .fg(level_color(model.complexity.level))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(pending),
        ]),
        Line::from(format!("Input Length: {} characters", factors.length)),
        Line::from(format!("Unique Words: {}", factors.unique_words)),
        Line::from(format!(
            "Avg. Word Length: {:.2} characters",
            factors.average_word_length
        )),
        Line::from(format!("Special Characters: {}", factors.special_characters)),
    ];
    frame.render_widget(Paragraph::new(lines), rows[0]);

    let score_gauge = Gauge::default()
        .gauge_style(Style::default().fg(level_color(model.complexity.level)))
        .ratio((model.complexity.score / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1} / 100", model.complexity.score));
    frame.render_widget(score_gauge, rows[1]);
}

fn render_model_selection(model: &AppModel, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Model Selection ");

    let lines = if let Some(response) = &model.last_response {
        vec![
            Line::from(vec![
                Span::raw("Selected Model: "),
                Span::styled(
                    response.model.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Reason: {} task complexity detected",
                response.metrics.task_complexity
            )),
            Line::from(format!(
                "Next submission: {}",
                model.selected_tier().label()
            )),
        ]
    } else {
        vec![
            Line::from("No model selected yet."),
            Line::from("Send a prompt to see the selection."),
            Line::from(format!(
                "Next submission: {}",
                model.selected_tier().label()
            )),
        ]
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_response(model: &AppModel, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Response ")
        .border_style(border_style(model, PaneId::Response));

    let paragraph = if model.is_loading {
        Paragraph::new("Sending...").block(block)
    } else if let Some(response) = &model.last_response {
        Paragraph::new(response.response.clone())
            .wrap(Wrap { trim: false })
            .scroll((model.response_scroll, 0))
            .block(block)
    } else {
        Paragraph::new("No response yet. Press Enter to send the prompt.").block(block)
    };

    frame.render_widget(paragraph, area);
}

fn render_performance(model: &AppModel, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Performance Metrics ");

    let mut lines = Vec::new();
    if let Some(response) = &model.last_response {
        let metrics = &response.metrics;
        lines.push(Line::from(format!("Latency: {:.0} ms", metrics.latency)));
        lines.push(Line::from(format!("Memory Usage: {:.1}%", metrics.memory_usage)));
        lines.push(Line::from(format!("Task Complexity: {}", metrics.task_complexity)));
        lines.push(Line::from(format!(
            "Memory Savings: {:.1} GB",
            metrics.memory_savings
        )));
    } else {
        lines.push(Line::from("No metrics yet."));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Session Avg Latency: {:.0} ms",
        model.cumulative.average_latency
    )));
    lines.push(Line::from(format!(
        "Session Requests: {}",
        model.cumulative.total_requests
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Model usage distribution, one gauge per tier.
fn render_dashboard(model: &AppModel, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Model Usage Distribution ")
        .border_style(border_style(model, PaneId::Dashboard));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(response) = &model.last_response else {
        frame.render_widget(
            Paragraph::new("Usage data appears after the first response."),
            inner,
        );
        return;
    };

    let usage = response.metrics.model_usage;
    let total = usage.total().max(1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    for (i, tier) in ModelTier::all().iter().enumerate() {
        let count = usage.for_tier(*tier);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(tier_color(*tier)))
            .ratio(count as f64 / total as f64)
            .label(format!("{}: {}", tier.label(), count));
        frame.render_widget(gauge, rows[i]);
    }
}

fn render_comparison(model: &AppModel, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Comparison Mode (Ctrl+K to exit) ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(inner);

    for (i, tier) in ModelTier::all().iter().enumerate() {
        let title = Line::from(Span::styled(
            tier.label(),
            Style::default()
                .fg(tier_color(*tier))
                .add_modifier(Modifier::BOLD),
        ));

        let mut lines = vec![title];
        if model.comparison_loading {
            lines.push(Line::from("Running..."));
        } else if let Some(result) = model.comparison.get(*tier) {
            lines.push(Line::from(format!("Latency: {:.0} ms", result.metrics.latency)));
            lines.push(Line::from(format!(
                "Memory: {:.1}%",
                result.metrics.memory_usage
            )));
            lines.push(Line::from(result.response.clone()));
        } else {
            lines.push(Line::from("No data available"));
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            columns[i],
        );
    }
}

fn render_status_line(model: &AppModel, frame: &mut Frame, area: Rect) {
    let line = if let Some(status) = &model.status_message {
        Line::from(vec![
            Span::styled(
                format!("{} ", status.severity.symbol()),
                Style::default().fg(status.severity.color()),
            ),
            Span::styled(
                status.message.clone(),
                Style::default().fg(status.severity.color()),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Enter send · Alt+Enter newline · Ctrl+K compare · Tab focus · F1 help · Esc quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.min(56);
    let popup_height = area.height.min(14);
    let popup_area = Rect {
        x: (area.width.saturating_sub(popup_width)) / 2,
        y: (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            " ALP Dashboard Help ",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(" Enter       Submit the prompt"),
        Line::from(" Alt+Enter   Insert a newline"),
        Line::from(" Ctrl+K      Toggle comparison mode"),
        Line::from(" Tab         Focus next pane"),
        Line::from(" Up/Down     Scroll response (when focused)"),
        Line::from(" F1          Toggle this help"),
        Line::from(" Esc/Ctrl+C  Quit"),
        Line::from(""),
        Line::from(" Press Esc to close"),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help_widget, popup_area);
}

fn border_style(model: &AppModel, pane: PaneId) -> Style {
    if model.focused_pane == pane {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn tier_color(tier: ModelTier) -> Color {
    match tier {
        ModelTier::Full => Color::Red,
        ModelTier::EightBit => Color::Blue,
        ModelTier::FourBit => Color::Yellow,
    }
}
