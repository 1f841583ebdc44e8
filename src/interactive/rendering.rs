//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::output::formatters::{clock, share_text, time_bars};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Clues and picks
            Constraint::Percentage(45), // Outcome and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "dotWord  {}  •  {}",
        app.date,
        clock(app.elapsed_ms())
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Clues
            Constraint::Percentage(45), // Picks
        ])
        .split(area);

    render_clues(f, app, chunks[0]);
    render_picks(f, app, chunks[1]);
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .puzzle
        .clues
        .iter()
        .map(|clue| Line::from(format!("• {clue}")))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Clues ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_picks(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .puzzle
        .picks
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let style = if app.is_done() {
                if *word == app.puzzle.answer {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else if app.picked.as_ref() == Some(word) {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                }
            } else if i == app.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if !app.is_done() && i == app.selected {
                "▶"
            } else {
                " "
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{marker} {}. ", i + 1)),
                Span::styled(word.clone(), style),
            ]))
        })
        .collect();

    let title = if app.locked {
        " Picks (locked) "
    } else {
        " Picks "
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Outcome
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_outcome(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_outcome(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(result) = app.outcome {
        let (verdict, color) = if result.solved {
            ("✅ Solved", Color::Green)
        } else {
            ("❌ Missed", Color::Red)
        };
        let mut lines = vec![Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        if !result.solved {
            lines.push(Line::from(vec![
                Span::raw("Answer: "),
                Span::styled(
                    app.puzzle.answer.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        lines.push(Line::from(format!("Time:   {}s", result.seconds())));
        lines.push(Line::from(time_bars(result.solved, result.seconds())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Share:",
            Style::default().fg(Color::Cyan),
        )));
        lines.extend(
            share_text(app.date, &result)
                .lines()
                .map(|l| Line::from(l.to_string())),
        );
        lines
    } else {
        vec![
            Line::from("Choose the word that fits every clue."),
            Line::from(format!("Clock: {}", clock(app.elapsed_ms()))),
        ]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Outcome ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.is_done() {
        "q: Quit"
    } else {
        "↑/↓ or 1-5: Select | Enter: Choose | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
