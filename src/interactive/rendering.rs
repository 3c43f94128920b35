//! TUI rendering with ratatui
//!
//! Board, feedback history and statistics for the code-breaking game.

use super::app::{App, InputMode, MessageStyle, key_for_color};
use crate::output::formatters::{color_symbol, feedback_pegs};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the Code")
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

fn pegs_line(pegs: &[u8]) -> String {
    pegs.iter()
        .map(|&c| color_symbol(c, false))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .history
        .iter()
        .map(|record| {
            let won = record.feedback.is_win(app.config.positions());
            let style = if won {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}: ", record.turn), style),
                Span::raw(pegs_line(record.guess.pegs())),
                Span::raw("  │ "),
                Span::styled(
                    format!("{} {}", record.feedback, feedback_pegs(record.feedback)),
                    Style::default().fg(Color::Yellow),
                ),
            ]))
        })
        .collect();

    if app.is_revealed() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled("Secret: ", Style::default().fg(Color::Magenta)),
            Span::raw(pegs_line(app.game.secret().pegs())),
        ])));
    }

    let board = List::new(items).block(
        Block::default()
            .title(format!(
                " Board ({} pegs, {} colors) ",
                app.config.positions(),
                app.config.colors()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Turns gauge
            Constraint::Percentage(40), // Color legend
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_turns(f, app, chunks[0]);
    render_legend(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_turns(f: &mut Frame, app: &App, area: Rect) {
    let used = app.history.len();
    let progress_pct = (used as f64 / app.max_turns as f64 * 100.0).min(100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Turns ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{used}/{} used", app.max_turns));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = (0..app.config.colors())
        .map(|c| Span::raw(format!("{}={} ", key_for_color(c), color_symbol(c, false))))
        .collect();

    let legend = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Keys ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    f.render_widget(legend, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => {
            let missing = app.config.positions() - app.input.len();
            (
                format!(" Turn {} | Type colors, Enter to submit ", app.state.turn()),
                format!("{} {}", pegs_line(&app.input), "_ ".repeat(missing)),
                Color::Yellow,
            )
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let mut by_turn: Vec<(usize, usize)> = app
        .stats
        .guess_distribution
        .iter()
        .map(|(&turns, &n)| (turns, n))
        .collect();
    by_turn.sort_unstable();
    let wins: Vec<String> = by_turn
        .iter()
        .map(|(turns, n)| format!("{turns}:{n}"))
        .collect();
    let distribution = Paragraph::new(format!("Wins by turn: {}", wins.join(" ")))
        .alignment(Alignment::Center);
    f.render_widget(distribution, chunks[1]);

    let help_text = if app.is_revealed() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Backspace: Undo peg | ?: Give up"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
