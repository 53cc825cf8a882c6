//! TUI rendering with ratatui
//!
//! Game board, input box and share panel.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Classification, GuessRecord};
use crate::game::{MAX_GUESSES, Terminal, score_ratio, share_summary};
use crate::output::formatters::tile_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Width of one move tile on the board
const TILE_WIDTH: usize = 5;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
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
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧊 ALGLE - Guess the Rubik's Cube Algorithm")
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

/// Background color for a classification
const fn tile_color(classification: Classification) -> Color {
    match classification {
        Classification::Exact => Color::Green,
        Classification::Partial => Color::Yellow,
        Classification::Absent => Color::DarkGray,
    }
}

fn record_line(record: &GuessRecord, attempt: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{attempt:>2}  "),
        Style::default().fg(Color::DarkGray),
    )];

    for item in record.items() {
        spans.push(Span::styled(
            tile_text(item, TILE_WIDTH),
            Style::default()
                .fg(Color::Black)
                .bg(tile_color(item.classification))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn empty_line(attempt: usize, width: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{attempt:>2}  "),
        Style::default().fg(Color::DarkGray),
    )];
    for _ in 0..width {
        spans.push(Span::styled(
            format!("{:^TILE_WIDTH$}", "·"),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines: Vec<Line> = session
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| record_line(record, i + 1))
        .collect();

    for attempt in session.attempts_used() + 1..=MAX_GUESSES {
        lines.push(empty_line(attempt, session.solution_len()));
    }

    if session.terminal() == Terminal::Exhausted {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Solution: "),
            Span::styled(
                session.solution().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Puzzle #{} ", session.day()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages or share text
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);

    if app.show_share {
        render_share(f, app, chunks[1]);
    } else {
        render_messages(f, app, chunks[1]);
    }
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts_used();
    let percent = (used * 100 / MAX_GUESSES).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_GUESSES} used"));

    f.render_widget(gauge, area);
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

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let share = Paragraph::new(share_summary(&app.session))
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(share, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | 's' share | 'q' quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(
                " Enter {} moves separated by spaces | Enter to submit ",
                app.session.solution_len()
            ),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
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
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let outcome = match app.session.terminal() {
        Terminal::InProgress => "Playing".to_string(),
        Terminal::Won => format!("Solved {}", score_ratio(&app.session)),
        Terminal::Exhausted => format!("Failed {}", score_ratio(&app.session)),
    };
    let status = Paragraph::new(format!("Status: {outcome}")).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let legend = Line::from(vec![
        Span::styled(" exact ", Style::default().fg(Color::Black).bg(Color::Green)),
        Span::raw(" "),
        Span::styled(" face ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(" miss ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(legend).alignment(Alignment::Center), chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
        InputMode::GameOver => "q: Quit | s: Share",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Session;
    use crate::puzzle::PuzzleDay;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_guess() {
        let session = Session::new(PuzzleDay::new(12).unwrap(), "R U R' U'")
            .submit_guess("R U2 F")
            .unwrap();
        let app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Puzzle #12"));
        assert!(text.contains("U2"));
        assert!(text.contains("1/8 used"));
    }

    #[test]
    fn renders_share_panel() {
        let session = Session::new(PuzzleDay::new(2).unwrap(), "R U")
            .submit_guess("R U")
            .unwrap();
        let mut app = App::new(session);
        app.show_share = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Number of Guesses: 1/8"));
        assert!(text.contains("Solved 1/8"));
    }
}
