use crate::game::{Cell, GameEngine, GameStatus, Line as WinLine, Outcome, PlayerId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_rows = engine.size().height as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),       // Header
            Constraint::Min(board_rows), // Board
            Constraint::Length(3),       // Message
            Constraint::Length(3),       // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, engine.status(), chunks[3]);
}

/// Terminal color for a player's pieces, falling back to the classic red and
/// yellow when no game has been started.
fn player_color(engine: &GameEngine, id: PlayerId) -> Color {
    match engine.player(id) {
        Some(player) => Color::Rgb(player.color.r, player.color.g, player.color.b),
        None => match id {
            PlayerId::One => Color::Red,
            PlayerId::Two => Color::Yellow,
        },
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (status, color) = match (engine.status(), engine.active_player()) {
        (GameStatus::Playing, Some(id)) => (format!("{id}'s turn"), player_color(engine, id)),
        (GameStatus::Over, _) => match engine.outcome() {
            Some(Outcome::Win(id)) => (format!("{id} won!"), player_color(engine, id)),
            _ => ("Tie!".to_string(), Color::White),
        },
        _ => ("Press Enter to start".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let size = engine.size();
    let show_selector = engine.status() == GameStatus::Playing;
    let winning_line: Option<WinLine> = match engine.outcome() {
        Some(Outcome::Win(id)) => engine.board().and_then(|board| board.winning_line(id)),
        _ => None,
    };

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..size.width {
        let label = format!("{:^3}", col + 1);
        if show_selector && col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let bar = "═".repeat(size.width * 3 + 1);
    lines.push(Line::from(format!("  ╔{bar}╗")));

    for row in 0..size.height {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..size.width {
            let cell = engine
                .board()
                .and_then(|board| board.get(row, col))
                .unwrap_or(Cell::Empty);
            let span = match cell {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(id) => {
                    let mut style = Style::default().fg(player_color(engine, id));
                    if winning_line.is_some_and(|line| line.contains(&(row, col))) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{bar}╝")));

    if show_selector {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..size.width {
            if col == selected_column {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, status: GameStatus, area: Rect) {
    let enter = match status {
        GameStatus::Idle => "Start",
        GameStatus::Playing => "Drop",
        GameStatus::Over => "Restart",
    };
    let line = Line::from(format!(
        "←/→ 1-9: Column  |  Enter: {enter}  |  R: Reset  |  Q: Quit"
    ));

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
