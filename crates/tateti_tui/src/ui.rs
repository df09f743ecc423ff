//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::rc::Rc;
use tateti::{Cell, Mark, Position};

use crate::app::{App, MessageKind};

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    // Title
    let title = Paragraph::new("tateti - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    // Status
    let status = Paragraph::new(app.message())
        .style(message_style(app.kind()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    // Turn
    let player = app.engine().current_player();
    let turn = Paragraph::new(Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(player.mark().to_string(), mark_style(player.mark())),
        Span::raw(format!(" {}", player)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(turn, chunks[3]);

    draw_score(frame, chunks[4], app);

    let help = Paragraph::new(
        "Arrows: move | Enter/1-9/click: play | r: reset game | s: reset score | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

/// Finds the board cell under a screen coordinate, for mouse clicks.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<Position> {
    let cells = cell_areas(screen_layout(area)[1]);
    Position::ALL.into_iter().find(|pos| {
        let rect = cells[pos.to_index()];
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    })
}

fn screen_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Turn
            Constraint::Length(3),            // Score
            Constraint::Length(1),            // Help
        ])
        .split(area)
}

/// Screen rectangles of the 9 cells, row-major.
fn cell_areas(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = board_rows(board_area);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = board_cols(rows[row * 2]);
        for col in 0..3 {
            cells[row * 3 + col] = cols[col * 2];
        }
    }
    cells
}

fn board_rows(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area)
}

fn board_cols(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = board_rows(board_area);

    for row in 0..3 {
        let cols = board_cols(rows[row * 2]);
        for col in 0..3 {
            if let Some(pos) = Position::from_index(row * 3 + col) {
                draw_cell(frame, cols[col * 2], app, pos);
            }
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let cell = app.engine().board().get(pos);

    let (symbol, base_style) = match cell {
        Cell::Empty => (format!("{}", pos.to_index() + 1), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    let on_line = app.winning_line().is_some_and(|line| line.contains(pos));
    let style = cell_style(base_style, pos == app.cursor(), on_line);

    // Middle of the three rows.
    let paragraph = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Winning cells keep their green background under the cursor.
fn cell_style(base: Style, under_cursor: bool, on_line: bool) -> Style {
    match (under_cursor, on_line) {
        (true, true) => base.bg(Color::Green).fg(Color::Black),
        (true, false) => base.bg(Color::White).fg(Color::Black),
        (false, true) => base.bg(Color::Green),
        (false, false) => base,
    }
}

fn draw_score(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let tally = engine.tally();
    let players = engine.players();

    let score = Paragraph::new(Line::from(vec![
        Span::styled(format!("{}: {}", players.get(Mark::X), tally.x_wins()), mark_style(Mark::X)),
        Span::raw("   "),
        Span::styled(format!("{}: {}", players.get(Mark::O), tally.o_wins()), mark_style(Mark::O)),
        Span::raw("   "),
        Span::styled(format!("Draws: {}", tally.draws()), Style::default().fg(Color::Yellow)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(score, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn message_style(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Info => Style::default().fg(Color::Yellow),
        MessageKind::Win => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        MessageKind::Draw => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        MessageKind::Error => Style::default().fg(Color::Red),
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use tateti::Players;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_message_and_score() {
        let mut app = App::new(Players::new("Ana", "Beto"));
        app.handle_key(KeyCode::Char('1')).unwrap();

        let screen = render(&app);
        assert!(screen.contains("Beto's turn"));
        assert!(screen.contains("Ana: 0"));
        assert!(screen.contains("Beto: 0"));
        assert!(screen.contains("Draws: 0"));
        assert!(screen.contains(" X "));
    }

    #[test]
    fn test_cursor_keeps_win_highlight() {
        let base = mark_style(Mark::X);
        assert_eq!(cell_style(base, true, true).bg, Some(Color::Green));
        assert_eq!(cell_style(base, true, true).fg, Some(Color::Black));
        assert_eq!(cell_style(base, false, true).bg, Some(Color::Green));
        assert_eq!(cell_style(base, true, false).bg, Some(Color::White));
        assert_eq!(cell_style(base, false, false), base);
    }

    #[test]
    fn test_winning_cell_under_cursor_renders_green() {
        let mut app = App::new(Players::new("Ana", "Beto"));
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key)).unwrap();
        }
        assert_eq!(app.cursor(), Position::TopRight);

        let area = Rect::new(0, 0, 90, 24);
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let rect = cell_areas(screen_layout(area)[1])[Position::TopRight.to_index()];
        let buffer = terminal.backend().buffer();
        let marked = (rect.x..rect.x + rect.width)
            .map(|x| &buffer[(x, rect.y + 1)])
            .find(|c| c.symbol() == "X")
            .unwrap();
        assert_eq!(marked.bg, Color::Green);
    }

    #[test]
    fn test_click_maps_to_cell() {
        let area = Rect::new(0, 0, 90, 24);
        let cells = cell_areas(screen_layout(area)[1]);

        for pos in Position::ALL {
            let rect = cells[pos.to_index()];
            assert_eq!(cell_at(area, rect.x + 1, rect.y + 1), Some(pos));
        }
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
