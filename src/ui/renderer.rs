use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::{Cell, ColorId, GameState, GameStatus};

pub fn color(id: ColorId) -> Color {
    match id {
        ColorId::Cyan => Color::Cyan,
        ColorId::Blue => Color::Blue,
        ColorId::Orange => Color::LightRed,
        ColorId::Yellow => Color::Yellow,
        ColorId::Green => Color::Green,
        ColorId::Purple => Color::Magenta,
        ColorId::Red => Color::Red,
    }
}

pub fn ui(f: &mut Frame, game: &GameState) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2;
    let board_width = BOARD_WIDTH as u16 * 2 + 2; // 2 chars per cell

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_height),
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_width),
            Constraint::Length(18),      // Info panel
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, game, board_area);
    render_info(f, game, info_area);

    match game.status() {
        GameStatus::Paused => render_paused_overlay(f, board_area),
        GameStatus::GameOver => render_game_over_overlay(f, game, board_area),
        GameStatus::Running => {}
    }
}

fn render_board(f: &mut Frame, game: &GameState, area: Rect) {
    let mut cells: Vec<[Cell; BOARD_WIDTH]> = game.board().rows().to_vec();

    let piece = game.piece();
    for (x, y) in piece.blocks() {
        if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
            cells[y as usize][x as usize] = Cell::Filled(piece.color);
        }
    }

    let board_lines: Vec<Line> = cells
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => Span::styled(" .", Style::default().fg(Color::DarkGray)),
                    Cell::Filled(id) => Span::styled("██", Style::default().fg(color(*id))),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default()
               .borders(Borders::ALL)
               .title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, game: &GameState, area: Rect) {
    let status = match game.status() {
        GameStatus::Running => Span::styled("Playing", Style::default().fg(Color::Green)),
        GameStatus::Paused => Span::styled("Paused", Style::default().fg(Color::Yellow)),
        GameStatus::GameOver => Span::styled("Game over", Style::default().fg(Color::Red)),
    };

    let info_text = vec![
        Line::from(vec![Span::styled("Score", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.score().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Lines", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(game.lines().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![status]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("←/→  move")]),
        Line::from(vec![Span::raw("↓    drop")]),
        Line::from(vec![Span::raw("↑    rotate")]),
        Line::from(vec![Span::raw("P    pause")]),
        Line::from(vec![Span::raw("R    restart")]),
        Line::from(vec![Span::raw("Q    quit")]),
    ];

    let info_widget = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(info_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_paused_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 30, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("PAUSED", Style::default().fg(Color::Yellow))]),
        Line::from(vec![Span::raw("P to resume")]),
    ];

    let paused_widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paused_widget, popup_area);
}

fn render_game_over_overlay(f: &mut Frame, game: &GameState, area: Rect) {
    let popup_area = centered_rect(80, 50, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Score: {}", game.score()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R to restart")]),
        Line::from(vec![Span::raw("Q to quit")]),
    ];

    let game_over_widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Game Over"))
        .alignment(Alignment::Center);

    f.render_widget(game_over_widget, popup_area);
}
