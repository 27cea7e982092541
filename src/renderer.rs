use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::board::{Board, BoardState, Cell};
use crate::config::{
    BORDER_HALF_BLOCK, CELL_WIDTH, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD,
};
use crate::geometry::{GridSize, Position};
use crate::ui::menu::{render_game_over_screen, render_victory_menu};

const HELP_LINE: &str = "arrows/WASD steer  ·  Q quit";

/// Renders the full frame from an immutable board snapshot.
///
/// A lost game replaces the grid with the game-over screen; a won game keeps
/// the filled grid visible under the victory popup.
pub fn render(frame: &mut Frame<'_>, board: &Board) {
    let area = frame.area();
    let [play_area, help_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(HELP_LINE))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let BoardState::Lost {
        reason,
        final_length,
    } = board.state()
    {
        render_game_over_screen(frame, play_area, *reason, *final_length);
        return;
    }

    let field = centered_field(play_area, board.size());
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(Color::White).bg(Color::DarkGray))
        .title(" snake ");
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_cells(frame, inner, board);

    if matches!(board.state(), BoardState::Won { .. }) {
        render_victory_menu(frame, play_area, board.snake_length());
    }
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, board: &Board) {
    let buffer = frame.buffer_mut();

    for row in board.grid() {
        for position in row {
            let Some((x, y)) = logical_to_terminal(inner, board.size(), position) else {
                continue;
            };

            let (glyph, style) = match board.cell(position) {
                Cell::Food => (GLYPH_FOOD, Style::new().fg(Color::Red)),
                Cell::SnakeHead => (
                    GLYPH_SNAKE_HEAD,
                    Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Cell::SnakeBody => (GLYPH_SNAKE_BODY, Style::new().fg(Color::Green)),
                Cell::Empty => (GLYPH_EMPTY, Style::new().fg(Color::DarkGray)),
            };

            buffer.set_string(x, y, glyph, style);
        }
    }
}

/// Bordered field sized to the grid, centred in `area` and clipped to it.
fn centered_field(area: Rect, size: GridSize) -> Rect {
    let width = size.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = size.height.saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [field] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    field
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
