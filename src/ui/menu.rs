use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::board::DeathReason;

const FOOTER_LINES: [&str; 2] = ["[Enter]/[Space]/[R] Play Again", "[Q]/[Esc] Quit"];

/// Draws the game-over screen in place of the playing field.
pub fn render_game_over_screen(
    frame: &mut Frame<'_>,
    area: Rect,
    reason: DeathReason,
    final_length: usize,
) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("GAME OVER"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        title_row,
    );

    let mut lines = vec![
        Line::from(match reason {
            DeathReason::WallCollision => "Cause: hit wall",
            DeathReason::SelfCollision => "Cause: hit yourself",
        }),
        Line::from(format!("Length: {final_length}")),
        Line::from(""),
    ];
    lines.extend(FOOTER_LINES.map(Line::from));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        body_row,
    );
}

/// Draws the victory popup over the filled board.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, length: usize) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from("YOU WIN").style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Board filled at length {length}")),
        Line::from(""),
    ];
    lines.extend(FOOTER_LINES.map(Line::from));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" victory ")),
        popup,
    );
}

/// Box covering the given share of `area`, centred in it.
fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);

    popup
}
