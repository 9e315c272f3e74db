use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::{Theme, PLACEHOLDER_PLAYER_NAME};
use crate::engine::Snapshot;

/// Renders the score row and key help, returning the area left for the board.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    theme: &Theme,
) -> Rect {
    let [score_area, play_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let score_style = Style::default().fg(theme.hud_score);
    let high_score_style = if snapshot.is_new_high_score {
        Style::default()
            .fg(theme.hud_high_score)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.hud_high_score)
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("Score: {}", snapshot.score), score_style),
            Span::raw("   "),
            Span::styled(
                high_score_label(snapshot.high_score, snapshot.high_score_player),
                high_score_style,
            ),
        ]))
        .alignment(Alignment::Center),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from("arrows/WASD move · [P] pause · [R] restart · [Q] quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        help_area,
    );

    play_area
}

/// Formats the best score with its holder, `-` when nobody holds it yet.
#[must_use]
pub fn high_score_label(high_score: u32, player: &str) -> String {
    let player = if player.is_empty() {
        PLACEHOLDER_PLAYER_NAME
    } else {
        player
    };
    format!("Highscore: {high_score} {player}")
}
