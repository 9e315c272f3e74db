use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::engine::{EndReason, Snapshot};
use crate::ui::hud::high_score_label;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED").style(title_style(theme)),
        Line::from(""),
        Line::from("[P]/[Space] Resume"),
        Line::from("[R] Restart"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen, with a name prompt while a new high score is pending.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    name_entry: &str,
    theme: &Theme,
) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from("GAME OVER").style(title_style(theme)),
        Line::from(""),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(end_reason_text(snapshot.end_reason)),
        Line::from(""),
    ];

    if snapshot.is_new_high_score {
        lines.push(Line::from("New high score!").style(Style::default().fg(theme.hud_high_score)));
        lines.push(Line::from(format!("Your name: {name_entry}_")));
        lines.push(Line::from(""));
        lines.push(Line::from("[Enter] Save (empty: skip and restart) · [Esc] Quit"));
    } else {
        lines.push(
            Line::from(high_score_label(
                snapshot.high_score,
                snapshot.high_score_player,
            ))
            .style(Style::default().fg(theme.hud_high_score)),
        );
        lines.push(Line::from(""));
        lines.push(Line::from("[Enter]/[R] Play again · [Q] Quit"));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn end_reason_text(reason: Option<EndReason>) -> &'static str {
    match reason {
        Some(EndReason::WallCollision) => "Cause: hit wall",
        Some(EndReason::SelfCollision) => "Cause: hit yourself",
        Some(EndReason::BoardFull) => "The board is full!",
        None => "",
    }
}

fn title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.menu_title)
        .add_modifier(Modifier::BOLD)
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
