use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::board::{Board, Position};
use crate::config::{
    Theme, BORDER_HALF_BLOCK, CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD,
};
use crate::engine::Snapshot;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renders the full game frame from an immutable snapshot.
///
/// `name_entry` is the player name typed so far on the high-score prompt.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, name_entry: &str, theme: &Theme) {
    let area = frame.area();
    let field_area = render_hud(frame, area, snapshot, theme);
    let play_area = board_area(field_area, snapshot.board);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.play_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    if snapshot.is_over {
        render_game_over_menu(frame, field_area, snapshot, name_entry, theme);
    } else if snapshot.is_paused {
        render_pause_menu(frame, field_area, theme);
    }
}

/// Centers the bordered board inside `area`, clipped to the available space.
fn board_area(area: Rect, board: Board) -> Rect {
    let width = u16::try_from(board.width())
        .unwrap_or(u16::MAX)
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2);
    let height = u16::try_from(board.height())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = grid_to_terminal(inner, snapshot.board, food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.play_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let head = snapshot.snake.head();

    let buffer = frame.buffer_mut();
    for segment in snapshot.snake.segments() {
        let Some((x, y)) = grid_to_terminal(inner, snapshot.board, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .bg(theme.play_bg)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        buffer.set_string(
            x,
            y,
            GLYPH_SNAKE_BODY,
            Style::new().fg(theme.snake_body).bg(theme.play_bg),
        );
    }
}

/// Maps a grid cell to the terminal column/row of its left half.
///
/// Returns `None` when the cell is off the board or falls outside `inner`.
#[must_use]
pub fn grid_to_terminal(inner: Rect, board: Board, position: Position) -> Option<(u16, u16)> {
    if !board.contains(position) {
        return None;
    }

    let column = u16::try_from(position.x - board.min_x()).ok()?;
    let row = u16::try_from(position.y - board.min_y()).ok()?;

    let x = inner.x.saturating_add(column.saturating_mul(CELL_WIDTH));
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use super::{grid_to_terminal, render};
    use crate::board::{Board, Position};
    use crate::config::{GLYPH_FOOD, THEME_CLASSIC};
    use crate::engine::GameEngine;
    use crate::score::MemoryStore;

    #[test]
    fn grid_cells_map_to_double_width_columns() {
        let board = Board::new(-2, 2, 0, 4).expect("valid board");
        let inner = Rect::new(3, 1, 10, 5);

        assert_eq!(grid_to_terminal(inner, board, Position::new(-2, 0)), Some((3, 1)));
        assert_eq!(grid_to_terminal(inner, board, Position::new(2, 4)), Some((11, 5)));
        assert_eq!(grid_to_terminal(inner, board, Position::new(3, 0)), None);
    }

    #[test]
    fn cells_outside_a_clipped_area_are_skipped() {
        let board = Board::with_size(10, 10).expect("valid board");
        let inner = Rect::new(0, 0, 6, 3);

        assert_eq!(grid_to_terminal(inner, board, Position::new(2, 2)), Some((4, 2)));
        assert_eq!(grid_to_terminal(inner, board, Position::new(3, 0)), None);
        assert_eq!(grid_to_terminal(inner, board, Position::new(0, 3)), None);
    }

    #[test]
    fn frame_shows_food_and_score() {
        let board = Board::with_size(10, 10).expect("valid board");
        let engine = GameEngine::new_with_seed(board, MemoryStore::default(), 3);
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &engine.snapshot(), "", &THEME_CLASSIC))
            .expect("draw succeeds");

        let buffer = terminal.backend().buffer();
        assert!(buffer.content.iter().any(|cell| cell.symbol() == GLYPH_FOOD));

        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Score: 0"));
    }
}
