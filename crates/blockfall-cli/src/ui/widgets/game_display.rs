use blockfall_engine::{GameEngine, GameMode};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use super::{BoardDisplay, PiecePreview, StatsDisplay, color, style};
use crate::ui::hud::Hud;

/// Whole play field: stats on the left, the board in the middle and the
/// next piece on the right, with a popup while paused or after game over.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    engine: &'a GameEngine,
    hud: &'a Hud,
    horizontal_padding: u16,
}

impl<'a> GameDisplay<'a> {
    pub fn new(engine: &'a GameEngine, hud: &'a Hud) -> Self {
        Self {
            engine,
            hud,
            horizontal_padding: 1,
        }
    }

    pub fn height(&self) -> u16 {
        BoardDisplay::new(self.engine.board())
            .block(Block::bordered())
            .height()
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = self.engine.mode();
        let border_style = match mode {
            GameMode::Stopped | GameMode::Running => color::WHITE,
            GameMode::Paused => color::YELLOW,
            GameMode::GameOver => color::RED,
        };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .padding(Padding::horizontal(self.horizontal_padding))
                .border_style(border_style)
                .style(style::DEFAULT)
        };

        let board = BoardDisplay::new(self.engine.board())
            .active_piece(self.engine.active_piece())
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let stats = StatsDisplay::new(self.hud, self.engine.stats()).block(panel("STATS"));
        let next = PiecePreview::new(self.hud.next).block(panel("NEXT"));

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(board.width()),
            Constraint::Length(next.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(center_column);
        let [next_area] = Layout::vertical([Constraint::Length(next.height())]).areas(right_column);

        let board_width = board.width();
        stats.render(stats_area, buf);
        board.render(board_area, buf);
        next.render(next_area, buf);

        let popup = match mode {
            GameMode::Stopped | GameMode::Running => None,
            GameMode::Paused => Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW))),
            GameMode::GameOver => Some(("GAME OVER", Style::new().fg(color::WHITE).bg(color::RED))),
        };
        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
