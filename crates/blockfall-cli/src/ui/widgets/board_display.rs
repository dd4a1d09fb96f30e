use std::iter;

use blockfall_engine::{ActivePiece, Board, Cell};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::CellDisplay;

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    active: Option<ActivePiece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            active: None,
            block: None,
        }
    }

    pub fn active_piece(self, active: Option<ActivePiece>) -> Self {
        Self { active, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        Board::WIDTH as u16 * CellDisplay::WIDTH
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        Board::HEIGHT as u16 * CellDisplay::HEIGHT
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut board = self.board.clone();
        if let Some(active) = self.active
            && let (Some(kind), Some(cells)) = (active.piece().kind(), active.cells())
        {
            for pos in cells {
                board.set_cell_at(pos, Cell::Piece(kind));
            }
        }

        let col_constraints = (0..Board::WIDTH).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints = (0..Board::HEIGHT).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = area
            .layout::<{ Board::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::WIDTH }>(&horizontal));

        // screen rows run top to bottom, board rows bottom to top
        for (grid_row, row) in iter::zip(grid_rows, board.rows().rev()) {
            for (grid_cell, cell) in iter::zip(grid_row, row) {
                CellDisplay::from_cell(*cell, true).render(grid_cell, buf);
            }
        }
    }
}
