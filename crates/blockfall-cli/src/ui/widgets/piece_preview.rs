use blockfall_engine::{Cell, Piece, PieceKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::CellDisplay;

/// Box large enough for any piece in any orientation.
const PREVIEW_CELLS: u16 = 4;

/// Shows the upcoming piece in its spawn orientation.
#[derive(Debug)]
pub struct PiecePreview<'a> {
    kind: Option<PieceKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PiecePreview<'a> {
    pub fn new(kind: Option<PieceKind>) -> Self {
        Self { kind, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        PREVIEW_CELLS * CellDisplay::WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        PREVIEW_CELLS * CellDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PiecePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PiecePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(kind) = self.kind else {
            CellDisplay::from_cell(Cell::Empty, false).render(area, buf);
            return;
        };
        let piece = Piece::new(kind);
        let cols = extent(piece.min_x(), piece.max_x());
        let rows = extent(piece.min_y(), piece.max_y());

        let piece_area = area.centered(
            Constraint::Length(cols * CellDisplay::WIDTH),
            Constraint::Length(rows * CellDisplay::HEIGHT),
        );
        let col_constraints = (0..cols).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints = (0..rows).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let occupied = CellDisplay::from_cell(Cell::Piece(kind), false);
        let empty = CellDisplay::from_cell(Cell::Empty, false);
        for (dy, grid_row) in (piece.min_y()..).zip(piece_area.layout_vec(&vertical)) {
            for (dx, grid_cell) in (piece.min_x()..).zip(grid_row.layout_vec(&horizontal)) {
                let cell = if piece.contains_offset(dx, dy) {
                    &occupied
                } else {
                    &empty
                };
                cell.render(grid_cell, buf);
            }
        }
    }
}

fn extent(min: i32, max: i32) -> u16 {
    u16::try_from(max - min + 1).unwrap_or(0)
}
