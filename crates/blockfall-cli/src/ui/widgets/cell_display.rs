use blockfall_engine::{Cell, PieceKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// One board cell, drawn two terminal columns wide so it looks square.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn from_cell(cell: Cell, show_dots: bool) -> Self {
        match cell {
            Cell::Empty if show_dots => Self::new(style::EMPTY_DOT, "."),
            Cell::Empty => Self::new(style::EMPTY, ""),
            Cell::Piece(kind) => Self::new(kind_style(kind), ""),
        }
    }
}

fn kind_style(kind: PieceKind) -> Style {
    match kind {
        PieceKind::Z => style::Z_CELL,
        PieceKind::S => style::S_CELL,
        PieceKind::I => style::I_CELL,
        PieceKind::T => style::T_CELL,
        PieceKind::O => style::O_CELL,
        PieceKind::L => style::L_CELL,
        PieceKind::J => style::J_CELL,
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // a Paragraph paints the background of the whole area, not just the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
