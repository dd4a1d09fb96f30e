use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, cell_display::*, game_display::*, key_binding_display::*,
    piece_preview::*, stats_display::*,
};

mod board_display;
mod cell_display;
mod game_display;
mod key_binding_display;
mod piece_preview;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const Z_RED: Color = Color::Rgb(204, 102, 102);
    pub const S_GREEN: Color = Color::Rgb(102, 204, 102);
    pub const I_BLUE: Color = Color::Rgb(102, 102, 204);
    pub const T_YELLOW: Color = Color::Rgb(204, 204, 102);
    pub const O_MAGENTA: Color = Color::Rgb(204, 102, 204);
    pub const L_CYAN: Color = Color::Rgb(102, 204, 204);
    pub const J_AMBER: Color = Color::Rgb(218, 170, 0);

    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const STATUS: Style = fg_bg(color::GRAY, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::DARK_GRAY, color::BLACK);

    pub const HINT_KEY: Style = Style::new().fg(color::L_CYAN);
    pub const HINT_SEPARATOR: Style = Style::new().fg(color::DARK_GRAY);
    pub const HINT_ACTION: Style = Style::new().fg(color::GRAY);

    pub const Z_CELL: Style = bg_only(color::Z_RED);
    pub const S_CELL: Style = bg_only(color::S_GREEN);
    pub const I_CELL: Style = bg_only(color::I_BLUE);
    pub const T_CELL: Style = bg_only(color::T_YELLOW);
    pub const O_CELL: Style = bg_only(color::O_MAGENTA);
    pub const L_CELL: Style = bg_only(color::L_CYAN);
    pub const J_CELL: Style = bg_only(color::J_AMBER);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let probe = Rect::new(0, 0, 100, 100);
    let inner = block.map_or(probe, |block| block.inner(probe));
    probe.height - inner.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let probe = Rect::new(0, 0, 100, 100);
    let inner = block.map_or(probe, |block| block.inner(probe));
    probe.width - inner.width
}
