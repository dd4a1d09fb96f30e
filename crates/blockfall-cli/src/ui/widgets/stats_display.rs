use std::iter;

use blockfall_engine::GameStats;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;
use crate::ui::hud::Hud;

type Value = &'static dyn Fn(&Hud, &GameStats) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(Value),
    LabelValue(&'static str, Value),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|hud, _| hud.score.to_string()),
    Row::Empty,
    Row::LabelValue("LEVEL:", &|hud, _| hud.level.to_string()),
    Row::LabelValue("LINES:", &|hud, _| hud.lines.to_string()),
    Row::Empty,
    Row::LabelValue("PIECES:", &|_, stats| stats.completed_pieces().to_string()),
    Row::LabelValue("SINGLES:", &|_, stats| {
        stats.line_cleared_counter()[1].to_string()
    }),
    Row::LabelValue("DOUBLES:", &|_, stats| {
        stats.line_cleared_counter()[2].to_string()
    }),
    Row::LabelValue("TRIPLES:", &|_, stats| {
        stats.line_cleared_counter()[3].to_string()
    }),
    Row::LabelValue("TETRIS:", &|_, stats| {
        stats.line_cleared_counter()[4].to_string()
    }),
];

/// Score, level and lines as last reported by the engine, followed by the
/// line-clear histogram.
pub struct StatsDisplay<'a> {
    hud: &'a Hud,
    stats: &'a GameStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(hud: &'a Hud, stats: &'a GameStats) -> Self {
        Self {
            hud,
            stats,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        18 + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        ROWS.len() as u16 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let rows_areas = Layout::vertical(ROWS.iter().map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.hud, self.stats), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.hud, self.stats), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
