use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use super::style;

/// A group of keys sharing one action, shown as `A/B Action`.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    keys: &'static [&'static str],
    action: &'static str,
}

impl KeyHint {
    pub const fn new(keys: &'static [&'static str], action: &'static str) -> Self {
        Self { keys, action }
    }

    fn spans(self) -> impl Iterator<Item = Span<'static>> {
        let keys = self.keys.iter().enumerate().flat_map(|(i, &key)| {
            let sep = (i > 0).then(|| Span::styled("/", style::HINT_SEPARATOR));
            sep.into_iter().chain([Span::styled(key, style::HINT_KEY)])
        });
        keys.chain([
            Span::raw(" "),
            Span::styled(self.action, style::HINT_ACTION),
        ])
    }
}

/// Help bar listing the keys that do something in the current mode.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    hints: &'a [KeyHint],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self { hints }
    }

    fn line(&self) -> Line<'static> {
        let spans = self.hints.iter().enumerate().flat_map(|(i, hint)| {
            let sep = (i > 0).then(|| Span::styled("  ", style::HINT_SEPARATOR));
            sep.into_iter().chain(hint.spans())
        });
        Line::from_iter(spans)
    }
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().centered().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_joins_keys_and_hints() {
        let hints = [KeyHint::new(&["A", "B"], "Move"), KeyHint::new(&["Q"], "Quit")];
        let line = KeyBindingDisplay::new(&hints).line();
        assert_eq!(line.to_string(), "A/B Move  Q Quit");
    }

    #[test]
    fn test_renders_centered() {
        let hints = [KeyHint::new(&["P"], "Resume")];
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        KeyBindingDisplay::new(&hints).render(area, &mut buf);
        let text = buf.content().iter().map(|c| c.symbol()).collect::<String>();
        assert_eq!(text, "  P Resume  ");
    }
}
