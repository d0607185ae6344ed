use crate::config::{KeyBinding, KeysConfig};
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    keys: &'a KeysConfig,
}

impl<'a> Footer<'a> {
    pub fn new(keys: &'a KeysConfig) -> Self {
        Self { keys }
    }

    /// Key hints, built from the first binding of each actuator.
    pub fn hints(&self) -> String {
        format!(
            " {}: Increment │ {}: Decrement │ Tab: Focus │ Enter: Press │ q: Quit",
            first_key(&self.keys.increment),
            first_key(&self.keys.decrement)
        )
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn first_key(bindings: &[KeyBinding]) -> String {
    bindings.first().map(|b| b.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_configured_keys() {
        let keys = KeysConfig::default();
        let hints = Footer::new(&keys).hints();
        assert!(hints.contains("+: Increment"));
        assert!(hints.contains("-: Decrement"));
    }
}
