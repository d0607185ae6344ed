use crate::ui::app::App;
use crate::ui::counter::ActuatorView;
use crate::ui::footer::Footer;
use crate::ui::layout::counter_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BUTTON_BORDER, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = counter_regions(frame.area(), app.show_footer());
    let view = app.view();

    let title = Line::from(Span::styled(
        view.title,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        regions.title,
    );

    frame.render_widget(
        Paragraph::new(view.count_text.as_str())
            .style(Style::default().fg(TEXT))
            .alignment(Alignment::Center),
        regions.count,
    );

    for actuator in &view.actuators {
        let focused = actuator.actuator == app.focus();
        frame.render_widget(button(actuator, focused), regions.actuator(actuator.actuator));
    }

    if let Some(footer) = regions.footer {
        frame.render_widget(Footer::new(app.keys()).widget(footer), footer);
    }
}

fn button(actuator: &ActuatorView, focused: bool) -> Paragraph<'static> {
    let (border, body) = if focused {
        (
            Style::default().fg(ACCENT),
            Style::default()
                .fg(TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(BUTTON_BORDER), Style::default().fg(TEXT))
    };

    Paragraph::new(actuator.label)
        .style(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border))
}
