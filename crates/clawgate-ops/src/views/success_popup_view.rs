//! Success Popup View
//!
//! Floating popup with the success message and numbered next steps.

use super::centered_rect;
use crate::theme::Theme;
use crate::view_models::SuccessPopupViewModel;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_success_popup(f: &mut Frame, vm: &SuccessPopupViewModel, theme: &Theme, area: Rect) {
    // Message, spacer, steps, borders
    let height = 5 + vm.next_steps.len() as u16;
    let width = ((u32::from(area.width) * 60 / 100).min(70) as u16).max(40);
    let popup_area = centered_rect(area, width, height);

    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" ", theme.muted()),
        Span::styled(vm.dismiss_key.as_str(), theme.key_hint().bold()),
        Span::styled(format!(" {} ", vm.dismiss_label.to_lowercase()), theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(vm.border_fg).add_modifier(Modifier::BOLD))
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let mut lines = vec![
        Line::from(Span::styled(
            vm.message.as_str(),
            Style::default().fg(vm.message_fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for row in &vm.next_steps {
        let mut spans = vec![
            Span::styled(format!("{} ", row.key), Style::default().fg(vm.key_fg).bold()),
            Span::styled(row.label.as_str(), theme.text()),
        ];
        if !row.target.is_empty() {
            spans.push(Span::styled(
                format!("  → {}", row.target),
                Style::default().fg(vm.link_fg),
            ));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
