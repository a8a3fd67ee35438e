//! Abort Confirm View
//!
//! Floating yes/no popup for destructive actions. The backdrop is dimmed;
//! dismissing via the backdrop maps to `hide_abort_confirm`, not to cancel.

use super::centered_rect;
use crate::theme::Theme;
use crate::view_models::AbortConfirmViewModel;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_abort_confirm(f: &mut Frame, vm: &AbortConfirmViewModel, theme: &Theme, area: Rect) {
    let overlay = Block::default().style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);

    let width = ((u32::from(area.width) * 60 / 100).min(70) as u16).max(40);
    let popup_area = centered_rect(area, width, 7);
    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" ", theme.muted()),
        Span::styled(vm.confirm_key.as_str(), theme.key_hint().bold()),
        Span::styled(format!(" {}  ", vm.confirm_label.to_lowercase()), theme.muted()),
        Span::styled(vm.cancel_key.as_str(), theme.key_hint().bold()),
        Span::styled(format!(" {} ", vm.cancel_label.to_lowercase()), theme.muted()),
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

    let lines = vec![
        Line::from(Span::styled(vm.message.as_str(), Style::default().fg(vm.message_fg))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[ {} ]", vm.confirm_label),
                Style::default().fg(Color::White).bg(vm.confirm_fg).bold(),
            ),
            Span::raw("  "),
            Span::styled(format!("[ {} ]", vm.cancel_label), theme.muted()),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
