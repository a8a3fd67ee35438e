//! Loading Overlay View
//!
//! Dims the whole screen and shows a small spinner box in the middle.

use super::centered_rect;
use crate::view_models::LoadingOverlayViewModel;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_loading_overlay(f: &mut Frame, vm: &LoadingOverlayViewModel, area: Rect) {
    // Dimmed backdrop blocks interaction with everything underneath
    let overlay = Block::default().style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);

    let text_width = u16::try_from(vm.message.chars().count()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(8).clamp(24, area.width.max(24));
    let popup_area = centered_rect(area, width, 3);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(vm.border_fg));

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", vm.spinner),
            Style::default().fg(vm.spinner_fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(vm.message.as_str(), Style::default().fg(vm.text_fg)),
    ]);

    f.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        popup_area,
    );
}
