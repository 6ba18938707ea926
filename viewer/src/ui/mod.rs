mod modal;
mod sections;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::{App, Section, Theme};

/// Theme-derived colors handed down to every section renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGray,
        },
        Theme::Light => Palette {
            accent: Color::Blue,
            text: Color::Black,
            dim: Color::Gray,
        },
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let palette = palette(app.theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, app, palette, chunks[0]);

    match app.section {
        Section::Hero => sections::draw_hero(f, app, palette, chunks[1]),
        Section::About => sections::draw_about(f, app, palette, chunks[1]),
        Section::Skills => sections::draw_skills(f, app, palette, chunks[1]),
        Section::Timeline => sections::draw_timeline(f, app, palette, chunks[1]),
        Section::Projects => sections::draw_projects(f, app, palette, chunks[1]),
        Section::Contact => sections::draw_contact(f, app, palette, chunks[1]),
    }

    draw_status(f, app, palette, chunks[2]);

    if app.modal.is_open() {
        modal::draw(f, app, palette);
    }
}

fn draw_tabs(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let logo = app
        .content
        .navigation
        .as_ref()
        .map(|nav| nav.logo.clone())
        .unwrap_or_else(|| "folio".to_string());
    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|section| Line::from(format!(" {} ", section.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.section.index())
        .style(Style::default().fg(palette.dim))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {logo} ")),
        );
    f.render_widget(tabs, area);
}

fn draw_status(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let line = if let Some((message, _, color)) = &app.status_message {
        Line::styled(message.clone(), Style::default().fg(*color))
    } else if app.modal.is_open() {
        Line::styled(
            " Esc close  ←/→ navigate",
            Style::default().fg(palette.dim),
        )
    } else {
        Line::styled(
            " q quit  Tab/1-6 sections  t theme  ↑/↓ select  ←/→ tiles  Enter open  e expand",
            Style::default().fg(palette.dim),
        )
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Centered sub-rectangle used for the modal overlay.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
