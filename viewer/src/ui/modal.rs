//! Expanded media modal overlay.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use folio_core::media::{self, EmbedOptions, MediaKind};

use crate::app::App;

use super::{Palette, centered_rect};

pub fn draw(f: &mut Frame, app: &App, palette: Palette) {
    // The modal always uses the expanded playback options (autoplay,
    // unmuted); inline tiles use the muted defaults.
    let Some(view) = app.modal.view(EmbedOptions::expanded()) else {
        return;
    };

    let area = centered_rect(72, 64, f.area());
    f.render_widget(Clear, area);

    let heading = view
        .record
        .title
        .clone()
        .unwrap_or_else(|| view.kind.label().to_string());

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::raw("Kind: "),
        Span::styled(
            view.kind.label(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());

    match (&view.embed_url, view.kind) {
        (Some(embed), MediaKind::Image | MediaKind::Video) => {
            lines.push(Line::from(format!("Source: {embed}")));
        }
        (Some(embed), _) => {
            lines.push(Line::from(format!("Embed: {embed}")));
        }
        (None, MediaKind::Link) => {
            let card = media::link_card(&view.record.url);
            lines.push(Line::from(format!("Domain: {}", card.domain)));
            if let Some(favicon) = card.favicon_url {
                lines.push(Line::styled(
                    format!("Favicon: {favicon}"),
                    Style::default().fg(palette.dim),
                ));
            }
        }
        (None, _) => {
            // Embed derivation failed for an embed-only kind; the
            // original URL is the required fallback affordance.
            lines.push(Line::styled(
                "No inline preview available.",
                Style::default().fg(palette.dim),
            ));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Open original: ", Style::default().fg(palette.dim)),
        Span::raw(view.record.url.clone()),
    ]));

    lines.push(Line::default());
    let footer = if view.has_multiple {
        format!("{} / {}   ← → navigate   Esc close", view.index + 1, view.len)
    } else {
        "Esc close".to_string()
    };
    lines.push(Line::styled(footer, Style::default().fg(palette.dim)));

    let widget = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {heading} "))
                .border_style(Style::default().fg(palette.accent)),
        );
    f.render_widget(widget, area);
}
