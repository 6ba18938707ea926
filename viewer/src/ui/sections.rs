//! Section renderers. Each draws one portfolio section into the body
//! area using content supplied by the app and the injected palette.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use folio_core::content::{MediaRecord, truncate};
use folio_core::media::{self, EmbedOptions, drive_urls};

use crate::app::App;

use super::Palette;

const DESCRIPTION_PREVIEW: usize = 220;

pub fn draw_hero(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let Some(hero) = &app.content.hero else {
        draw_empty(f, palette, area, "No hero content");
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(format!("{} {}", hero.wave_emoji, hero.greeting)));
    lines.push(Line::styled(
        hero.name.clone(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    let typed = app.typing.current(&hero.roles);
    lines.push(Line::from(vec![
        Span::raw("I'm a "),
        Span::styled(typed, Style::default().fg(palette.accent)),
        Span::styled("|", Style::default().fg(palette.dim)),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(hero.description.clone()));
    lines.push(Line::default());

    if !hero.stats.is_empty() {
        let stats = hero
            .stats
            .iter()
            .map(|stat| format!("{} {}", stat.number, stat.label))
            .collect::<Vec<_>>()
            .join("  •  ");
        lines.push(Line::styled(stats, Style::default().fg(palette.text)));
        lines.push(Line::default());
    }

    if let Some(image) = &hero.profile_image {
        // The theme picks the image variant, exactly like the web hero.
        let variant = if app.theme.is_dark() {
            image.dark.as_deref()
        } else {
            image.light.as_deref()
        };
        if let Some(path) = variant {
            lines.push(Line::styled(
                format!("Profile image: {}", media::normalize_url(path)),
                Style::default().fg(palette.dim),
            ));
        }
    }

    if let Some(resume) = app.content.resume_link() {
        match drive_urls(&resume.url) {
            Some(urls) => {
                lines.push(Line::from(format!("Resume (view):     {}", urls.view_url)));
                lines.push(Line::from(format!(
                    "Resume (download): {}",
                    urls.download_url
                )));
            }
            None => lines.push(Line::from(format!("Resume: {}", resume.url))),
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

pub fn draw_about(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let Some(about) = &app.content.about else {
        draw_empty(f, palette, area, "No about content");
        return;
    };
    let mut lines: Vec<Line> = Vec::new();
    for paragraph in &about.content {
        lines.push(Line::from(paragraph.clone()));
        lines.push(Line::default());
    }
    let widget = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", about.title)),
        );
    f.render_widget(widget, area);
}

pub fn draw_skills(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for category in &app.content.skills {
        lines.push(Line::styled(
            category.category.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        let names = category
            .skills
            .iter()
            .map(|skill| skill.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(format!("  {names}")));
        lines.push(Line::default());
    }
    let title = section_title(&app.content.sections.skills.title, "Skills");
    let widget = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        );
    f.render_widget(widget, area);
}

pub fn draw_timeline(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let items = app.visible_timeline();
    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let entry = item.entry;
            // Tile highlight only applies to the selected row.
            let tile = if row == app.timeline_selected {
                Some(app.tile_selected)
            } else {
                None
            };
            let mut lines: Vec<Line> = Vec::new();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", entry.year),
                    Style::default().fg(palette.dim),
                ),
                Span::styled(
                    entry.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {} — {}", entry.company, entry.location)),
                Span::styled(
                    format!("  [{}]", item.category.label()),
                    Style::default().fg(palette.accent),
                ),
            ]));
            if !entry.technologies.is_empty() {
                lines.push(Line::from(format!(
                    "    Tech: {}",
                    entry.technologies.join(", ")
                )));
            }
            let expanded = app.expanded.contains(&entry.title);
            let shown: &[String] = if expanded {
                &entry.details
            } else {
                &entry.details[..entry.details.len().min(2)]
            };
            for detail in shown {
                lines.push(Line::from(format!("    • {detail}")));
            }
            if !expanded && entry.details.len() > 2 {
                lines.push(Line::styled(
                    format!("    … e to view {} more", entry.details.len() - 2),
                    Style::default().fg(palette.dim),
                ));
            }
            if !entry.highlights.is_empty() {
                lines.push(Line::from(format!(
                    "    Highlights: {}",
                    entry.highlights.join(" · ")
                )));
            }
            if !entry.gallery.is_empty() {
                lines.push(gallery_tiles_line(&entry.gallery, tile, palette));
            }
            lines.push(Line::default());
            ListItem::new(Text::from(lines))
        })
        .collect();

    let title = section_title(&app.content.sections.timeline.title, "Timeline");
    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " {title} — {} (f to cycle) ",
            app.timeline_filter.label()
        )))
        .highlight_style(Style::default().bg(palette.dim));
    let mut state = ListState::default();
    state.select(Some(app.timeline_selected));
    f.render_stateful_widget(list, area, &mut state);
}

pub fn draw_projects(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let projects = app.visible_projects();
    let list_items: Vec<ListItem> = projects
        .iter()
        .enumerate()
        .map(|(row, project)| {
            let tile = if row == app.project_selected {
                Some(app.tile_selected)
            } else {
                None
            };
            let mut lines: Vec<Line> = Vec::new();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", project.year),
                    Style::default().fg(palette.dim),
                ),
                Span::styled(
                    project.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", project.category),
                    Style::default().fg(palette.accent),
                ),
            ]));
            let expanded = app.expanded.contains(&project.title);
            let (description, truncated) = if expanded {
                (project.description.clone(), false)
            } else {
                truncate(&project.description, DESCRIPTION_PREVIEW)
            };
            if !description.is_empty() {
                lines.push(Line::from(format!("    {description}")));
            }
            if truncated {
                lines.push(Line::styled(
                    "    … e to view more",
                    Style::default().fg(palette.dim),
                ));
            }
            if !project.technologies.is_empty() {
                lines.push(Line::from(format!(
                    "    Tech: {}",
                    project.technologies.join(", ")
                )));
            }
            if !project.highlights.is_empty() {
                lines.push(Line::from(format!(
                    "    Highlights: {}",
                    project.highlights.join(" · ")
                )));
            }
            let mut links: Vec<String> = Vec::new();
            if let Some(github) = &project.github {
                links.push(format!("Code: {github}"));
            }
            if let Some(live) = project.live.as_ref().filter(|l| l.as_str() != "#") {
                links.push(format!("Demo: {live}"));
            }
            if !links.is_empty() {
                lines.push(Line::styled(
                    format!("    {}", links.join("  ")),
                    Style::default().fg(palette.dim),
                ));
            }
            if !project.gallery.is_empty() {
                lines.push(gallery_tiles_line(&project.gallery, tile, palette));
            }
            lines.push(Line::default());
            ListItem::new(Text::from(lines))
        })
        .collect();

    let base = section_title(&app.content.sections.projects.title, "Projects");
    let title = if app.filter_mode || !app.project_filter.is_empty() {
        format!(" {base} — filter: {}_ ", app.project_filter)
    } else {
        format!(" {base} (/ to filter) ")
    };
    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(palette.dim));
    let mut state = ListState::default();
    state.select(Some(app.project_selected));
    f.render_stateful_widget(list, area, &mut state);
}

pub fn draw_contact(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let mut title = "Contact".to_string();
    if let Some(contact) = &app.content.contact {
        title = section_title(&contact.title, "Contact");
        if !contact.subtitle.is_empty() {
            lines.push(Line::styled(
                contact.subtitle.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if !contact.description.is_empty() {
            lines.push(Line::from(contact.description.clone()));
            lines.push(Line::default());
        }
        for detail in &contact.details {
            let value = detail.link.as_deref().unwrap_or(&detail.value);
            lines.push(Line::from(format!("{:<10} {}", detail.label, value)));
        }
    }
    if let Some(social) = &app.content.social {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        for link in &social.links {
            let name = link.name.as_deref().unwrap_or(&link.icon);
            lines.push(Line::from(format!("{:<10} {}", name, link.url)));
        }
    }
    if lines.is_empty() {
        draw_empty(f, palette, area, "No contact content");
        return;
    }
    let widget = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        );
    f.render_widget(widget, area);
}

/// One span per gallery record, labeled by its classified kind, with
/// the selected tile highlighted.
fn gallery_tiles_line(
    gallery: &[MediaRecord],
    selected: Option<usize>,
    palette: Palette,
) -> Line<'static> {
    let mut spans: Vec<Span> = vec![Span::raw("    ")];
    for (i, record) in gallery.iter().enumerate() {
        let result = media::resolve(record, EmbedOptions::inline());
        let label = format!("[{}]", result.kind.label());
        let style = if selected == Some(i) {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(palette.accent)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn section_title(configured: &str, fallback: &str) -> String {
    if configured.is_empty() {
        fallback.to_string()
    } else {
        configured.to_string()
    }
}

fn draw_empty(f: &mut Frame, palette: Palette, area: Rect, message: &str) {
    let widget = Paragraph::new(Line::styled(message, Style::default().fg(palette.dim)))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}
