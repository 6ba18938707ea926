use std::collections::HashSet;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::style::Color;

use folio_core::content::{MediaRecord, PortfolioData, Project, TimelineCategory, TimelineItem};
use folio_core::gallery::GalleryModal;

use crate::events::event_utils;

/// How long a typed character takes to appear in the hero role line,
/// how long a finished role is held, and how fast it is deleted.
const TYPE_STEP: Duration = Duration::from_millis(60);
const HOLD_STEP: Duration = Duration::from_millis(1200);
const DELETE_STEP: Duration = Duration::from_millis(30);

/// How long a status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(4);

// App state
pub struct App {
    /// Parsed portfolio content
    pub content: PortfolioData,
    /// Current section view
    pub section: Section,
    /// Active color theme; injected into every draw call
    pub theme: Theme,
    /// Media gallery modal (closed unless a gallery item was opened)
    pub modal: GalleryModal,
    /// Selected entry in the projects list
    pub project_selected: usize,
    /// Selected entry in the timeline list
    pub timeline_selected: usize,
    /// Selected gallery tile within the current entry
    pub tile_selected: usize,
    /// Entries whose full description/details are shown, keyed by title
    pub expanded: HashSet<String>,
    /// Timeline category filter
    pub timeline_filter: TimelineFilter,
    /// Fuzzy filter query for the projects list
    pub project_filter: String,
    /// Whether the filter input line is capturing keystrokes
    pub filter_mode: bool,
    /// Hero typing animation state
    pub typing: TypingState,
    /// Status message to display
    pub status_message: Option<(String, Instant, Color)>,
    /// Whether the app should exit
    pub should_quit: bool,
    matcher: SkimMatcherV2,
}

/// Portfolio sections, one view each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Timeline,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Timeline,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Timeline => "Timeline",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Dark/light palette selector. One injected value, not global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Timeline category filter. Defaults to experience only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineFilter {
    All,
    Experience,
    Education,
}

impl TimelineFilter {
    pub fn cycle(self) -> TimelineFilter {
        match self {
            TimelineFilter::Experience => TimelineFilter::Education,
            TimelineFilter::Education => TimelineFilter::All,
            TimelineFilter::All => TimelineFilter::Experience,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimelineFilter::All => "All",
            TimelineFilter::Experience => "Experience",
            TimelineFilter::Education => "Education",
        }
    }

    fn matches(self, category: TimelineCategory) -> bool {
        match self {
            TimelineFilter::All => true,
            TimelineFilter::Experience => category == TimelineCategory::Experience,
            TimelineFilter::Education => category == TimelineCategory::Education,
        }
    }
}

/// Tick-driven typewriter over the hero role strings: type, hold,
/// delete, advance to the next role.
pub struct TypingState {
    role: usize,
    shown: usize,
    phase: TypingPhase,
    last_step: Instant,
}

enum TypingPhase {
    Typing,
    Holding,
    Deleting,
}

impl TypingState {
    fn new() -> Self {
        Self {
            role: 0,
            shown: 0,
            phase: TypingPhase::Typing,
            last_step: Instant::now(),
        }
    }

    fn tick(&mut self, roles: &[String]) {
        if roles.is_empty() {
            return;
        }
        let role_len = roles[self.role % roles.len()].chars().count();
        match self.phase {
            TypingPhase::Typing => {
                if self.last_step.elapsed() >= TYPE_STEP {
                    if self.shown < role_len {
                        self.shown += 1;
                    } else {
                        self.phase = TypingPhase::Holding;
                    }
                    self.last_step = Instant::now();
                }
            }
            TypingPhase::Holding => {
                if self.last_step.elapsed() >= HOLD_STEP {
                    self.phase = TypingPhase::Deleting;
                    self.last_step = Instant::now();
                }
            }
            TypingPhase::Deleting => {
                if self.last_step.elapsed() >= DELETE_STEP {
                    if self.shown > 0 {
                        self.shown -= 1;
                    } else {
                        self.role = (self.role + 1) % roles.len();
                        self.phase = TypingPhase::Typing;
                    }
                    self.last_step = Instant::now();
                }
            }
        }
    }

    /// The currently visible prefix of the active role.
    pub fn current(&self, roles: &[String]) -> String {
        match roles.get(self.role % roles.len().max(1)) {
            Some(role) => role.chars().take(self.shown).collect(),
            None => String::new(),
        }
    }
}

impl App {
    pub fn new(content: PortfolioData, theme: Theme) -> Self {
        Self {
            content,
            section: Section::Hero,
            theme,
            modal: GalleryModal::new(),
            project_selected: 0,
            timeline_selected: 0,
            tile_selected: 0,
            expanded: HashSet::new(),
            timeline_filter: TimelineFilter::Experience,
            project_filter: String::new(),
            filter_mode: false,
            typing: TypingState::new(),
            status_message: None,
            should_quit: false,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Set a status message with a color
    pub fn set_status(&mut self, message: impl Into<String>, color: Color) {
        let message = message.into();
        log::debug!("status message: {message}");
        self.status_message = Some((message, Instant::now(), color));
    }

    /// Swap in freshly loaded content, keeping the UI state sane.
    pub fn replace_content(&mut self, content: PortfolioData) {
        self.content = content;
        self.modal.close();
        self.clamp_selections();
    }

    /// Per-tick housekeeping: typing animation and status expiry.
    pub fn update(&mut self) {
        let roles = self
            .content
            .hero
            .as_ref()
            .map(|hero| hero.roles.clone())
            .unwrap_or_default();
        self.typing.tick(&roles);
        if let Some((_, since, _)) = &self.status_message
            && since.elapsed() >= STATUS_TTL
        {
            self.status_message = None;
        }
    }

    /// Projects in display order, fuzzy-filtered when a query is set.
    pub fn visible_projects(&self) -> Vec<&Project> {
        let sorted = self.content.sorted_projects();
        if self.project_filter.is_empty() {
            return sorted;
        }
        let mut scored: Vec<(i64, &Project)> = sorted
            .into_iter()
            .filter_map(|project| {
                let haystack = format!(
                    "{} {} {}",
                    project.title,
                    project.category,
                    project.technologies.join(" ")
                );
                self.matcher
                    .fuzzy_match(&haystack, &self.project_filter)
                    .map(|score| (score, project))
            })
            .collect();
        scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
        scored.into_iter().map(|(_, project)| project).collect()
    }

    /// Timeline entries in display order under the active filter.
    pub fn visible_timeline(&self) -> Vec<TimelineItem<'_>> {
        self.content
            .combined_timeline()
            .into_iter()
            .filter(|item| self.timeline_filter.matches(item.category))
            .collect()
    }

    /// The gallery belonging to the selected entry in the active
    /// section, if that entry has one.
    pub fn current_gallery(&self) -> Option<Vec<MediaRecord>> {
        let gallery = match self.section {
            Section::Projects => self
                .visible_projects()
                .get(self.project_selected)
                .map(|p| p.gallery.clone())?,
            Section::Timeline => self
                .visible_timeline()
                .get(self.timeline_selected)
                .map(|item| item.entry.gallery.clone())?,
            _ => return None,
        };
        if gallery.is_empty() { None } else { Some(gallery) }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.modal.is_open() {
            self.handle_modal_key(key);
            return;
        }
        if self.filter_mode {
            self.handle_filter_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.switch_section(self.section.next()),
            KeyCode::BackTab => self.switch_section(self.section.prev()),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.switch_section(Section::ALL[index]);
            }
            KeyCode::Char('t') => self.theme = self.theme.toggle(),
            KeyCode::Char('/') if self.section == Section::Projects => {
                self.filter_mode = true;
            }
            KeyCode::Char('f') if self.section == Section::Timeline => {
                self.timeline_filter = self.timeline_filter.cycle();
                self.clamp_selections();
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Left => self.move_tile(-1),
            KeyCode::Right => self.move_tile(1),
            KeyCode::Char('e') => self.toggle_expanded(),
            KeyCode::Enter => self.open_gallery(),
            _ => {}
        }
    }

    /// While the modal is open every other binding is suppressed; this
    /// is the scroll-lock contract from the web rendering layer.
    fn handle_modal_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.modal.close();
            return;
        }
        if let Some(direction) = event_utils::modal_nav_direction(&key) {
            self.modal.navigate(direction);
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.project_filter.clear();
                self.filter_mode = false;
                self.clamp_selections();
            }
            KeyCode::Enter => self.filter_mode = false,
            KeyCode::Backspace => {
                self.project_filter.pop();
                self.clamp_selections();
            }
            KeyCode::Char(c) => {
                self.project_filter.push(c);
                self.clamp_selections();
            }
            _ => {}
        }
    }

    fn switch_section(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.tile_selected = 0;
        }
    }

    fn move_selection(&mut self, delta: i32) {
        let len = match self.section {
            Section::Projects => self.visible_projects().len(),
            Section::Timeline => self.visible_timeline().len(),
            _ => return,
        };
        if len == 0 {
            return;
        }
        let selected = match self.section {
            Section::Projects => &mut self.project_selected,
            Section::Timeline => &mut self.timeline_selected,
            _ => unreachable!(),
        };
        let next = (*selected as i32 + delta).clamp(0, len as i32 - 1);
        *selected = next as usize;
        self.tile_selected = 0;
    }

    fn move_tile(&mut self, delta: i32) {
        let Some(gallery) = self.current_gallery() else {
            return;
        };
        let len = gallery.len() as i32;
        self.tile_selected = (self.tile_selected as i32 + delta).clamp(0, len - 1) as usize;
    }

    fn toggle_expanded(&mut self) {
        let title = match self.section {
            Section::Projects => self
                .visible_projects()
                .get(self.project_selected)
                .map(|p| p.title.clone()),
            Section::Timeline => self
                .visible_timeline()
                .get(self.timeline_selected)
                .map(|item| item.entry.title.clone()),
            _ => None,
        };
        if let Some(title) = title {
            if !self.expanded.remove(&title) {
                self.expanded.insert(title);
            }
        }
    }

    /// Open the modal over the selected entry's full sibling gallery,
    /// starting at the selected tile.
    fn open_gallery(&mut self) {
        if let Some(gallery) = self.current_gallery() {
            self.modal.open(gallery, self.tile_selected);
        }
    }

    fn clamp_selections(&mut self) {
        let projects = self.visible_projects().len();
        if self.project_selected >= projects {
            self.project_selected = projects.saturating_sub(1);
        }
        let timeline = self.visible_timeline().len();
        if self.timeline_selected >= timeline {
            self.timeline_selected = timeline.saturating_sub(1);
        }
        self.tile_selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_app() -> App {
        let content = PortfolioData::from_json(
            r#"{
                "projects": [
                    {"title": "Alpha", "year": "2022", "gallery": [
                        {"url": "/media/a.png"},
                        {"url": "https://youtu.be/abc123"}
                    ]},
                    {"title": "Beta", "year": "2020"}
                ],
                "experience": [
                    {"title": "Engineer", "company": "Acme", "year": "2021 - Present"}
                ]
            }"#,
        )
        .unwrap();
        App::new(content, Theme::Dark)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_enter_opens_modal_with_selected_tile() {
        let mut app = sample_app();
        app.section = Section::Projects;
        app.handle_key_event(key(KeyCode::Right));
        app.handle_key_event(key(KeyCode::Enter));
        let view = app.modal.view(folio_core::EmbedOptions::expanded()).unwrap();
        assert_eq!(view.index, 1);
        assert_eq!(view.len, 2);
    }

    #[test]
    fn test_modal_suppresses_section_keys() {
        let mut app = sample_app();
        app.section = Section::Projects;
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.modal.is_open());
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Projects);
        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_enter_without_gallery_is_noop() {
        let mut app = sample_app();
        app.section = Section::Projects;
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Enter));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_section_cycling_wraps() {
        let mut app = sample_app();
        assert_eq!(app.section, Section::Hero);
        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.section, Section::Contact);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Hero);
    }

    #[test]
    fn test_project_filter_narrows_list() {
        let mut app = sample_app();
        app.project_filter = "alp".to_string();
        let visible = app.visible_projects();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Alpha");
    }

    #[test]
    fn test_timeline_filter_cycles() {
        let mut app = sample_app();
        assert_eq!(app.timeline_filter, TimelineFilter::Experience);
        app.section = Section::Timeline;
        app.handle_key_event(key(KeyCode::Char('f')));
        assert_eq!(app.timeline_filter, TimelineFilter::Education);
        assert!(app.visible_timeline().is_empty());
    }
}
