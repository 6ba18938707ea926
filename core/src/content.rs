//! Portfolio content model.
//!
//! Everything the viewer shows comes from a single `portfolioData.json`
//! document. The types here mirror that document loosely: every field is
//! optional or defaulted so a partially filled content file still loads.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading the content document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One media entry in a gallery: a URL, an optional explicit type hint,
/// and an optional display title. The hint and URL together drive
/// classification; the title is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaRecord {
    pub url: String,
    /// Explicit media type hint, e.g. `"youtube"`, `"google_slides"`,
    /// `"local_path"`. Overrides URL sniffing when recognized.
    #[serde(rename = "type", default)]
    pub kind_hint: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl MediaRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind_hint: None,
            title: None,
        }
    }

    pub fn with_hint(url: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind_hint: Some(hint.into()),
            title: None,
        }
    }
}

/// Top-level content document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub navigation: Option<Navigation>,
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub about: Option<About>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social: Option<Social>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub sections: Sections,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Navigation {
    #[serde(default)]
    pub logo: String,
    #[serde(rename = "menuItems", default)]
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub greeting: String,
    #[serde(rename = "waveEmoji", default)]
    pub wave_emoji: String,
    #[serde(default)]
    pub name: String,
    /// Rotating role strings shown with the typing animation.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<ProfileImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stat {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub label: String,
}

/// Light/dark profile image variants; the active theme picks one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileImage {
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub dark: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct About {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// A work-experience or education entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<MediaRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub gallery: Vec<MediaRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub download: bool,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: Vec<ContactDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactDetail {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Per-section display titles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sections {
    #[serde(default)]
    pub skills: SectionMeta,
    #[serde(default)]
    pub timeline: SectionMeta,
    #[serde(default)]
    pub projects: SectionMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionMeta {
    #[serde(default)]
    pub title: String,
}

/// Which half of the combined timeline an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineCategory {
    Experience,
    Education,
}

impl TimelineCategory {
    pub fn label(self) -> &'static str {
        match self {
            TimelineCategory::Experience => "Experience",
            TimelineCategory::Education => "Education",
        }
    }
}

/// A timeline entry tagged with its source category.
#[derive(Debug, Clone, Copy)]
pub struct TimelineItem<'a> {
    pub category: TimelineCategory,
    pub entry: &'a TimelineEntry,
}

impl PortfolioData {
    /// Load and parse the content document from disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse the content document from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let data = serde_json::from_str(raw)?;
        Ok(data)
    }

    /// Projects ordered newest first by the first four-digit year in
    /// their `year` field. Entries without a year sort last.
    pub fn sorted_projects(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.iter().collect();
        projects.sort_by_key(|p| std::cmp::Reverse(first_year(&p.year)));
        projects
    }

    /// Education and experience merged into one list, newest first.
    /// Ongoing entries (`Present` in the year field) sort to the top.
    pub fn combined_timeline(&self) -> Vec<TimelineItem<'_>> {
        let mut items: Vec<TimelineItem<'_>> = self
            .experience
            .iter()
            .map(|entry| TimelineItem {
                category: TimelineCategory::Experience,
                entry,
            })
            .chain(self.education.iter().map(|entry| TimelineItem {
                category: TimelineCategory::Education,
                entry,
            }))
            .collect();
        items.sort_by_key(|item| std::cmp::Reverse(timeline_sort_year(&item.entry.year)));
        items
    }

    /// The social link that carries the résumé, if any.
    pub fn resume_link(&self) -> Option<&SocialLink> {
        self.social
            .as_ref()?
            .links
            .iter()
            .find(|link| link.icon == "resume")
    }
}

fn timeline_sort_year(year: &str) -> i32 {
    if year.contains("Present") {
        9999
    } else {
        first_year(year)
    }
}

/// First run of four consecutive ASCII digits in `s`, or 0.
fn first_year(s: &str) -> i32 {
    let bytes = s.as_bytes();
    let mut run = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            run += 1;
            if run == 4 {
                // The run may continue; only the first four digits count.
                return s[i + 1 - 4..=i].parse().unwrap_or(0);
            }
        } else {
            run = 0;
        }
    }
    0
}

/// Shorten `text` to at most `max` characters for a collapsed card,
/// appending an ellipsis when anything was cut.
pub fn truncate(text: &str, max: usize) -> (String, bool) {
    if text.chars().count() <= max {
        return (text.to_string(), false);
    }
    let cut: String = text.chars().take(max).collect();
    (format!("{}…", cut.trim_end()), true)
}
