use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::config::ColorMode;
use crate::lat::{LatResult, Trait, LAT_QUESTIONS};
use crate::likert::mean_to_percent;
use crate::locale::Locale;
use crate::profile::{provisional_comment, ScoreResult, Section, Tier};
use crate::quick::{QuickResult, QUICK_ITEMS};

const DEFAULT_BAR_WIDTH: usize = 30;

/// Decide whether to emit ANSI colors for the configured mode
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Width of score bars: the configured width, or one that fits the terminal
pub fn bar_width(configured: Option<usize>) -> usize {
    if let Some(width) = configured {
        return width.max(1);
    }
    match get_terminal_width() {
        // Leave room for the section title and the numeric score
        Some(width) if width > 50 => (width - 40).min(DEFAULT_BAR_WIDTH),
        Some(_) => 10,
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Render a 0-100 value as a fixed-width bar
pub fn format_bar(percent: i32, width: usize) -> String {
    let filled = ((percent.clamp(0, 100) as usize * width) + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn colorize_score(score: i32, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match Tier::for_score(score) {
        Tier::High => text.green().to_string(),
        Tier::Middle => text.yellow().to_string(),
        Tier::Low => text.red().to_string(),
    }
}

/// Multi-line summary of a profile result
pub fn format_profile_result(
    result: &ScoreResult,
    locale: Locale,
    use_colors: bool,
    width: usize,
) -> String {
    let mut lines = Vec::new();

    let overall = result.overall.to_string();
    let label = result.label_in(locale);
    if use_colors {
        lines.push(format!("Overall: {}", overall.bold()));
        lines.push(format!("Type:    {}", label.cyan()));
    } else {
        lines.push(format!("Overall: {}", overall));
        lines.push(format!("Type:    {}", label));
    }
    lines.push(String::new());

    let title_width = Section::ALL
        .iter()
        .map(|s| s.title(locale).chars().count())
        .max()
        .unwrap_or(0);

    for entry in &result.sections {
        let title = entry.section.title(locale);
        let padding = " ".repeat(title_width - title.chars().count());
        let bar = colorize_score(entry.score, &format_bar(entry.score, width), use_colors);
        lines.push(format!(
            "{}. {}{}  {}  {:>3}",
            entry.section.key(),
            title,
            padding,
            bar,
            entry.score
        ));
    }

    lines.push(String::new());
    lines.push(provisional_comment(result.overall, locale).to_string());

    lines.join("\n")
}

/// Multi-line summary of a trait classification
pub fn format_lat_result(
    result: &LatResult,
    locale: Locale,
    use_colors: bool,
    width: usize,
) -> String {
    let mut lines = Vec::new();

    let code = result.type_code.as_str();
    let name = result.type_code.name(locale);
    if use_colors {
        lines.push(format!("Type: {} ({})", code.bold(), name.magenta()));
    } else {
        lines.push(format!("Type: {} ({})", code, name));
    }
    lines.push(format!(
        "Main: {}  Sub: {}",
        result.main_trait, result.sub_trait
    ));
    lines.push(String::new());

    let name_width = Trait::ALL
        .iter()
        .map(|t| t.name(locale).chars().count())
        .max()
        .unwrap_or(0);

    for t in Trait::ALL {
        let mean = result.scores.get(t);
        let percent = mean_to_percent(mean);
        let trait_name = t.name(locale);
        let padding = " ".repeat(name_width - trait_name.chars().count());
        let bar = colorize_score(percent, &format_bar(percent, width), use_colors);
        lines.push(format!(
            "{} {}{}  {}  {:.2}",
            t.code(),
            trait_name,
            padding,
            bar,
            mean
        ));
    }

    lines.join("\n")
}

/// One-line summary of the quick check
pub fn format_quick_result(result: &QuickResult, use_colors: bool, width: usize) -> String {
    let bar = colorize_score(result.score, &format_bar(result.score, width), use_colors);
    format!("Quick check: {}  {:>3}", bar, result.score)
}

/// Numbered profile catalog grouped by section, reverse-coded items marked with (R)
pub fn format_profile_questions(locale: Locale) -> String {
    let mut lines = Vec::new();
    for section in Section::ALL {
        lines.push(format!("{}. {}", section.key(), section.title(locale)));
        for question in section.questions() {
            let marker = if crate::profile::is_reverse_coded(question.id) {
                " (R)"
            } else {
                ""
            };
            lines.push(format!("  {:<6} {}{}", question.id, question.prompt.get(locale), marker));
        }
    }
    lines.join("\n")
}

pub fn format_lat_questions(locale: Locale) -> String {
    LAT_QUESTIONS
        .iter()
        .map(|q| {
            format!(
                "{:>2}. [{}] {}  ({})",
                q.id,
                q.measures,
                q.prompt.get(locale),
                q.measures.name(locale)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_quick_questions(locale: Locale) -> String {
    QUICK_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. {} (0-10)\n   {}",
                i + 1,
                item.prompt.get(locale),
                item.hint.get(locale)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON envelope for a scored result
#[derive(Debug, Serialize)]
pub struct Report<'a, T: Serialize> {
    pub kind: &'static str,
    pub assessed_at: DateTime<Utc>,
    pub result: &'a T,
    /// Provisional comment, only present for profile results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'static str>,
}

impl<'a, T: Serialize> Report<'a, T> {
    pub fn new(kind: &'static str, result: &'a T) -> Self {
        Self {
            kind,
            assessed_at: Utc::now(),
            result,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }
}
