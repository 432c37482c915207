//! Signals the user declared about themselves.

use std::sync::LazyLock;

use marketrank_core::config::NeedsConfig;
use marketrank_core::UserProfile;
use regex::Regex;

static PAIN_POINT_DELIMITERS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[,;|/\n\r]+").ok());

/// Explicit signals in priority order: industry, department, role,
/// team-size bucket, then pain points. Blank fields are skipped; duplicates
/// are left for the caller to drop.
pub fn explicit_signals(profile: &UserProfile, config: &NeedsConfig) -> Vec<String> {
    let mut signals = Vec::new();

    if let Some(industry) = non_blank(profile.industry.as_deref()) {
        signals.push(industry.to_string());
    }
    if let Some(department) = non_blank(profile.department.as_deref()) {
        signals.push(format!("{department} workflows"));
    }
    if let Some(role) = non_blank(profile.role.as_deref()) {
        signals.push(format!("{role} enablement"));
    }
    if let Some(size) = profile.team_size {
        signals.push(team_size_bucket(size, config).to_string());
    }
    for raw in &profile.pain_points {
        signals.extend(split_pain_points(raw));
    }

    signals
}

/// Map a declared team size to its scale label.
pub fn team_size_bucket(size: u32, config: &NeedsConfig) -> &'static str {
    if size > config.enterprise_team_size {
        "Enterprise scale"
    } else if size > config.team_productivity_size {
        "Team productivity"
    } else {
        "Startup velocity"
    }
}

/// Split one free-text pain point field on list delimiters.
pub fn split_pain_points(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = match PAIN_POINT_DELIMITERS.as_ref() {
        Some(re) => re.split(raw).collect(),
        None => raw
            .split(|c: char| matches!(c, ',' | ';' | '|' | '/' | '\n' | '\r'))
            .collect(),
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
