//! Deterministic answer builders: format an answer straight from resume text.
//!
//! Every builder is a pure `fn(&str) -> String` over the raw resume so it can sit in
//! the route table next to its predicate. Builders that have nothing to extract
//! return a fixed "not listed" sentence rather than an empty string.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::chat::canned::{self, CANDIDATE_NAME};
use crate::chat::resume::extract_section;

/// Raw lowercase term → canonical display name. Several aliases may share a name.
const TECH_ALIASES: &[(&str, &str)] = &[
    ("react", "React"),
    ("react.js", "React"),
    ("next.js", "Next.js"),
    ("node.js", "Node.js"),
    ("express.js", "Express.js"),
    ("typescript", "TypeScript"),
    ("javascript", "JavaScript"),
    ("python", "Python"),
    ("sql", "SQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("prisma", "Prisma"),
    ("tailwind", "Tailwind CSS"),
    ("tailwind css", "Tailwind CSS"),
    ("hono", "Hono"),
    ("cloudflare workers", "Cloudflare Workers"),
    ("vercel", "Vercel"),
    ("clerk", "Clerk"),
    ("socket.io", "Socket.IO"),
    ("langchain", "LangChain"),
    ("huggingface", "HuggingFace"),
    ("scikit-learn", "scikit-learn"),
    ("mysql", "MySQL"),
    ("git", "Git/GitHub"),
    ("github", "Git/GitHub"),
];

const BACKEND_KEYWORDS: &[&str] = &[
    "rest api",
    "node.js",
    "express",
    "postgresql",
    "prisma",
    "cloudflare workers",
    "authentication",
    "server-side",
    "database",
    "mysql",
    "socket.io",
];

const MAX_TECHNOLOGIES: usize = 8;
const DOMINANT_TECHNOLOGIES: usize = 5;
const MAX_BACKEND_POINTS: usize = 6;
const MAX_LINKS: usize = 5;

static TECH_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    TECH_ALIASES
        .iter()
        .map(|(raw, canonical)| {
            let pattern = format!(r"\b{}\b", regex::escape(raw));
            let re = Regex::new(&pattern).expect("alias patterns are escaped literals");
            (re, *canonical)
        })
        .collect()
});

static AGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Age:\s*([^\n]+)").expect("static age pattern"));

static GITHUB_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://github\.com/[A-Za-z0-9_.-]+(?:/[A-Za-z0-9_.-]+)?")
        .expect("static github pattern")
});

/// Strips `-` and spaces from both ends, as bullet markers.
fn strip_bullet(line: &str) -> &str {
    line.trim_matches(|c| c == '-' || c == ' ').trim()
}

fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keeps the first occurrence of every item.
fn dedup_preserving_order<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let key: &str = item.as_ref();
            seen.insert(key.to_string())
        })
        .collect()
}

/// Counts whole-word alias hits in the lowercased resume and ranks canonical names.
///
/// Ordering depends only on the text: count descending, then name ascending.
pub fn extract_top_technologies(resume_text: &str) -> Vec<(&'static str, usize)> {
    let text = resume_text.to_lowercase();
    let mut scores: BTreeMap<&'static str, usize> = BTreeMap::new();

    for (pattern, canonical) in TECH_PATTERNS.iter() {
        let count = pattern.find_iter(&text).count();
        if count > 0 {
            *scores.entry(*canonical).or_insert(0) += count;
        }
    }

    let mut ranked: Vec<(&'static str, usize)> = scores.into_iter().collect();
    // BTreeMap iteration is already name-ascending; the stable sort keeps that for ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

pub fn build_technology_answer(resume_text: &str) -> String {
    let ranked = extract_top_technologies(resume_text);
    if ranked.is_empty() {
        return "I could not detect specific technologies from the current resume text.".to_string();
    }

    let names: Vec<&str> = ranked
        .iter()
        .take(MAX_TECHNOLOGIES)
        .map(|(name, _)| *name)
        .collect();
    let top_line = names
        .iter()
        .take(DOMINANT_TECHNOLOGIES)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Based on this resume, the strongest technologies are:\n{}\n\nMost dominant stack signals: {top_line}.",
        bullets(&names)
    )
}

pub fn build_backend_answer(resume_text: &str) -> String {
    let points = resume_text.lines().map(strip_bullet).filter(|line| {
        if line.is_empty() {
            return false;
        }
        let low = line.to_lowercase();
        BACKEND_KEYWORDS.iter().any(|k| low.contains(k))
    });

    let deduped: Vec<&str> = dedup_preserving_order(points)
        .into_iter()
        .take(MAX_BACKEND_POINTS)
        .collect();
    if deduped.is_empty() {
        return "Backend work is not clearly listed in the current resume text.".to_string();
    }

    format!(
        "{CANDIDATE_NAME}'s backend work includes:\n{}",
        bullets(&deduped)
    )
}

pub fn build_projects_answer(resume_text: &str) -> String {
    let mut titles: Vec<&str> = Vec::new();
    let mut links: Vec<&str> = Vec::new();
    let mut capture = false;

    for line in resume_text.lines().map(str::trim) {
        if line.to_lowercase().starts_with("## major projects") {
            capture = true;
            continue;
        }
        if capture && line.starts_with("## ") {
            break;
        }
        if !capture {
            continue;
        }

        if line.starts_with("### ") {
            if let Some((_, rest)) = line.split_once(')') {
                let title = rest.trim();
                if !title.is_empty() {
                    titles.push(title);
                }
            }
        }
        if line.contains("http://") || line.contains("https://") {
            links.push(line.trim_start_matches(['-', ' ']).trim());
        }
    }

    if titles.is_empty() {
        return "Specific project names are not clearly listed in the current profile.".to_string();
    }

    let link_lines = if links.is_empty() {
        "- No links listed.".to_string()
    } else {
        bullets(&links[..links.len().min(MAX_LINKS)])
    };

    format!(
        "Projects {CANDIDATE_NAME} has made:\n{}\n\nAvailable project links:\n{link_lines}",
        bullets(&titles)
    )
}

pub fn build_github_answer(resume_text: &str) -> String {
    let urls = dedup_preserving_order(
        GITHUB_URL_PATTERN
            .find_iter(resume_text)
            .map(|m| m.as_str()),
    );
    if urls.is_empty() {
        return "GitHub URL is not listed in the current profile.".to_string();
    }

    let mut profile: Option<String> = None;
    let mut repos: Vec<&str> = Vec::new();
    for url in urls {
        // "https:", "", "github.com", user[, repo]
        let segments = url.trim_end_matches('/').split('/').count();
        if segments == 4 && profile.is_none() {
            profile = Some(url.to_string());
        } else if segments >= 5 {
            repos.push(url);
        }
    }

    if profile.is_none() {
        profile = repos.first().map(|repo| {
            repo.trim_end_matches('/')
                .split('/')
                .take(4)
                .collect::<Vec<_>>()
                .join("/")
        });
    }

    let mut lines = Vec::new();
    if let Some(profile) = profile {
        lines.push(format!("GitHub profile: {profile}"));
    }
    if !repos.is_empty() {
        lines.push("GitHub repositories:".to_string());
        lines.extend(repos.iter().take(MAX_LINKS).map(|r| format!("- {r}")));
    }
    lines.join("\n")
}

pub fn build_age_answer(resume_text: &str) -> String {
    match AGE_PATTERN.captures(resume_text).and_then(|c| c.get(1)) {
        Some(m) => {
            let age = m.as_str().replace("(share only when asked)", "");
            format!("{CANDIDATE_NAME} is {}.", age.trim())
        }
        None => "Age is not listed in the profile.".to_string(),
    }
}

pub fn build_contact_answer(resume_text: &str) -> String {
    let contact = extract_section(resume_text, "Contact");
    if contact.is_empty() {
        return "Contact details are not listed in the profile.".to_string();
    }
    contact
}

pub fn build_skills_projects_answer(resume_text: &str) -> String {
    let parts: Vec<String> = ["Technical Skills", "Major Projects"]
        .iter()
        .map(|section| extract_section(resume_text, section))
        .filter(|block| !block.is_empty())
        .collect();
    if parts.is_empty() {
        return "Technical skills and major projects are not clearly listed in the profile."
            .to_string();
    }
    parts.join("\n\n")
}

// Static builders share the extraction signature so the router can treat them alike.

pub fn build_why_hire_answer(_resume_text: &str) -> String {
    canned::WHY_HIRE.to_string()
}

pub fn build_intro_answer(_resume_text: &str) -> String {
    canned::INTRO.to_string()
}

pub fn build_projects_pitch_answer(_resume_text: &str) -> String {
    canned::PROJECTS_PITCH.to_string()
}

pub fn build_backend_strengths_answer(_resume_text: &str) -> String {
    canned::BACKEND_STRENGTHS.to_string()
}

pub fn build_frontend_strengths_answer(_resume_text: &str) -> String {
    canned::FRONTEND_STRENGTHS.to_string()
}

pub fn build_softskills_answer(_resume_text: &str) -> String {
    canned::SOFT_SKILLS.to_string()
}
