use std::io::Write;

use tabwriter::TabWriter;

use serde_json::Value;

use crate::api::types::{MatchResult, Project, ScoredMatch};
use crate::commands::projects::utils::format_budget;

/// A project together with how well the current freelancer fits it.
#[derive(Debug, Clone)]
pub struct RankedProject {
    pub project: Project,
    pub result: MatchResult,
}

impl RankedProject {
    pub fn score(&self) -> f64 {
        self.result.match_score
    }
}

/// Scores in `0..=1` are fractions, anything above is already a percentage.
pub fn score_percent(score: f64) -> f64 {
    let percent = if score <= 1.0 { score * 100.0 } else { score };

    percent.clamp(0.0, 100.0)
}

pub fn match_label(percent: f64) -> &'static str {
    match percent {
        p if p >= 90.0 => "Excellent match",
        p if p >= 75.0 => "Great match",
        p if p >= 60.0 => "Good match",
        p if p >= 40.0 => "Fair match",
        _ => "Low match",
    }
}

/// Highest score first.
pub fn rank(mut ranked: Vec<RankedProject>) -> Vec<RankedProject> {
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
    ranked
}

/// Marks the skills the freelancer already has with a `*`.
pub fn highlight_skills(required: &[String], own: &[String]) -> String {
    required
        .iter()
        .map(|skill| {
            if own.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
                format!("{skill}*")
            } else {
                skill.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_ranked(ranked: &[RankedProject], own_skills: &[String], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "SCORE\tMATCH\tTITLE\tBUDGET\tSKILLS").unwrap();
    }

    for item in ranked {
        let percent = score_percent(item.score());

        writeln!(
            &mut tw,
            "{:.0}%\t{}\t{}\t{}\t{}",
            percent,
            match_label(percent),
            item.project.title,
            format_budget(item.project.budget),
            highlight_skills(&item.project.required_skills, own_skills),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

fn detail_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Analysis, recommendations and next steps returned for one project.
pub fn format_details(item: &RankedProject) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({:.0}%)",
        item.project.title,
        score_percent(item.score())
    )];

    match &item.result.compatibility_details {
        Value::Null => {}
        Value::Object(details) => {
            for (key, value) in details {
                lines.push(format!("  {key}: {}", detail_value(value)));
            }
        }
        other => lines.push(format!("  analysis: {}", detail_value(other))),
    }

    for recommendation in &item.result.recommendations {
        lines.push(format!("  - {recommendation}"));
    }

    for (idx, step) in item.result.next_steps.iter().enumerate() {
        lines.push(format!("  {}. {step}", idx + 1));
    }

    lines
}

pub fn format_matches(matches: &[ScoredMatch], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "FREELANCER\tSCORE\tMATCH").unwrap();
    }

    for scored in matches {
        let percent = score_percent(scored.score);

        writeln!(
            &mut tw,
            "{}\t{:.0}%\t{}",
            scored.freelancer_id,
            percent,
            match_label(percent)
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}
