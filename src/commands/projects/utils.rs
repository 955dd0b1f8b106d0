use std::io::Write;

use anyhow::{ensure, Result};
use tabwriter::TabWriter;

use crate::api::types::{CurrentUser, Project, UserType};
use crate::utils::dedupe_trimmed;

/// Projects owned by the user: posted by a company, or assigned to a freelancer.
pub fn user_projects<'a>(projects: &'a [Project], user: &CurrentUser) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| {
            let owner = match user.user_type {
                UserType::Company => project.company_email.as_deref(),
                UserType::Freelancer => project.freelancer_email.as_deref(),
            };

            owner == Some(user.email.as_str())
        })
        .collect()
}

/// Builds a project for `company_email`, rejecting incomplete submissions.
pub fn new_project(
    company_email: &str,
    title: &str,
    description: &str,
    budget: f64,
    timeline: &str,
    skills: &[String],
) -> Result<Project> {
    let required_skills = dedupe_trimmed(skills);

    ensure!(
        !title.trim().is_empty()
            && !description.trim().is_empty()
            && !timeline.trim().is_empty(),
        "All fields are required"
    );
    ensure!(
        budget.is_finite() && budget > 0.0,
        "Budget must be greater than zero"
    );
    ensure!(
        !required_skills.is_empty(),
        "At least one required skill is needed"
    );

    Ok(Project {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        budget,
        timeline: timeline.trim().to_string(),
        required_skills,
        company_email: Some(company_email.to_string()),
        freelancer_email: None,
    })
}

pub fn format_budget(budget: f64) -> String {
    if budget.fract() == 0.0 {
        format!("€{budget:.0}")
    } else {
        format!("€{budget:.2}")
    }
}

pub fn format_projects(projects: &[&Project], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "TITLE\tBUDGET\tTIMELINE\tSKILLS\tCOMPANY").unwrap();
    }

    for project in projects {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}",
            project.title,
            format_budget(project.budget),
            project.timeline,
            project.required_skills.join(", "),
            project.company_email.as_deref().unwrap_or("-"),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}
