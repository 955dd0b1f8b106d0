use anyhow::{anyhow, ensure, Result};
use clap::Parser;
use futures_util::future::join_all;

use super::utils::{format_details, format_ranked, rank, RankedProject};
use crate::api::types::{CurrentUser, Project, UserType};
use crate::api::ApiClient;
use crate::state::scope::PageScope;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Projects recommended for you")]
pub struct Options {
    #[clap(short = 'n', long = "limit", help = "Only show the best N projects")]
    pub limit: Option<usize>,

    #[clap(
        short = 'd',
        long = "details",
        help = "Show the analysis, recommendations and next steps per project"
    )]
    pub details: bool,
}

/// Scores every project for `freelancer_id`, best match first.
///
/// One call per project; any failed call fails the whole listing.
pub async fn score_projects(
    api: &ApiClient,
    freelancer_id: &str,
    projects: Vec<Project>,
) -> Result<Vec<RankedProject>> {
    // dropped together if the command goes away
    let scope = PageScope::new();

    let handles = projects
        .into_iter()
        .map(|project| {
            let api = api.clone();
            let freelancer_id = freelancer_id.to_string();

            scope.spawn(async move {
                let result = api.find_matches(&freelancer_id, &project).await?;

                Ok::<_, anyhow::Error>(RankedProject { project, result })
            })
        })
        .collect::<Vec<_>>();

    let mut ranked = vec![];

    for joined in join_all(handles).await {
        let scored = joined?.ok_or_else(|| anyhow!("Scoring was cancelled"))??;

        ranked.push(scored);
    }

    Ok(rank(ranked))
}

pub async fn handle(options: &Options, state: State, user: &CurrentUser) -> Result<()> {
    ensure!(
        user.user_type == UserType::Freelancer,
        "Recommended projects are only available for freelancers"
    );

    let projects = state.api.list_projects().await?;

    if projects.is_empty() {
        log::info!("No projects found");
        return Ok(());
    }

    log::info!("Scoring {} projects...", projects.len());

    let mut ranked = score_projects(&state.api, &user.email, projects).await?;

    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }

    if !user.skills.is_empty() {
        log::info!(
            "Based on your skills ({}), skills you have are marked with *",
            user.skills.join(", ")
        );
    }

    println!("{}", format_ranked(&ranked, &user.skills, true).join("\n"));

    if options.details {
        for item in &ranked {
            println!("\n{}", format_details(item).join("\n"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::session::Session;
    use crate::testing::MockBackend;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: "d".to_string(),
            budget: 500.0,
            timeline: "2 weeks".to_string(),
            required_skills: vec!["Rust".to_string()],
            company_email: Some("c@b.com".to_string()),
            freelancer_email: None,
        }
    }

    fn score_by_title(backend: &MockBackend) {
        backend.respond_with("POST", "/api/matching/find-matches", |request| {
            let score = match request.json()["title"].as_str() {
                Some("Shop") => 0.55,
                Some("Api") => 0.93,
                Some("Blog") => 0.71,
                _ => return (500, json!({ "detail": "scoring failed" })),
            };

            (
                200,
                json!({
                    "match_score": score,
                    "compatibility_details": {},
                    "recommendations": [],
                    "next_steps": ["Schedule technical interview"],
                }),
            )
        });
    }

    #[tokio::test]
    async fn test_one_call_per_project_ranked() {
        let backend = MockBackend::start().await;
        let api = backend.client(Session::in_memory(Some("tok".to_string())));

        score_by_title(&backend);

        let ranked = score_projects(
            &api,
            "f@b.com",
            vec![project("Shop"), project("Api"), project("Blog")],
        )
        .await
        .unwrap();

        let titles = ranked
            .iter()
            .map(|item| item.project.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Api", "Blog", "Shop"]);
        assert_eq!(ranked[0].result.next_steps.len(), 1);

        let requests = backend.requests();
        assert_eq!(requests.len(), 3);

        for request in &requests {
            assert_eq!(request.method, "POST");
            assert_eq!(
                request.path,
                "/api/matching/find-matches?freelancer_id=f%40b.com"
            );
            assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
        }
    }

    #[tokio::test]
    async fn test_failed_call_fails_listing() {
        let backend = MockBackend::start().await;
        let api = backend.client(Session::in_memory(Some("tok".to_string())));

        score_by_title(&backend);

        let err = score_projects(&api, "f@b.com", vec![project("Api"), project("Broken")])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("500"));
        assert_eq!(backend.request_count(), 2);
    }
}
