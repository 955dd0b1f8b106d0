use serde_json::json;

use super::types::{CompanyProfile, FreelancerProfile, PortfolioItem, Project, UserType};
use super::ApiError;
use crate::session::Session;
use crate::testing::{unused_url, MockBackend};

fn site_project() -> Project {
    Project {
        title: "Site".to_string(),
        description: "E-commerce".to_string(),
        budget: 1000.0,
        timeline: "1 month".to_string(),
        required_skills: vec!["React".to_string()],
        company_email: Some("a@b.com".to_string()),
        freelancer_email: None,
    }
}

fn signed_in() -> Session {
    Session::in_memory(Some("tok".to_string()))
}

#[tokio::test]
async fn every_operation_requires_a_credential() {
    let backend = MockBackend::start().await;
    let api = backend.client(Session::in_memory(None));
    let project = site_project();

    let profile = FreelancerProfile {
        experience: String::new(),
        skills: vec![],
        portfolio: vec![],
        hourly_rate: None,
        availability: None,
        email: "f@b.com".to_string(),
        user_type: UserType::Freelancer,
    };

    let company = CompanyProfile {
        name: "Acme".to_string(),
        description: String::new(),
        industry: String::new(),
        size: "1-10".to_string(),
        location: String::new(),
        email: "c@b.com".to_string(),
        user_type: UserType::Company,
    };

    let results = vec![
        api.list_freelancers().await.err(),
        api.list_companies().await.err(),
        api.list_projects().await.err(),
        api.current_user().await.err(),
        api.create_freelancer_profile(&profile).await.err(),
        api.create_company(&company).await.err(),
        api.create_project(&project).await.err(),
        api.find_matches("f1", &project).await.err(),
        api.batch_match(&project, 0.7).await.err(),
    ];

    for result in results {
        assert!(matches!(result, Some(ApiError::Unauthenticated)));
    }

    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn create_project_sends_body_and_returns_created() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());
    let project = site_project();

    backend.respond(
        "POST",
        "/api/projects",
        201,
        serde_json::to_value(&project).unwrap(),
    );

    let created = api.create_project(&project).await.unwrap();
    assert_eq!(created, project);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer tok"));

    let sent: Project = serde_json::from_value(requests[0].json()).unwrap();
    assert_eq!(sent, project);
}

#[tokio::test]
async fn server_error_keeps_status_and_detail() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());

    backend.respond("POST", "/api/projects", 500, json!({ "detail": "boom" }));

    let err = api.create_project(&site_project()).await.unwrap_err();

    assert!(err.to_string().contains("500"));
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.detail(), Some("boom"));
}

#[tokio::test]
async fn error_without_detail_body() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());

    backend.respond("GET", "/api/companies", 503, json!("unavailable"));

    let err = api.list_companies().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn batch_match_passes_threshold_through() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());

    backend.respond(
        "POST",
        "/api/matching/batch-match",
        200,
        json!([
            { "freelancer_id": "f1", "score": 0.91 },
            { "freelancer_id": "f2", "score": 0.42 },
        ]),
    );

    let matches = api.batch_match(&site_project(), 0.7).await.unwrap();

    // filtering is the backend's job
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[1].freelancer_id, "f2");

    let body = backend.requests()[0].json();
    assert_eq!(body["min_score"], json!(0.7));
    assert_eq!(body["project"]["title"], json!("Site"));
}

#[tokio::test]
async fn find_matches_sends_freelancer_in_query() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());

    backend.respond(
        "POST",
        "/api/matching/find-matches",
        200,
        json!({
            "match_score": 0.85,
            "compatibility_details": { "skills": "good" },
            "recommendations": ["Highlight React work"],
            "next_steps": ["Schedule technical interview"],
        }),
    );

    let result = api.find_matches("f@b.com", &site_project()).await.unwrap();

    assert_eq!(result.match_score, 0.85);
    assert_eq!(result.next_steps.len(), 1);
    assert_eq!(
        backend.requests()[0].path,
        "/api/matching/find-matches?freelancer_id=f%40b.com"
    );
}

#[tokio::test]
async fn list_projects_is_idempotent() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());

    backend.respond(
        "GET",
        "/api/projects",
        200,
        json!([serde_json::to_value(site_project()).unwrap()]),
    );

    let first = api.list_projects().await.unwrap();
    let second = api.list_projects().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert_eq!(backend.request_count(), 2);
}

#[tokio::test]
async fn malformed_success_body_is_rejected() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());

    backend.respond(
        "GET",
        "/api/profiles/me",
        200,
        json!({ "email": "x@b.com", "user_type": "Admin" }),
    );

    let err = api.current_user().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { ref path, .. } if path == "/api/profiles/me"));
}

#[tokio::test]
async fn register_and_login_need_no_credential() {
    let backend = MockBackend::start().await;
    let api = backend.client(Session::in_memory(None));

    backend.respond(
        "POST",
        "/api/profiles/register",
        200,
        json!({ "token": "new", "user_type": "Company" }),
    );
    backend.respond(
        "POST",
        "/api/auth/login",
        200,
        json!({ "token": "again", "user_type": "Company" }),
    );

    let registered = api
        .register("c@b.com", "secret", UserType::Company)
        .await
        .unwrap();
    assert_eq!(registered.token, "new");

    let logged_in = api.login("c@b.com", "secret").await.unwrap();
    assert_eq!(logged_in.token, "again");

    let requests = backend.requests();
    assert!(requests.iter().all(|r| r.authorization.is_none()));
    assert_eq!(
        requests[0].json(),
        json!({ "email": "c@b.com", "password": "secret", "user_type": "Company" })
    );

    // the client never stores credentials on its own
    assert!(!api.session().is_signed_in().await);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    let api = crate::api::ApiClient::new(
        crate::state::http::HttpClient::new(Some(unused_url())).unwrap(),
        signed_in(),
    );

    let err = api.list_projects().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn create_freelancer_profile_round_trips() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());

    let profile = FreelancerProfile {
        experience: "5 years".to_string(),
        skills: vec!["Rust".to_string(), "React".to_string()],
        portfolio: vec![PortfolioItem {
            title: "Shop".to_string(),
            description: "Storefront".to_string(),
            url: "https://shop.example".to_string(),
            technologies: vec!["Next.js".to_string()],
        }],
        hourly_rate: Some(45.0),
        availability: Some("Full-time".to_string()),
        email: "f@b.com".to_string(),
        user_type: UserType::Freelancer,
    };

    backend.respond(
        "POST",
        "/api/profiles",
        200,
        serde_json::to_value(&profile).unwrap(),
    );

    let saved = api.create_freelancer_profile(&profile).await.unwrap();
    assert_eq!(saved, profile);

    let requests = backend.requests();
    assert_eq!(requests[0].method, "POST");

    let sent: FreelancerProfile = serde_json::from_value(requests[0].json()).unwrap();
    assert_eq!(sent, profile);
}

#[tokio::test]
async fn create_company_accepts_backend_echo() {
    let backend = MockBackend::start().await;
    let api = backend.client(signed_in());

    let company = CompanyProfile {
        name: "Acme".to_string(),
        description: "d".to_string(),
        industry: "AI".to_string(),
        size: "1-10".to_string(),
        location: "Rome".to_string(),
        email: "c@b.com".to_string(),
        user_type: UserType::Company,
    };

    // the backend echoes the company without its owner
    backend.respond(
        "POST",
        "/api/companies",
        200,
        json!({
            "name": "Acme",
            "description": "d",
            "industry": "AI",
            "size": "1-10",
            "location": "Rome",
        }),
    );

    let saved = api.create_company(&company).await.unwrap();

    assert_eq!(saved.name, "Acme");
    assert_eq!(saved.size, "1-10");
    assert_eq!(saved.user_type, UserType::Company);
    assert_eq!(backend.request_count(), 1);

    let sent: CompanyProfile = serde_json::from_value(backend.requests()[0].json()).unwrap();
    assert_eq!(sent, company);
}
