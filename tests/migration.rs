//! End-to-end migration tests against a mocked gogs server
use gitlab2gogs::gitlab::project::{GitlabNamespace, GitlabProject};
use gitlab2gogs::gogs::client::GogsClient;
use gitlab2gogs::migrator::{Migrator, MigratorOptions, ProjectFilter};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn project(namespace: &str, name: &str, visibility: &str, archived: bool) -> GitlabProject {
    GitlabProject {
        id: 1,
        name: name.to_string(),
        description: Some(format!("description of {name}")),
        visibility: visibility.to_string(),
        archived,
        http_url_to_repo: format!("https://gitlab.example.com/{namespace}/{name}.git"),
        namespace: GitlabNamespace {
            name: namespace.to_string(),
            description: Some(format!("description of {namespace}")),
        },
    }
}

fn migrator(server: &MockServer, lc_names: bool) -> Migrator {
    let gogs = GogsClient::new(server.uri(), "gogs-token".to_string());
    let opts = MigratorOptions {
        gogs_admin: "root".to_string(),
        gitlab_username: "gitlab-user".to_string(),
        gitlab_password: "hunter2".to_string(),
        lc_names,
        mirror: false,
    };
    Migrator::new(gogs, opts)
}

#[tokio::test]
async fn archived_projects_produce_no_calls() {
    let server = MockServer::start().await;
    let projects = vec![project("Api", "foo", "public", true)];
    let filter = ProjectFilter::default();

    migrator(&server, false)
        .run(&projects, &filter)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn existing_repo_is_not_migrated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repos/Team/foo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "name": "foo",
            "full_name": "Team/foo",
            "private": true,
            "mirror": false,
            "description": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let projects = vec![project("Team", "foo", "private", false)];
    let filter = ProjectFilter::default();

    migrator(&server, false)
        .run(&projects, &filter)
        .await
        .unwrap();

    // the existence check must be the only request
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn reserved_name_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repos/theapi/theapi"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "repository not found"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/theapi"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "organization not found"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/admin/users/root/orgs"))
        .and(body_partial_json(json!({
            "username": "theapi",
            "full_name": "Api"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "username": "theapi",
            "full_name": "Api",
            "description": "description of Api"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repos/migrate"))
        .and(body_partial_json(json!({
            "clone_addr": "https://gitlab.example.com/Api/API.git",
            "auth_username": "gitlab-user",
            "auth_password": "hunter2",
            "uid": 7,
            "repo_name": "theapi",
            "private": false,
            "mirror": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 8,
            "name": "theapi",
            "full_name": "theapi/theapi",
            "private": false,
            "mirror": false,
            "description": "description of API"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // "API" and "Api" are the reserved name, even with lowercasing disabled
    let api = project("Api", "API", "public", false);
    let archived = project("Api", "foo", "public", true);
    let projects = vec![api, archived];
    let filter = ProjectFilter::default();

    migrator(&server, false)
        .run(&projects, &filter)
        .await
        .unwrap();
}

#[tokio::test]
async fn namespace_filter_skips_other_namespaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repos/Team/foo"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/Team"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "username": "Team",
            "full_name": "Team",
            "description": ""
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repos/migrate"))
        .and(body_partial_json(json!({ "repo_name": "foo", "uid": 3 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "name": "foo",
            "private": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let projects = vec![
        project("Team", "foo", "public", false),
        project("Other", "bar", "public", false),
    ];
    let filter = ProjectFilter::new(Some("team".to_string()), None);

    migrator(&server, false)
        .run(&projects, &filter)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| !r.url.path().contains("Other")));
}

#[tokio::test]
async fn organization_lookup_is_memoized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repos/Team/one"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repos/Team/two"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/Team"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/admin/users/root/orgs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "username": "Team",
            "full_name": "Team",
            "description": ""
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repos/migrate"))
        .and(body_partial_json(json!({ "uid": 5 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 10,
            "name": "one",
            "private": true
        })))
        .expect(2)
        .mount(&server)
        .await;

    let projects = vec![
        project("Team", "one", "private", false),
        project("Team", "two", "private", false),
    ];
    let filter = ProjectFilter::default();

    migrator(&server, false)
        .run(&projects, &filter)
        .await
        .unwrap();
}

#[tokio::test]
async fn migration_failure_aborts_the_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repos/Team/one"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/Team"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "username": "Team",
            "full_name": "Team",
            "description": ""
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repos/migrate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let projects = vec![
        project("Team", "one", "private", false),
        project("Team", "two", "private", false),
    ];
    let filter = ProjectFilter::default();

    let err = migrator(&server, false)
        .run(&projects, &filter)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to migrate 'Team/one'"));

    // the second project is never looked up
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| !r.url.path().contains("two")));
}
