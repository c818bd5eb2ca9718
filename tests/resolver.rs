use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use todoist_client::config::ApiConfig;
use todoist_client::models::NewTask;
use todoist_client::{Client, ResourceKind, TodoistError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    let config = ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    Client::with_config("test-token", &config).unwrap()
}

fn project(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "color": "grey",
        "parent_id": null,
        "order": 1,
        "comment_count": 0,
        "is_shared": false,
        "is_favorite": false,
        "is_inbox_project": false,
        "is_team_inbox": false,
        "view_style": "list",
        "url": ""
    })
}

fn label(id: &str, name: &str) -> serde_json::Value {
    json!({"id": id, "name": name, "color": "grey", "order": 1, "is_favorite": false})
}

async fn mount_projects(server: &MockServer, expected_fetches: u64) {
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([project("1", "Work"), project("2", "Personal")])),
        )
        .expect(expected_fetches)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_cache_hit_after_full_fetch_makes_no_request() {
    let server = MockServer::start().await;
    mount_projects(&server, 1).await;

    let client = client_for(&server);
    client.get_projects().await.unwrap();

    let work = client.find_project("Work").await.unwrap();
    assert_eq!(work.id, "1");
    let personal = client.find_project("Personal").await.unwrap();
    assert_eq!(personal.id, "2");
}

#[tokio::test]
async fn test_miss_on_empty_cache_fetches_once() {
    let server = MockServer::start().await;
    mount_projects(&server, 1).await;

    let client = client_for(&server);
    let work = client.find_project("Work").await.unwrap();
    assert_eq!(work.id, "1");

    // now cached
    client.find_project("Work").await.unwrap();
}

#[tokio::test]
async fn test_unknown_layout_does_not_break_lookup() {
    let server = MockServer::start().await;

    let mut trips = project("2", "Trips");
    trips["view_style"] = json!("calendar");
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project("1", "Work"), trips])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let work = client.find_project("Work").await.unwrap();
    assert_eq!(work.id, "1");
    let trips = client.find_project("Trips").await.unwrap();
    assert_eq!(trips.id, "2");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_lookups_share_one_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([project("1", "Work"), project("2", "Personal")]))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.find_project("Work").await })
        })
        .collect();

    for handle in handles {
        let work = handle.await.unwrap().unwrap();
        assert_eq!(work.id, "1");
    }
}

#[tokio::test]
async fn test_absent_name_is_not_found_without_second_fetch() {
    let server = MockServer::start().await;
    mount_projects(&server, 1).await;

    let client = client_for(&server);
    let err = client.find_project("Errands").await.unwrap_err();

    match err {
        TodoistError::NotFound { kind, name } => {
            assert_eq!(kind, ResourceKind::Project);
            assert_eq!(name, "Errands");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_failure_is_not_reported_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/labels"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.find_label("Buy").await.unwrap_err();

    assert!(!matches!(err, TodoistError::NotFound { .. }));
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let server = MockServer::start().await;
    mount_projects(&server, 2).await;

    let client = client_for(&server);
    client.find_project("Work").await.unwrap();
    client.invalidate_caches().await;
    client.find_project("Work").await.unwrap();
}

#[tokio::test]
async fn test_mutations_do_not_update_cache() {
    let server = MockServer::start().await;
    mount_projects(&server, 2).await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project("3", "Errands")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.refresh_projects().await.unwrap();
    client
        .create_project(&todoist_client::models::CreateProjectArgs::new("Errands"))
        .await
        .unwrap();

    // The remote list mock still lacks "Errands": one refetch, then NotFound.
    let err = client.find_project("Errands").await.unwrap_err();
    assert!(matches!(err, TodoistError::NotFound { .. }));
}

#[tokio::test]
async fn test_add_task_resolves_names() {
    let server = MockServer::start().await;
    mount_projects(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([label("10", "Buy"), label("11", "Home")])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({
            "content": "Milk",
            "project_id": "2",
            "labels": ["Buy", "Home"],
            "priority": 1,
            "due_string": "tomorrow"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "99",
            "project_id": "2",
            "section_id": null,
            "content": "Milk",
            "description": "",
            "is_completed": false,
            "labels": ["Buy", "Home"],
            "parent_id": null,
            "order": 1,
            "priority": 1,
            "due": null,
            "duration": null,
            "url": "",
            "comment_count": 0,
            "created_at": "2025-01-01T00:00:00Z",
            "creator_id": "1",
            "assignee_id": null,
            "assigner_id": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = client
        .add_task(NewTask {
            content: "Milk".to_string(),
            project: Some("Personal".to_string()),
            labels: vec!["Buy".to_string(), "Home".to_string()],
            // out of range, sent as the default
            priority: Some(7),
            due_string: Some("tomorrow".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(task.id, "99");
}

#[tokio::test]
async fn test_add_task_unknown_label_creates_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([label("10", "Buy")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .add_task(NewTask {
            content: "Milk".to_string(),
            labels: vec!["Missing".to_string()],
            ..Default::default()
        })
        .await
        .unwrap_err();

    match err {
        TodoistError::NotFound { kind, .. } => assert_eq!(kind, ResourceKind::Label),
        other => panic!("unexpected error: {other:?}"),
    }
}
