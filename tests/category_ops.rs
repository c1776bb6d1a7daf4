//! Integration tests for category operations against a mocked service.
//!
//! These exercise the full path: keyboard input opens the context menu,
//! confirmation fires the HTTP request, and the completion event updates
//! the cache and sidebar.

use pretty_assertions::assert_eq;
use roost::api::types::{FeedMembership, FeedMetadata, SubscriptionCategory, SubscriptionResponse};
use roost::api::{ApiClient, QueryKey};
use roost::app::{App, AppEvent, ConfirmAction, RenameDialogState};
use roost::sidebar::FeedListState;
use roost::theme::ThemeVariant;
use roost::ui::input::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn feed(id: &str, title: &str) -> FeedMembership {
    FeedMembership {
        feed_id: id.into(),
        unread: 0,
        is_private: false,
        feeds: FeedMetadata {
            title: title.into(),
            site_url: format!("https://{}.example.com", id),
            error_at: None,
        },
    }
}

fn tech_response() -> SubscriptionResponse {
    SubscriptionResponse {
        unread: 3,
        list: vec![SubscriptionCategory {
            name: "Tech".into(),
            unread: 3,
            list: vec![feed("f1", "A"), feed("f2", "B")],
        }],
    }
}

async fn app_against(server: &MockServer) -> App {
    let base = Url::parse(&format!("{}/", server.uri())).unwrap();
    let api = ApiClient::new(base).unwrap();
    let mut list = FeedListState::new(Some(0), false);
    list.set_data(tech_response());
    App::new(api, list, ThemeVariant::Dark)
}

#[tokio::test]
async fn confirming_delete_sends_exactly_one_request_with_retained_feeds() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/categories"))
        .and(body_json(serde_json::json!({
            "feedIdList": ["f1", "f2"],
            "deleteSubscriptions": false
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_against(&server).await;
    let (tx, mut rx) = mpsc::channel::<AppEvent>(8);

    // Menu on the Tech header, move to Delete, confirm
    handle_key(&mut app, key(KeyCode::Char('m')), &tx);
    handle_key(&mut app, key(KeyCode::Char('j')), &tx);
    handle_key(&mut app, key(KeyCode::Enter), &tx);
    assert!(matches!(
        app.pending_confirm,
        Some(ConfirmAction::DeleteCategory { .. })
    ));
    handle_key(&mut app, key(KeyCode::Char('y')), &tx);

    let event = rx.recv().await.unwrap();
    match event {
        AppEvent::CategoryDeleted { view, name, result } => {
            assert_eq!(view, 0);
            assert_eq!(name, "Tech");
            assert!(result.is_ok());
        }
        _ => panic!("expected CategoryDeleted"),
    }
}

#[tokio::test]
async fn successful_delete_invalidates_only_its_view_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tech_response()))
        .mount(&server)
        .await;

    let mut app = app_against(&server).await;
    let (tx, _rx) = mpsc::channel::<AppEvent>(8);
    app.cache.insert(QueryKey::subscriptions(0), tech_response());
    app.cache.insert(QueryKey::subscriptions(1), SubscriptionResponse::default());

    roost::ui::events::handle_app_event(
        &mut app,
        AppEvent::CategoryDeleted {
            view: 0,
            name: "Tech".into(),
            result: Ok(()),
        },
        &tx,
    );

    assert!(!app.cache.contains(&QueryKey::subscriptions(0)));
    assert!(app.cache.contains(&QueryKey::subscriptions(1)));
}

#[tokio::test]
async fn cancelling_the_confirmation_issues_zero_requests() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_against(&server).await;
    let (tx, mut rx) = mpsc::channel::<AppEvent>(8);

    handle_key(&mut app, key(KeyCode::Char('m')), &tx);
    handle_key(&mut app, key(KeyCode::Char('j')), &tx);
    handle_key(&mut app, key(KeyCode::Enter), &tx);
    handle_key(&mut app, key(KeyCode::Esc), &tx);

    assert!(app.pending_confirm.is_none());
    drop(tx);
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn rename_sends_patch_with_new_name() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/categories"))
        .and(body_json(serde_json::json!({
            "feedIdList": ["f1", "f2"],
            "category": "Dev"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_against(&server).await;
    let (tx, mut rx) = mpsc::channel::<AppEvent>(8);

    app.rename_dialog = Some(RenameDialogState::new(
        "Tech".into(),
        vec!["f1".into(), "f2".into()],
    ));
    // Replace the prefilled name with "Dev"
    for _ in 0..4 {
        handle_key(&mut app, key(KeyCode::Backspace), &tx);
    }
    for c in "Dev".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)), &tx);
    }
    handle_key(&mut app, key(KeyCode::Enter), &tx);
    assert!(app.rename_dialog.as_ref().unwrap().submitting);

    let event = rx.recv().await.unwrap();
    match event {
        AppEvent::CategoryRenamed {
            old_name,
            new_name,
            result,
            ..
        } => {
            assert_eq!(old_name, "Tech");
            assert_eq!(new_name, "Dev");
            assert!(result.is_ok());
        }
        _ => panic!("expected CategoryRenamed"),
    }
}

#[tokio::test]
async fn subscriptions_fetch_sends_view_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions"))
        .and(query_param("view", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tech_response()))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/", server.uri())).unwrap();
    let api = ApiClient::new(base).unwrap();
    let resp = api.subscriptions(1).await.unwrap();
    assert_eq!(resp.unread, 3);
    assert_eq!(resp.list[0].name, "Tech");
}

#[tokio::test]
async fn service_error_statuses_surface_as_errors() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/", server.uri())).unwrap();
    let api = ApiClient::new(base).unwrap();
    let err = api.delete_category(vec!["f1".into()]).await.unwrap_err();
    assert!(err.to_string().contains("503"));
}
