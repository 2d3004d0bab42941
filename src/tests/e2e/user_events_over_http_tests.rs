use crate::modules::user_events::adapters::outbound::http_user_events_api::HttpUserEventsApi;
use crate::modules::user_events::adapters::outbound::in_memory_user_events_api::InMemoryUserEventsApi;
use crate::modules::user_events::core::actions::ActionKind;
use crate::modules::user_events::core::event::UserEventId;
use crate::modules::user_events::core::ports::{UserEventsApi, UserEventsApiError};
use crate::modules::user_events::use_cases::application_error::ApplicationError;
use crate::modules::user_events::use_cases::toggle_recorder::handler::RecorderTransition;
use crate::shell::http::router;
use crate::shell::state::{AppState, BackendState};
use crate::tests::fixtures::clock::FixedClock;
use crate::tests::fixtures::events::user_event::UserEventBuilder;
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

async fn spawn_backend(backend: Arc<InMemoryUserEventsApi>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(BackendState { api: backend });
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> Arc<HttpUserEventsApi> {
    Arc::new(HttpUserEventsApi::new(base_url, std::time::Duration::from_secs(5)).unwrap())
}

#[tokio::test]
async fn records_lists_renames_and_deletes_over_http() {
    let backend = Arc::new(InMemoryUserEventsApi::with_events(vec![
        UserEventBuilder::new().id(1).title("Planning").build(),
    ]));
    let base_url = spawn_backend(backend.clone()).await;
    let clock = Arc::new(FixedClock::default());
    let state = AppState::new(client(&base_url), clock.clone());

    let loaded = state.load_handler.handle().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Planning");

    // 23:15 to 00:45 the next day, so the event lands under both days.
    let started = state.toggle_handler.handle().await.unwrap();
    assert!(matches!(started, RecorderTransition::Started { .. }));
    clock.advance(Duration::minutes(90));
    let RecorderTransition::Stopped { event } = state.toggle_handler.handle().await.unwrap() else {
        panic!("expected the recorder to stop");
    };
    assert_eq!(event.id, UserEventId(2));
    assert_eq!(event.title, "no name");
    assert_eq!(
        event.date_start,
        Utc.with_ymd_and_hms(2024, 1, 5, 23, 15, 0).unwrap()
    );
    assert_eq!(
        event.date_end,
        Utc.with_ymd_and_hms(2024, 1, 6, 0, 45, 0).unwrap()
    );

    let groups = state.day_groups.handle().await;
    let shape: Vec<(String, Vec<u64>)> = groups
        .iter()
        .map(|g| (g.key(), g.events.iter().map(|e| e.id.0).collect()))
        .collect();
    assert_eq!(
        shape,
        vec![
            ("2024-01-05".to_string(), vec![1, 2]),
            ("2024-01-06".to_string(), vec![2]),
        ]
    );

    let renamed = state.rename(event.id, "Deploy").await.unwrap();
    assert_eq!(renamed.title, "Deploy");
    assert_eq!(renamed.date_end, event.date_end);

    state.delete_handler.handle(UserEventId(1)).await.unwrap();

    let stored = backend.list().await.unwrap();
    assert_eq!(stored, vec![renamed.clone()]);
    let local = state.store.snapshot().await;
    assert_eq!(local.events(), vec![renamed]);
    assert_eq!(local.error, None);
}

#[tokio::test]
async fn maps_backend_failures_to_the_generic_messages() {
    let backend = Arc::new(InMemoryUserEventsApi::new());
    let base_url = spawn_backend(backend.clone()).await;
    let state = AppState::new(client(&base_url), Arc::new(FixedClock::default()));

    let result = state.delete_handler.handle(UserEventId(9)).await;
    match result {
        Err(ApplicationError::Failed {
            kind: ActionKind::Delete,
            source: UserEventsApiError::NotFound(id),
        }) => assert_eq!(id, UserEventId(9)),
        other => panic!("unexpected result: {other:?}"),
    }

    backend.toggle_offline();
    let result = state.load_handler.handle().await;
    match result {
        Err(ApplicationError::Failed {
            kind: ActionKind::Load,
            source: UserEventsApiError::Status(500),
        }) => {}
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(
        state.store.snapshot().await.error.as_deref(),
        Some("Failed to load events.")
    );
}
