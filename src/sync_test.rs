use std::collections::VecDeque;
use std::sync::Mutex;

use uuid::Uuid;

use super::*;
use crate::hunt::EntryStatus;
use crate::model::{Scene, ScenePatch, Widget, WidgetPatch};

/// Scripted store: each fetch pops the next queued response. Write
/// endpoints are accepted and ignored.
#[derive(Default)]
struct ScriptedStore {
    projects: Mutex<VecDeque<Result<Project, Error>>>,
    hunts: Mutex<VecDeque<Result<HuntSummary, Error>>>,
    current_games: Mutex<VecDeque<Result<Option<CurrentGame>, Error>>>,
    public_fetches: Mutex<Vec<String>>,
}

impl ScriptedStore {
    fn queue_project(&self, result: Result<Project, Error>) {
        self.projects.lock().unwrap().push_back(result);
    }

    fn queue_hunt(&self, result: Result<HuntSummary, Error>) {
        self.hunts.lock().unwrap().push_back(result);
    }

    fn queue_current_game(&self, result: Result<Option<CurrentGame>, Error>) {
        self.current_games.lock().unwrap().push_back(result);
    }
}

impl RecordStore for ScriptedStore {
    async fn fetch_project(&self, _id: Uuid) -> Result<Project, Error> {
        self.projects.lock().unwrap().pop_front().expect("unscripted project fetch")
    }

    async fn fetch_public_project(&self, id_or_slug: &str) -> Result<Project, Error> {
        self.public_fetches.lock().unwrap().push(id_or_slug.to_owned());
        self.projects.lock().unwrap().pop_front().expect("unscripted project fetch")
    }

    async fn create_scene(&self, _project_id: Uuid, _scene: &Scene) -> Result<(), Error> {
        Ok(())
    }

    async fn update_scene(&self, _scene_id: Uuid, _patch: &ScenePatch) -> Result<(), Error> {
        Ok(())
    }

    async fn delete_scene(&self, _scene_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn create_widget(&self, _scene_id: Uuid, _widget: &Widget) -> Result<(), Error> {
        Ok(())
    }

    async fn update_widget(&self, _widget_id: Uuid, _patch: &WidgetPatch) -> Result<(), Error> {
        Ok(())
    }

    async fn delete_widget(&self, _widget_id: Uuid) -> Result<(), Error> {
        Ok(())
    }

    async fn fetch_hunt(&self, _hunt_id: Uuid) -> Result<HuntSummary, Error> {
        self.hunts.lock().unwrap().pop_front().expect("unscripted hunt fetch")
    }

    async fn fetch_current_game(&self, _hunt_id: Uuid) -> Result<Option<CurrentGame>, Error> {
        self.current_games
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }
}

fn project(active_hunt_id: Option<Uuid>) -> Project {
    Project {
        id: Uuid::new_v4(),
        name: "Stream Overlay".to_owned(),
        slug: "stream-overlay".to_owned(),
        active_scene_id: None,
        active_hunt_id,
        scenes: Vec::new(),
    }
}

fn hunt(id: Uuid) -> HuntSummary {
    HuntSummary {
        id,
        title: "Friday Hunt".to_owned(),
        status: "opening".to_owned(),
        total_cost: 500.0,
        total_won: 120.0,
        entries: vec![crate::hunt::HuntEntry {
            id: Uuid::new_v4(),
            game_name: "Sugar Rush".to_owned(),
            game_image: None,
            game_provider: None,
            bet_size: 2.0,
            cost: 200.0,
            result: None,
            multiplier: None,
            status: EntryStatus::Playing,
        }],
    }
}

fn transport_error() -> Error {
    Error::Server { status: 502, message: "bad gateway".to_owned() }
}

// =============================================================
// poll_once
// =============================================================

#[tokio::test]
async fn poll_assembles_project_hunt_and_current_game() {
    let hunt_id = Uuid::new_v4();
    let store = ScriptedStore::default();
    store.queue_project(Ok(project(Some(hunt_id))));
    store.queue_hunt(Ok(hunt(hunt_id)));
    store.queue_current_game(Ok(Some(CurrentGame {
        game_name: "Sugar Rush".to_owned(),
        game_image: None,
        game_provider: None,
        bet_size: 2.0,
        info: None,
        personal_record: None,
    })));

    let snapshot = poll_once(&store, Uuid::new_v4()).await.unwrap();
    assert_eq!(snapshot.hunt.as_ref().unwrap().id, hunt_id);
    assert_eq!(snapshot.current_game.unwrap().game_name, "Sugar Rush");
}

#[tokio::test]
async fn unlinked_project_skips_hunt_fetches() {
    let store = ScriptedStore::default();
    store.queue_project(Ok(project(None)));

    let snapshot = poll_once(&store, Uuid::new_v4()).await.unwrap();
    assert!(snapshot.hunt.is_none());
    assert!(snapshot.current_game.is_none());
    // No hunt fetch was consumed.
    assert!(store.hunts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn deleted_hunt_clears_the_link_instead_of_failing() {
    let hunt_id = Uuid::new_v4();
    let store = ScriptedStore::default();
    store.queue_project(Ok(project(Some(hunt_id))));
    store.queue_hunt(Err(Error::NotFound("hunt".to_owned())));

    let snapshot = poll_once(&store, Uuid::new_v4()).await.unwrap();
    assert!(snapshot.hunt.is_none());
    assert!(snapshot.current_game.is_none());
}

#[tokio::test]
async fn failed_project_fetch_fails_the_cycle() {
    let store = ScriptedStore::default();
    store.queue_project(Err(transport_error()));
    assert!(poll_once(&store, Uuid::new_v4()).await.is_err());
}

#[tokio::test]
async fn missing_current_game_is_not_an_error() {
    let hunt_id = Uuid::new_v4();
    let store = ScriptedStore::default();
    store.queue_project(Ok(project(Some(hunt_id))));
    store.queue_hunt(Ok(hunt(hunt_id)));
    store.queue_current_game(Err(Error::NotFound("nothing playing".to_owned())));

    let snapshot = poll_once(&store, Uuid::new_v4()).await.unwrap();
    assert!(snapshot.hunt.is_some());
    assert!(snapshot.current_game.is_none());
}

#[tokio::test]
async fn public_poll_resolves_by_slug_through_the_public_endpoint() {
    let hunt_id = Uuid::new_v4();
    let store = ScriptedStore::default();
    store.queue_project(Ok(project(Some(hunt_id))));
    store.queue_hunt(Ok(hunt(hunt_id)));

    let snapshot = poll_once_public(&store, "stream-overlay").await.unwrap();
    assert_eq!(snapshot.project.slug, "stream-overlay");
    assert_eq!(snapshot.hunt.unwrap().id, hunt_id);
    assert_eq!(*store.public_fetches.lock().unwrap(), vec!["stream-overlay".to_owned()]);
}

// =============================================================
// spawn_poll_task
// =============================================================

#[tokio::test(start_paused = true)]
async fn poll_task_publishes_and_survives_failed_ticks() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let hunt_id = Uuid::new_v4();
    let store = ScriptedStore::default();
    // Tick 1: clean fetch. Tick 2: outage. Tick 3: recovered.
    store.queue_project(Ok(project(Some(hunt_id))));
    store.queue_hunt(Ok(hunt(hunt_id)));
    store.queue_project(Err(transport_error()));
    store.queue_project(Ok(project(None)));

    let initial = LiveSnapshot { project: project(None), hunt: None, current_game: None };
    let mut rx = spawn_poll_task(store, Uuid::new_v4(), initial);

    // First tick fires immediately.
    rx.changed().await.unwrap();
    assert!(rx.borrow().hunt.is_some());

    // The failed tick publishes nothing; the previous snapshot stands.
    tokio::time::advance(POLL_INTERVAL).await;
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;
    assert!(rx.borrow().hunt.is_some());

    // The next successful tick replaces it.
    tokio::time::advance(POLL_INTERVAL).await;
    rx.changed().await.unwrap();
    assert!(rx.borrow().hunt.is_none());
}
