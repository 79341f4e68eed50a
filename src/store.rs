//! Record store access: the HTTP client for the overlay and hunt
//! endpoints, behind a trait so the sync loop can run against a fake in
//! tests.
//!
//! The store is the source of truth; this layer only moves JSON. Response
//! status maps onto [`Error`]: 404 is `NotFound`, other client errors are
//! `Validation` with the server's message, everything else (network,
//! decode, 5xx) is `Transport`.

use uuid::Uuid;

use crate::error::Error;
use crate::hunt::{CurrentGame, HuntSummary};
use crate::model::{Project, Scene, ScenePatch, Widget, WidgetPatch};

/// Overlay and hunt persistence operations.
///
/// Futures are `Send` so callers can drive them from spawned tasks.
pub trait RecordStore {
    /// Fetch a project with scenes and widgets, for editing.
    fn fetch_project(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Project, Error>> + Send;

    /// Fetch a project by id or slug through the public display endpoint.
    fn fetch_public_project(
        &self,
        id_or_slug: &str,
    ) -> impl Future<Output = Result<Project, Error>> + Send;

    fn create_scene(
        &self,
        project_id: Uuid,
        scene: &Scene,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn update_scene(
        &self,
        scene_id: Uuid,
        patch: &ScenePatch,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn delete_scene(&self, scene_id: Uuid) -> impl Future<Output = Result<(), Error>> + Send;

    fn create_widget(
        &self,
        scene_id: Uuid,
        widget: &Widget,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn update_widget(
        &self,
        widget_id: Uuid,
        patch: &WidgetPatch,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn delete_widget(&self, widget_id: Uuid) -> impl Future<Output = Result<(), Error>> + Send;

    /// Fetch the linked hunt's public summary.
    fn fetch_hunt(&self, hunt_id: Uuid)
    -> impl Future<Output = Result<HuntSummary, Error>> + Send;

    /// Fetch the enriched currently-playing detail for a hunt, `None` when
    /// nothing is being played.
    fn fetch_current_game(
        &self,
        hunt_id: Uuid,
    ) -> impl Future<Output = Result<Option<CurrentGame>, Error>> + Send;
}

// =============================================================
// HTTP implementation
// =============================================================

/// [`RecordStore`] over the record store's REST API.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// `base_url` is the API origin without a trailing slash, e.g.
    /// `https://records.example.com`.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a response to `Ok` on success or the status-derived error.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND {
            Err(Error::NotFound(message))
        } else if status.is_client_error() {
            Err(Error::Validation(message))
        } else {
            Err(Error::Server { status: status.as_u16(), message })
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = Self::check(response).await?;
        response.json().await.map_err(Error::from)
    }

    async fn send_json<B: serde::Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn send_delete(&self, path: &str) -> Result<(), Error> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

impl RecordStore for HttpStore {
    async fn fetch_project(&self, id: Uuid) -> Result<Project, Error> {
        self.get_json(&format!("/api/overlays/{id}")).await
    }

    async fn fetch_public_project(&self, id_or_slug: &str) -> Result<Project, Error> {
        self.get_json(&format!("/api/overlays/public/{id_or_slug}")).await
    }

    async fn create_scene(&self, project_id: Uuid, scene: &Scene) -> Result<(), Error> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/overlays/{project_id}/scenes"),
            scene,
        )
        .await
    }

    async fn update_scene(&self, scene_id: Uuid, patch: &ScenePatch) -> Result<(), Error> {
        self.send_json(reqwest::Method::PATCH, &format!("/api/overlays/scenes/{scene_id}"), patch)
            .await
    }

    async fn delete_scene(&self, scene_id: Uuid) -> Result<(), Error> {
        self.send_delete(&format!("/api/overlays/scenes/{scene_id}")).await
    }

    async fn create_widget(&self, scene_id: Uuid, widget: &Widget) -> Result<(), Error> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/overlays/scenes/{scene_id}/widgets"),
            widget,
        )
        .await
    }

    async fn update_widget(&self, widget_id: Uuid, patch: &WidgetPatch) -> Result<(), Error> {
        self.send_json(
            reqwest::Method::PATCH,
            &format!("/api/overlays/widgets/{widget_id}"),
            patch,
        )
        .await
    }

    async fn delete_widget(&self, widget_id: Uuid) -> Result<(), Error> {
        self.send_delete(&format!("/api/overlays/widgets/{widget_id}")).await
    }

    async fn fetch_hunt(&self, hunt_id: Uuid) -> Result<HuntSummary, Error> {
        self.get_json(&format!("/api/hunts/{hunt_id}/public")).await
    }

    async fn fetch_current_game(&self, hunt_id: Uuid) -> Result<Option<CurrentGame>, Error> {
        self.get_json(&format!("/api/hunts/{hunt_id}/current-game")).await
    }
}
