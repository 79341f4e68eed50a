//! Polling sync loop: keeps a [`LiveSnapshot`] of the project, its linked
//! hunt, and the currently-playing detail refreshed from the record store.
//!
//! One fetch cycle every three seconds, stateless per tick: each tick
//! fetches the project, follows its `active_hunt_id` to the hunt and
//! current-game endpoints, and publishes the assembled snapshot on a watch
//! channel. A failed tick logs at debug, keeps the previous snapshot so
//! subscribers never see a partial frame, and the loop carries on; there
//! is no backoff and no retry inside a tick. A hunt link that answers 404
//! clears the hunt from the snapshot rather than erroring, covering the
//! dangling-pointer case where the hunt was deleted out from under the
//! overlay.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use tokio::sync::watch;
use uuid::Uuid;

use crate::consts::POLL_INTERVAL;
use crate::error::Error;
use crate::hunt::{CurrentGame, HuntSummary};
use crate::model::Project;
use crate::store::RecordStore;

/// The latest consistent view of everything the renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveSnapshot {
    pub project: Project,
    /// The linked hunt, when the project has one that still exists.
    pub hunt: Option<HuntSummary>,
    /// The enriched currently-playing detail, when something is playing.
    pub current_game: Option<CurrentGame>,
}

/// Run one full fetch cycle against the store.
///
/// # Errors
///
/// Any fetch failure aborts the cycle; the caller keeps its previous
/// snapshot. A `NotFound` on the hunt itself is not a failure: the hunt
/// link is stale and the snapshot simply carries no hunt.
pub async fn poll_once<S: RecordStore>(
    store: &S,
    project_id: Uuid,
) -> Result<LiveSnapshot, Error> {
    let project = store.fetch_project(project_id).await?;
    assemble(store, project).await
}

/// [`poll_once`] for unauthenticated display hosts, which know the project
/// only by its public id or slug.
///
/// # Errors
///
/// Same contract as [`poll_once`].
pub async fn poll_once_public<S: RecordStore>(
    store: &S,
    id_or_slug: &str,
) -> Result<LiveSnapshot, Error> {
    let project = store.fetch_public_project(id_or_slug).await?;
    assemble(store, project).await
}

/// Follow the project's hunt link and build the snapshot.
async fn assemble<S: RecordStore>(store: &S, project: Project) -> Result<LiveSnapshot, Error> {
    let mut hunt = None;
    let mut current_game = None;
    if let Some(hunt_id) = project.active_hunt_id {
        match store.fetch_hunt(hunt_id).await {
            Ok(h) => {
                // Current game is best-effort enrichment; its absence is
                // normal between bonuses.
                current_game = match store.fetch_current_game(hunt_id).await {
                    Ok(cg) => cg,
                    Err(Error::NotFound(_)) => None,
                    Err(err) => return Err(err),
                };
                hunt = Some(h);
            }
            Err(Error::NotFound(_)) => {
                tracing::debug!(%hunt_id, "linked hunt gone, clearing from snapshot");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(LiveSnapshot { project, hunt, current_game })
}

/// Spawn the poll loop. Publishes every successful cycle to the returned
/// watch channel; the loop ends when the last receiver is dropped.
///
/// The first cycle runs immediately so subscribers do not wait a full
/// interval for their initial frame.
pub fn spawn_poll_task<S>(
    store: S,
    project_id: Uuid,
    initial: LiveSnapshot,
) -> watch::Receiver<LiveSnapshot>
where
    S: RecordStore + Send + Sync + 'static,
{
    let (tx, rx) = watch::channel(initial);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        // A slow store must not cause a burst of catch-up fetches.
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match poll_once(&store, project_id).await {
                Ok(snapshot) => {
                    if tx.send(snapshot).is_err() {
                        tracing::debug!(%project_id, "all subscribers gone, stopping poll");
                        break;
                    }
                }
                Err(err) => {
                    tracing::debug!(%project_id, %err, "poll cycle failed, keeping snapshot");
                    if tx.is_closed() {
                        break;
                    }
                }
            }
        }
    });
    rx
}
