//! Lazy, memoized binding of the PDF library.
use crate::result::LoaderErr;
use crate::use_cases::engine::{EngineHandle, LibSource};

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::path::PathBuf;
use tokio::task;
use tracing::{debug, instrument, warn};

type PendingLoad = Shared<BoxFuture<'static, Result<EngineHandle, LoaderErr>>>;

enum LoadState {
    Unloaded,
    Loading(PendingLoad),
    Loaded(EngineHandle),
}

/// Where the library is looked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

/// Binds the PDF library once and hands the same handle to every caller.
///
/// Callers arriving while the library is being bound wait for that same acquisition, so there is
/// never more than one binding in flight and all of them observe the same outcome. A failed
/// acquisition isn't remembered: the next call starts over.
pub struct LibraryLoader {
    source: LibSource,
    locations: Locations,
    state: Mutex<LoadState>,
}

impl LibraryLoader {
    pub fn new(source: LibSource, locations: Locations) -> Self {
        Self {
            source,
            locations,
            state: Mutex::new(LoadState::Unloaded),
        }
    }

    #[instrument(skip(self))]
    pub async fn ensure_loaded(&self) -> Result<EngineHandle, LoaderErr> {
        let pending = {
            let mut state = self.state.lock();
            match &*state {
                LoadState::Loaded(engine) => return Ok(engine.clone()),
                LoadState::Loading(pending) => {
                    debug!("library binding in progress, waiting");
                    pending.clone()
                }
                LoadState::Unloaded => {
                    debug!("binding library");
                    let pending = acquire(self.source.clone(), self.locations.clone())
                        .boxed()
                        .shared();
                    *state = LoadState::Loading(pending.clone());
                    pending
                }
            }
        };

        let outcome = pending.clone().await;

        let mut state = self.state.lock();
        if matches!(&*state, LoadState::Loading(current) if current.ptr_eq(&pending)) {
            *state = match &outcome {
                Ok(engine) => LoadState::Loaded(engine.clone()),
                Err(_) => LoadState::Unloaded,
            };
        }
        outcome
    }
}

async fn acquire(source: LibSource, locations: Locations) -> Result<EngineHandle, LoaderErr> {
    let Locations { primary, fallback } = locations;
    let primary_err = match bind(source.clone(), primary).await {
        Ok(engine) => return Ok(engine),
        Err(e) => e,
    };
    warn!("primary library location unusable: '{}', trying fallback", primary_err);
    bind(source, fallback)
        .await
        .map_err(|fallback_err| LoaderErr::Unavailable {
            primary: primary_err.to_string(),
            fallback: fallback_err.to_string(),
        })
}

async fn bind(source: LibSource, location: PathBuf) -> Result<EngineHandle, LoaderErr> {
    debug!("binding library at '{}'", location.display());
    task::spawn_blocking(move || source.bind(&location))
        .await
        .map_err(|e| LoaderErr::Worker(e.to_string()))?
}
