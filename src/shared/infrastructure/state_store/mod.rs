// Reducer driven state container shared by the user events store and the recorder.
//
// Purpose
// - Hold one state value and change it only by dispatching actions through a pure reducer.
//
// Responsibilities
// - Serialize dispatches behind a write lock so reducers run one at a time.
// - Hand out snapshots and selections under a read lock.

use std::fmt::Debug;
use tokio::sync::RwLock;

pub struct StateStore<S, A> {
    state: RwLock<S>,
    reducer: fn(S, A) -> S,
}

impl<S, A> StateStore<S, A>
where
    S: Clone + Default + Send + Sync,
    A: Debug,
{
    pub fn new(reducer: fn(S, A) -> S) -> Self {
        Self::with_state(S::default(), reducer)
    }

    pub fn with_state(state: S, reducer: fn(S, A) -> S) -> Self {
        Self {
            state: RwLock::new(state),
            reducer,
        }
    }

    pub async fn dispatch(&self, action: A) {
        tracing::debug!(?action, "dispatch");
        let mut guard = self.state.write().await;
        let current = std::mem::take(&mut *guard);
        *guard = (self.reducer)(current, action);
    }

    pub async fn snapshot(&self) -> S {
        self.state.read().await.clone()
    }

    pub async fn select<R>(&self, selector: impl FnOnce(&S) -> R) -> R {
        selector(&*self.state.read().await)
    }
}
