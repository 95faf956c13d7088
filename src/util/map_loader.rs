//! Lazy, memoized loader for the external mapping SDK.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Maps JS SDK is loaded by appending a `<script>` tag whose URL names a
//! global callback; the SDK calls it once `window.google` is ready. Every page
//! that needs the map calls [`ScriptLoader::ensure_loaded`] and awaits the same
//! shared [`LoadSignal`].
//!
//! DESIGN
//! ======
//! `unstarted -> pending -> ready | failed`, or `unstarted -> ready` when the
//! global already exists at the first call. The first call performs all side
//! effects; later calls only clone the signal. Settlement goes through a single
//! `take()` of the oneshot sender, so whichever of callback, script error, or
//! timeout fires first wins and the rest are no-ops. Nothing resets the loader;
//! a failed load needs a page reload to retry.
//!
//! Document and `window` access sit behind [`ScriptHost`] so the state machine
//! runs unchanged against an in-memory host in tests.

#[cfg(test)]
#[path = "map_loader_test.rs"]
mod map_loader_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use leptos::logging::{log, warn};

use crate::config::MapsConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("script failed to load: {0}")]
    Script(String),
    #[error("script could not be injected: {0}")]
    Inject(String),
    #[error("script did not load within {0:?}")]
    TimedOut(Duration),
    #[error("script load was abandoned before settling")]
    Abandoned,
}

pub type LoadResult<G> = Result<G, LoadError>;

/// Single-shot completion signal shared by every caller.
pub type LoadSignal<G> = Shared<LocalBoxFuture<'static, LoadResult<G>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Unstarted,
    Pending,
    Ready,
    Failed,
}

/// Global and document side effects needed to load a script-based SDK.
pub trait ScriptHost {
    /// Handle to the SDK's global object.
    type Global: Clone + 'static;

    /// The SDK global, if something already installed it.
    fn existing_global(&self) -> Option<Self::Global>;

    /// Install a global function named `name`. When the SDK invokes it,
    /// `on_ready` receives the SDK global.
    fn install_callback(&self, name: &str, on_ready: Box<dyn FnOnce(Self::Global)>);

    /// Append one async script element loading `src`. `on_error` runs if the
    /// browser reports a load failure.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Inject`] if the element cannot be created or
    /// attached.
    fn inject_script(&self, src: &str, on_error: Box<dyn FnOnce(String)>) -> Result<(), LoadError>;

    /// Run `on_timeout` once after `after` elapses.
    fn schedule_timeout(&self, after: Duration, on_timeout: Box<dyn FnOnce()>);
}

/// Settles the shared signal at most once and tracks the resulting phase.
struct Settle<G> {
    tx: Rc<RefCell<Option<oneshot::Sender<LoadResult<G>>>>>,
    phase: Rc<Cell<LoadPhase>>,
}

impl<G> Clone for Settle<G> {
    fn clone(&self) -> Self {
        Self { tx: Rc::clone(&self.tx), phase: Rc::clone(&self.phase) }
    }
}

impl<G> Settle<G> {
    fn finish(&self, result: LoadResult<G>) -> bool {
        let Some(tx) = self.tx.borrow_mut().take() else {
            return false;
        };
        match &result {
            Ok(_) => {
                self.phase.set(LoadPhase::Ready);
                log!("map sdk loaded");
            }
            Err(err) => {
                self.phase.set(LoadPhase::Failed);
                warn!("map sdk failed: {err}");
            }
        }
        let _ = tx.send(result);
        true
    }
}

/// Process-lifetime loader for one script-based SDK.
pub struct ScriptLoader<H: ScriptHost> {
    host: H,
    config: MapsConfig,
    phase: Rc<Cell<LoadPhase>>,
    signal: RefCell<Option<LoadSignal<H::Global>>>,
}

impl<H: ScriptHost> ScriptLoader<H> {
    pub fn new(host: H, config: MapsConfig) -> Self {
        Self {
            host,
            config,
            phase: Rc::new(Cell::new(LoadPhase::Unstarted)),
            signal: RefCell::new(None),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase.get()
    }

    /// Start loading on first call and return the shared completion signal.
    ///
    /// Every call, before or after settlement, returns a clone of the same
    /// signal. Only the first call touches the host.
    pub fn ensure_loaded(&self) -> LoadSignal<H::Global> {
        if let Some(signal) = self.signal.borrow().as_ref() {
            return signal.clone();
        }

        if let Some(global) = self.host.existing_global() {
            self.phase.set(LoadPhase::Ready);
            let ready: LoadResult<H::Global> = Ok(global);
            let signal = futures::future::ready(ready).boxed_local().shared();
            *self.signal.borrow_mut() = Some(signal.clone());
            log!("map sdk already present");
            return signal;
        }

        let (tx, rx) = oneshot::channel::<LoadResult<H::Global>>();
        let signal = rx
            .map(|received| received.unwrap_or(Err(LoadError::Abandoned)))
            .boxed_local()
            .shared();
        // Stored before any host call so a re-entrant caller gets this signal
        // instead of starting a second load.
        *self.signal.borrow_mut() = Some(signal.clone());
        self.phase.set(LoadPhase::Pending);

        let settle = Settle { tx: Rc::new(RefCell::new(Some(tx))), phase: Rc::clone(&self.phase) };

        let on_ready = settle.clone();
        self.host.install_callback(
            &self.config.callback_name,
            Box::new(move |global| {
                on_ready.finish(Ok(global));
            }),
        );

        let src = self.config.script_url();
        let on_error = settle.clone();
        let injected = self.host.inject_script(
            &src,
            Box::new(move |reason| {
                on_error.finish(Err(LoadError::Script(reason)));
            }),
        );
        if let Err(err) = injected {
            settle.finish(Err(err));
            return signal;
        }

        if let Some(after) = self.config.load_timeout {
            let on_timeout = settle;
            self.host.schedule_timeout(
                after,
                Box::new(move || {
                    on_timeout.finish(Err(LoadError::TimedOut(after)));
                }),
            );
        }

        signal
    }
}
