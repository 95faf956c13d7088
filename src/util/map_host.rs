//! Browser implementation of [`ScriptHost`] and the process-wide maps loader.
//!
//! Requires a browser environment; compiled only with the `csr` feature.

use std::cell::OnceCell;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::map_loader::{LoadError, LoadPhase, LoadSignal, ScriptHost, ScriptLoader};
use crate::config::ClientConfig;

thread_local! {
    static MAPS_LOADER: OnceCell<ScriptLoader<BrowserScriptHost>> = const { OnceCell::new() };
}

/// Reads and writes `window` properties and the document `<head>`.
pub struct BrowserScriptHost {
    global_name: String,
}

impl BrowserScriptHost {
    pub fn new(global_name: impl Into<String>) -> Self {
        Self { global_name: global_name.into() }
    }
}

fn window_property(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn js_error(context: &str, err: &JsValue) -> LoadError {
    LoadError::Inject(format!("{context}: {err:?}"))
}

impl ScriptHost for BrowserScriptHost {
    type Global = JsValue;

    fn existing_global(&self) -> Option<JsValue> {
        window_property(&self.global_name)
    }

    fn install_callback(&self, name: &str, on_ready: Box<dyn FnOnce(JsValue)>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let global_name = self.global_name.clone();
        let callback = Closure::once(move || {
            on_ready(window_property(&global_name).unwrap_or(JsValue::UNDEFINED));
        });
        let _ = Reflect::set(&window, &JsValue::from_str(name), callback.as_ref());
        // The SDK holds the only reference from here on.
        callback.forget();
    }

    fn inject_script(&self, src: &str, on_error: Box<dyn FnOnce(String)>) -> Result<(), LoadError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| LoadError::Inject("no document".to_owned()))?;
        let head = document
            .head()
            .ok_or_else(|| LoadError::Inject("no <head> element".to_owned()))?;
        let script = document
            .create_element("script")
            .map_err(|e| js_error("create script", &e))?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| LoadError::Inject("element is not a script".to_owned()))?;

        script.set_async(true);
        script.set_defer(true);
        script.set_src(src);

        let failed_src = src.to_owned();
        let on_script_error = Closure::once(move |_ev: web_sys::Event| {
            on_error(format!("could not load {failed_src}"));
        });
        script.set_onerror(Some(on_script_error.as_ref().unchecked_ref()));
        on_script_error.forget();

        head.append_child(&script).map_err(|e| js_error("append script", &e))?;
        Ok(())
    }

    fn schedule_timeout(&self, after: Duration, on_timeout: Box<dyn FnOnce()>) {
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, on_timeout).forget();
    }
}

fn with_loader<R>(f: impl FnOnce(&ScriptLoader<BrowserScriptHost>) -> R) -> R {
    MAPS_LOADER.with(|cell| {
        let loader = cell.get_or_init(|| {
            let maps = ClientConfig::from_build_env()
                .unwrap_or_else(|err| {
                    leptos::logging::warn!("invalid build config, using defaults: {err}");
                    ClientConfig::default()
                })
                .maps;
            ScriptLoader::new(BrowserScriptHost::new(maps.global_name.clone()), maps)
        });
        f(loader)
    })
}

/// Load the maps SDK once per page lifetime and return the shared signal.
pub fn ensure_maps_loaded() -> LoadSignal<JsValue> {
    with_loader(ScriptLoader::ensure_loaded)
}

pub fn maps_phase() -> LoadPhase {
    with_loader(ScriptLoader::phase)
}
