//! Browser binding: web-sys implementations of the page and storage seams,
//! plus the WebAssembly entry point.
//!
//! Only meaningful inside a browser; the controller logic it drives is
//! tested natively through `controller`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Storage, Window};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::display::ToggleDisplay;
use crate::error::StorageError;
use crate::page::PageSurface;
use crate::storage::PreferenceStore;

/// Controller wired to the live document and `localStorage`.
pub type BrowserController = ThemeController<BrowserPage, LocalStore>;

// =============================================================
// Page
// =============================================================

/// The host document, resolved by id on every call so elements added or
/// removed after load are picked up.
pub struct BrowserPage {
    document: Document,
    config: ThemeConfig,
}

impl BrowserPage {
    #[must_use]
    pub fn new(document: Document, config: ThemeConfig) -> Self {
        Self { document, config }
    }
}

impl PageSurface for BrowserPage {
    fn set_stylesheet_href(&self, url: &str) -> bool {
        let Some(link) = self.document.get_element_by_id(self.config.stylesheet_link_id) else {
            return false;
        };
        match link.set_attribute("href", url) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("failed to set stylesheet href: {err:?}");
                false
            }
        }
    }

    fn root_theme(&self) -> Option<String> {
        self.document
            .document_element()?
            .get_attribute(self.config.theme_attribute)
    }

    fn set_root_theme(&self, value: &str) -> bool {
        let Some(root) = self.document.document_element() else {
            return false;
        };
        match root.set_attribute(self.config.theme_attribute, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("failed to tag root element: {err:?}");
                false
            }
        }
    }

    fn set_toggle_content(&self, display: &ToggleDisplay) -> bool {
        let Some(toggle) = self.document.get_element_by_id(self.config.toggle_id) else {
            return false;
        };
        toggle.set_inner_html(&display.to_html());
        true
    }
}

// =============================================================
// Storage
// =============================================================

/// `localStorage` entry under a fixed key. `storage` is `None` when the
/// browser refused access (private mode, sandboxed iframe, policy).
pub struct LocalStore {
    storage: Option<Storage>,
    key: &'static str,
}

impl LocalStore {
    #[must_use]
    pub fn from_window(window: &Window, key: &'static str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage access denied: {err:?}");
                None
            }
        };
        Self { storage, key }
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(self.key)
            .map_err(|err| StorageError::Read(format!("{err:?}")))
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(self.key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

// =============================================================
// Lifecycle
// =============================================================

/// Initialize now if the document has been parsed, otherwise once on
/// `DOMContentLoaded`.
///
/// # Errors
///
/// Returns the browser error if there is no window/document or a listener
/// cannot be registered.
pub fn install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("window has no document"))?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = mount(&window, target) {
                log::error!("theme toggle failed to mount: {err:?}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    mount(&window, document)
}

/// Apply the stored theme and hand the controller to the toggle's click
/// listener, which owns it for the rest of the page lifetime.
fn mount(window: &Window, document: Document) -> Result<(), JsValue> {
    let config = ThemeConfig::default();
    let toggle = document.get_element_by_id(config.toggle_id);
    let store = LocalStore::from_window(window, config.storage_key);

    let mut controller: BrowserController =
        ThemeController::new(BrowserPage::new(document, config), store);
    let report = controller.initialize();
    log::info!("theme initialized: {} (persisted: {})", report.applied, report.persisted);

    let Some(toggle) = toggle else {
        log::debug!("no #{} element; theme is fixed for this page", config.toggle_id);
        return Ok(());
    };

    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        let report = controller.toggle();
        log::info!("theme switched to {}", report.applied);
    }) as Box<dyn FnMut(Event)>);
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// WebAssembly entry point.
///
/// # Errors
///
/// Propagates [`install`] failures to the JS loader.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("keeping existing logger: {err}");
    }
    install()
}
