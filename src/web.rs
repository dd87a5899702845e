//! Browser binding: DOM lookups, listeners, and `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web-sys`. It resolves the page's
//! elements once at startup, forwards each DOM event to
//! [`PageCore::dispatch`], and draws through [`DomHost`]. Drawing failures
//! are logged and skipped; only missing elements stop the page from
//! mounting.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, Storage, Window};

use crate::config::{ElementIds, PageConfig};
use crate::consts::{FAQ_OPEN_CLASS, FEEDBACK_ERROR_CLASS, FEEDBACK_SUCCESS_CLASS, INVALID_CLASS};
use crate::error::PageError;
use crate::form::{FeedbackMode, Field, FormSurface};
use crate::page::{PageCore, PageEvent, PageHost};
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::Theme;

/// Id of the optional `<script type="application/json">` config block.
const CONFIG_SCRIPT_ID: &str = "page-config";

/// Wasm entry point.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
    mount().map_err(|err| {
        log::error!("page behaviors not mounted: {err}");
        JsValue::from_str(&err.to_string())
    })
}

/// Bind every page behavior to the current document.
pub fn mount() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoWindow)?;
    let config = load_config(&document)?;

    let mut host = DomHost::bind(&document, &config.ids)?;
    let targets = host.targets();
    let mut core = PageCore::new(&config, LocalStorage::from_window(&window), host.faq.len());
    core.initialize(&mut host);

    let page = Rc::new(RefCell::new(Page { core, host }));

    listen(&targets.mode_toggle, "click", &page, |_| Some(PageEvent::ThemeToggled))?;
    listen(&targets.increment, "click", &page, |_| Some(PageEvent::CounterIncremented))?;
    listen(&targets.decrement, "click", &page, |_| Some(PageEvent::CounterDecremented))?;
    for (index, header) in targets.faq_headers.iter().enumerate() {
        listen(header, "click", &page, move |_| Some(PageEvent::FaqToggled(index)))?;
    }
    for (field, input) in &targets.inputs {
        let field = *field;
        let event = if field == Field::Agreement { "change" } else { "input" };
        listen(input, event, &page, move |_| Some(PageEvent::FieldEdited(field)))?;
    }
    listen(&targets.form, "submit", &page, |ev| {
        ev.prevent_default();
        Some(PageEvent::FormSubmitted)
    })?;

    log::info!("page behaviors mounted");
    Ok(())
}

fn load_config(document: &Document) -> Result<PageConfig, PageError> {
    match document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    }
}

struct Page {
    core: PageCore<LocalStorage>,
    host: DomHost,
}

fn listen(
    target: &Element,
    event: &'static str,
    page: &Rc<RefCell<Page>>,
    to_page_event: impl Fn(&Event) -> Option<PageEvent> + 'static,
) -> Result<(), PageError> {
    let page = Rc::clone(page);
    let handler = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let Some(page_event) = to_page_event(&ev) else {
            return;
        };
        let Ok(mut page) = page.try_borrow_mut() else {
            log::warn!("{page_event:?} arrived while another handler was running");
            return;
        };
        let Page { core, host } = &mut *page;
        let outcome = core.dispatch(page_event, host);
        log::debug!("{page_event:?} -> {outcome:?}");
    });
    target
        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .map_err(|_| PageError::Listener { event, target: describe(target) })?;
    // Listeners live as long as the page.
    handler.forget();
    Ok(())
}

fn describe(element: &Element) -> String {
    let id = element.id();
    if id.is_empty() { element.tag_name().to_lowercase() } else { format!("#{id}") }
}

// =============================================================================
// DOM lookups
// =============================================================================

fn element(document: &Document, id: &str) -> Result<Element, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_owned()))
}

fn typed<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, PageError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType { id: id.to_owned(), expected })
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("class {class} not updated on {}: {err:?}", describe(element));
    }
}

struct FieldElements {
    input: HtmlInputElement,
    message: Element,
}

impl FieldElements {
    fn bind(document: &Document, ids: &ElementIds, field: Field) -> Result<Self, PageError> {
        Ok(Self {
            input: typed(document, ids.field(field), "input")?,
            message: element(document, &ids.field_error(field))?,
        })
    }
}

struct FormFields {
    name: FieldElements,
    email: FieldElements,
    password: FieldElements,
    agreement: FieldElements,
}

impl FormFields {
    fn get(&self, field: Field) -> &FieldElements {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Agreement => &self.agreement,
        }
    }
}

/// Elements that receive listeners.
struct Targets {
    mode_toggle: Element,
    increment: Element,
    decrement: Element,
    faq_headers: Vec<Element>,
    inputs: Vec<(Field, Element)>,
    form: Element,
}

/// [`PageHost`] over the live document.
pub struct DomHost {
    body: HtmlElement,
    mode_toggle: Element,
    increment: Element,
    decrement: Element,
    counter_display: Element,
    counter_feedback: Element,
    /// (header, content) per FAQ item.
    faq: Vec<(Element, Element)>,
    form: HtmlFormElement,
    fields: FormFields,
    form_feedback: Element,
}

impl DomHost {
    pub fn bind(document: &Document, ids: &ElementIds) -> Result<Self, PageError> {
        Ok(Self {
            body: document.body().ok_or_else(|| PageError::MissingElement("body".to_owned()))?,
            mode_toggle: element(document, &ids.mode_toggle)?,
            increment: element(document, &ids.increment)?,
            decrement: element(document, &ids.decrement)?,
            counter_display: element(document, &ids.counter_display)?,
            counter_feedback: element(document, &ids.counter_feedback)?,
            faq: faq_items(document, &ids.faq_header_selector)?,
            form: typed(document, &ids.form, "form")?,
            fields: FormFields {
                name: FieldElements::bind(document, ids, Field::Name)?,
                email: FieldElements::bind(document, ids, Field::Email)?,
                password: FieldElements::bind(document, ids, Field::Password)?,
                agreement: FieldElements::bind(document, ids, Field::Agreement)?,
            },
            form_feedback: element(document, &ids.form_feedback)?,
        })
    }

    fn targets(&self) -> Targets {
        Targets {
            mode_toggle: self.mode_toggle.clone(),
            increment: self.increment.clone(),
            decrement: self.decrement.clone(),
            faq_headers: self.faq.iter().map(|(header, _)| header.clone()).collect(),
            inputs: Field::ALL
                .iter()
                .map(|field| (*field, Element::from(self.fields.get(*field).input.clone())))
                .collect(),
            form: Element::from(self.form.clone()),
        }
    }
}

fn faq_items(document: &Document, selector: &str) -> Result<Vec<(Element, Element)>, PageError> {
    let headers = document
        .query_selector_all(selector)
        .map_err(|_| PageError::InvalidSelector(selector.to_owned()))?;
    let mut items = Vec::new();
    for i in 0..headers.length() {
        let Some(node) = headers.item(i) else {
            continue;
        };
        let Ok(header) = node.dyn_into::<Element>() else {
            continue;
        };
        let content = header
            .next_element_sibling()
            .ok_or_else(|| PageError::MissingElement(format!("content panel after {selector} #{i}")))?;
        items.push((header, content));
    }
    Ok(items)
}

impl FormSurface for DomHost {
    fn text(&self, field: Field) -> String {
        self.fields.get(field).input.value()
    }

    fn checked(&self, field: Field) -> bool {
        self.fields.get(field).input.checked()
    }

    fn set_error(&mut self, field: Field, message: &str) {
        let slot = self.fields.get(field);
        set_class(&slot.input, INVALID_CLASS, true);
        slot.message.set_text_content(Some(message));
    }

    fn clear_error(&mut self, field: Field) {
        let slot = self.fields.get(field);
        set_class(&slot.input, INVALID_CLASS, false);
        slot.message.set_text_content(Some(""));
    }

    fn focus(&mut self, field: Field) {
        if let Err(err) = self.fields.get(field).input.focus() {
            log::debug!("focus on {field:?} failed: {err:?}");
        }
    }

    fn set_feedback(&mut self, mode: FeedbackMode, message: &str) {
        set_class(&self.form_feedback, FEEDBACK_SUCCESS_CLASS, mode == FeedbackMode::Success);
        set_class(&self.form_feedback, FEEDBACK_ERROR_CLASS, mode == FeedbackMode::Error);
        self.form_feedback.set_text_content(Some(message));
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

impl PageHost for DomHost {
    fn apply_theme(&mut self, theme: Theme) {
        set_class(&self.body, Theme::Dark.class(), theme == Theme::Dark);
        set_class(&self.body, Theme::Light.class(), theme == Theme::Light);
        self.mode_toggle.set_text_content(Some(theme.toggle_label()));
    }

    fn set_counter_display(&mut self, value: u32) {
        self.counter_display.set_text_content(Some(&value.to_string()));
    }

    fn set_counter_feedback(&mut self, message: &str) {
        self.counter_feedback.set_text_content(Some(message));
    }

    fn set_faq_open(&mut self, index: usize, open: bool) {
        if let Some((_, content)) = self.faq.get(index) {
            set_class(content, FAQ_OPEN_CLASS, open);
        }
    }
}

// =============================================================================
// localStorage
// =============================================================================

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Storage can be missing (privacy modes, sandboxed frames); every access
/// then fails with [`StorageError::Unavailable`] and the page keeps working.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|err| StorageError::Rejected {
            op: "get",
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|err| StorageError::Rejected {
            op: "set",
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }
}
