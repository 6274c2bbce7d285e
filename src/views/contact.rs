use crate::app::Navigator;
use crate::core::{
    ContactForm, FormError, FormField, Route, SiteConfig, SubmitError, SubmitFlow,
    SubmitOutcome, CONTACT_HTML, PROJECT_TYPE_OPTIONS, TIMELINE_OPTIONS,
};
use crate::dom;
use crate::reveal::RevealController;
use crate::transport;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const FORM_ID: &str = "contact-form";
const SUBMIT_ID: &str = "contact-submit";
const COUNTER_ID: &str = "message-counter";
const TOAST_ID: &str = "contact-toast";
const TOAST_CLOSE_ID: &str = "toast-close";
const TOAST_DURATION_VAR: &str = "--toast-duration";
const PROJECT_TYPES_ID: &str = "project-type-options";
const TIMELINE_ID: &str = "timeline-select";
const PROJECT_TYPE_ATTR: &str = "data-project-type";
const FAILURE_ALERT: &str = "There was an error submitting your form. Please try again.";

/// State shared between the view's handlers and an in-flight submission.
struct ContactState {
    document: web::Document,
    form_el: web::HtmlFormElement,
    form: RefCell<ContactForm>,
    flow: RefCell<SubmitFlow>,
    redirect: RefCell<Option<Timeout>>,
    // cleared on unmount so a late response never touches a detached view
    mounted: Cell<bool>,
    config: SiteConfig,
    navigator: Navigator,
}

/// Project brief form posting to the configured endpoint.
pub struct ContactView {
    state: Rc<ContactState>,
    _listeners: Vec<EventListener>,
    _reveal: Option<RevealController>,
}

impl ContactView {
    pub fn mount(
        document: &web::Document,
        root: &web::Element,
        config: &SiteConfig,
        navigator: Navigator,
    ) -> anyhow::Result<Self> {
        root.set_inner_html(CONTACT_HTML);
        dom::scroll_to_top();
        render_options(document);

        let form_el = document
            .get_element_by_id(FORM_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", FORM_ID))?
            .dyn_into::<web::HtmlFormElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a form: {:?}", FORM_ID, e))?;

        let state = Rc::new(ContactState {
            document: document.clone(),
            form_el: form_el.clone(),
            form: RefCell::new(ContactForm::default()),
            flow: RefCell::new(SubmitFlow::default()),
            redirect: RefCell::new(None),
            mounted: Cell::new(true),
            config: config.clone(),
            navigator,
        });
        state.render_counter();

        let mut listeners = Vec::with_capacity(6);
        for event in ["input", "change"] {
            let st = state.clone();
            listeners.push(EventListener::new(&form_el, event, move |ev| {
                if let Some(target) = ev.target() {
                    st.on_field_event(&target);
                }
            }));
        }
        for (event, focused) in [("focusin", true), ("focusout", false)] {
            listeners.push(EventListener::new(&form_el, event, move |ev| {
                mark_focused(ev, focused);
            }));
        }
        {
            let st = state.clone();
            listeners.push(EventListener::new_with_options(
                &form_el,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |ev| {
                    ev.prevent_default();
                    st.submit();
                },
            ));
        }
        if let Some(close) = document.get_element_by_id(TOAST_CLOSE_ID) {
            let st = state.clone();
            listeners.push(EventListener::new(&close, "click", move |_ev| {
                st.hide_toast();
                st.navigator.go(Route::Home, None);
            }));
        }

        let reveal = RevealController::mount(root, config.reveal)
            .map_err(|e| log::warn!("[contact] scroll reveal disabled: {:?}", e))
            .ok();

        Ok(Self {
            state,
            _listeners: listeners,
            _reveal: reveal,
        })
    }
}

impl Drop for ContactView {
    fn drop(&mut self) {
        self.state.mounted.set(false);
        // cancels a pending return-home
        self.state.redirect.borrow_mut().take();
        log::debug!("[contact] unmounted");
    }
}

impl ContactState {
    fn on_field_event(&self, target: &web::EventTarget) {
        // a fresh edit clears any message left by the last failed submit
        if let Some(el) = target.dyn_ref::<web::Element>() {
            dom::set_custom_validity(el, "");
        }
        if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
            if input.type_() == "checkbox" {
                if let Some(label) = input.get_attribute(PROJECT_TYPE_ATTR) {
                    self.sync_project_type(input, &label);
                }
                return;
            }
            self.set_field(&input.name(), input.value());
        } else if let Some(area) = target.dyn_ref::<web::HtmlTextAreaElement>() {
            self.set_field(&area.name(), area.value());
        } else if let Some(select) = target.dyn_ref::<web::HtmlSelectElement>() {
            self.set_field(&select.name(), select.value());
        }
    }

    fn set_field(&self, name: &str, value: String) {
        let Some(field) = FormField::from_name(name) else {
            log::trace!("[contact] unbound field {}", name);
            return;
        };
        self.form.borrow_mut().set_field(field, value);
        if field == FormField::Message {
            self.render_counter();
        }
    }

    // input and change both fire for checkboxes; follow `checked` so the
    // second event is a no-op
    fn sync_project_type(&self, input: &web::HtmlInputElement, label: &str) {
        let selected = {
            let mut form = self.form.borrow_mut();
            if form.is_selected(label) != input.checked() {
                form.toggle_project_type(label);
            }
            form.is_selected(label)
        };
        if let Ok(Some(chip)) = input.closest("label") {
            dom::set_class(&chip, "is-selected", selected);
        }
    }

    fn render_counter(&self) {
        let Some(el) = self.document.get_element_by_id(COUNTER_ID) else {
            return;
        };
        let counter = self.form.borrow().message_counter();
        el.set_text_content(Some(&counter.label()));
        dom::set_class(&el, "is-highlighted", counter.highlighted);
    }

    fn control(&self, field: FormField) -> Option<web::Element> {
        self.form_el
            .query_selector(&format!("[name=\"{}\"]", field.name()))
            .ok()
            .flatten()
    }

    fn report_invalid(&self, err: &FormError) {
        let message = err.to_string();
        match err.field().and_then(|f| self.control(f)) {
            Some(control) => {
                dom::set_custom_validity(&control, &message);
                _ = self.form_el.report_validity();
            }
            None => gloo::dialogs::alert(&message),
        }
    }

    fn set_busy(&self, busy: bool) {
        let Some(el) = self.document.get_element_by_id(SUBMIT_ID) else {
            return;
        };
        dom::set_class(&el, "is-busy", busy);
        if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
            button.set_disabled(busy);
        }
    }

    fn submit(self: &Rc<Self>) {
        let checked = self.form.borrow().validate();
        if let Err(e) = checked {
            log::warn!("[contact] not submitted: {}", e);
            self.report_invalid(&e);
            return;
        }
        if !self.flow.borrow_mut().begin() {
            log::debug!("[contact] submission already in flight");
            return;
        }
        let body = match self.form.borrow().to_json() {
            Ok(b) => b,
            Err(e) => {
                let err = SubmitError::Encode(e.to_string());
                log::error!("[contact] {}", err);
                self.flow.borrow_mut().finish(Err(err));
                return;
            }
        };
        self.set_busy(true);

        let st = self.clone();
        spawn_local(async move {
            let result =
                transport::send(&st.config.endpoint_url, st.config.submission_policy, &body).await;
            if !st.mounted.get() {
                log::info!("[contact] view left before submission settled: {:?}", result);
                return;
            }
            st.flow.borrow_mut().finish(result.clone());
            st.set_busy(false);
            match result {
                Ok(outcome) => st.on_success(outcome),
                Err(e) => {
                    log::error!("[contact] error submitting form: {}", e);
                    gloo::dialogs::alert(FAILURE_ALERT);
                }
            }
        });
    }

    fn on_success(self: &Rc<Self>, outcome: SubmitOutcome) {
        log::info!("[contact] submitted: {:?}", outcome);
        self.form.borrow_mut().reset();
        self.form_el.reset();
        for chip in dom::query_all(&self.form_el, "label.is-selected") {
            dom::set_class(&chip, "is-selected", false);
        }
        self.render_counter();
        self.show_toast();

        let navigator = self.navigator.clone();
        let timeout = Timeout::new(self.config.redirect_delay_ms, move || {
            navigator.go(Route::Home, None);
        });
        *self.redirect.borrow_mut() = Some(timeout);
    }

    fn show_toast(&self) {
        if let Some(toast) = self.document.get_element_by_id(TOAST_ID) {
            if let Some(el) = toast.dyn_ref::<web::HtmlElement>() {
                _ = el
                    .style()
                    .set_property(TOAST_DURATION_VAR, &self.config.redirect_css_duration());
            }
            dom::set_class(&toast, "is-open", true);
        }
    }

    fn hide_toast(&self) {
        if let Some(toast) = self.document.get_element_by_id(TOAST_ID) {
            dom::set_class(&toast, "is-open", false);
        }
    }
}

fn mark_focused(ev: &web::Event, focused: bool) {
    let Some(field) = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(".field").ok().flatten())
    else {
        return;
    };
    dom::set_class(&field, "is-focused", focused);
}

fn render_options(document: &web::Document) {
    if let Some(container) = document.get_element_by_id(PROJECT_TYPES_ID) {
        let chips: String = PROJECT_TYPE_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, (id, label))| {
                let label = escape_html(label);
                format!(
                    r#"<label class="chip" for="pt-{id}" style="animation-delay:{delay}ms"><input type="checkbox" id="pt-{id}" class="sr-only" {attr}="{label}"><span class="chip-box"></span><span class="chip-label">{label}</span></label>"#,
                    id = id,
                    delay = i * 50,
                    attr = PROJECT_TYPE_ATTR,
                    label = label,
                )
            })
            .collect();
        container.set_inner_html(&chips);
    }
    if let Some(select) = document.get_element_by_id(TIMELINE_ID) {
        let mut html = String::from(r#"<option value="">Select timeline...</option>"#);
        for option in TIMELINE_OPTIONS {
            let option = escape_html(option);
            html.push_str(&format!(r#"<option value="{0}">{0}</option>"#, option));
        }
        select.set_inner_html(&html);
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
