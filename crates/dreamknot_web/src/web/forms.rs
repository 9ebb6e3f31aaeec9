use std::future::Future;

use dreamknot::notification::{Notification, NotificationTiming};
use dreamknot::submit::{self, drive_submission, SubmitControl, SubmitError, SubmitTransport, Submission};
use dreamknot::validation::{check_form, ErrorMarkers, FieldError, FieldInput, FieldKind};
use wasm_bindgen::JsCast;

use super::{dom, notify, timers, PageContext};
use crate::dom_contract::{self as sel, class};

const SUBMIT_FIELDS: &str = "input[name], select[name], textarea[name]";

/// Answers after a fixed delay. Stands in until the site has a form endpoint.
struct SimulatedTransport {
    latency_ms: u32,
}

impl SubmitTransport for SimulatedTransport {
    fn submit(&self, submission: Submission) -> impl Future<Output = Result<(), SubmitError>> {
        let latency_ms = self.latency_ms;
        async move {
            tracing::debug!(
                form = submission.form_id.as_deref().unwrap_or(""),
                fields = submission.fields.len(),
                "sending form"
            );
            timers::sleep_ms(latency_ms)
                .await
                .map_err(SubmitError::Unavailable)
        }
    }
}

struct DomSubmitControl {
    form: web_sys::HtmlFormElement,
    button: Option<web_sys::HtmlButtonElement>,
    timing: NotificationTiming,
}

impl SubmitControl for DomSubmitControl {
    fn begin_sending(&self) -> String {
        let Some(button) = &self.button else {
            return String::new();
        };
        let original = button.text_content().unwrap_or_default();
        button.set_disabled(true);
        button.set_inner_html(&format!(
            "<span class=\"loading\"></span> {}",
            submit::SENDING_LABEL
        ));
        original
    }

    fn end_sending(&self, original_label: &str) {
        if let Some(button) = &self.button {
            button.set_disabled(false);
            button.set_text_content(Some(original_label));
        }
    }

    fn notify(&self, notification: Notification) {
        notify::present(notification, self.timing);
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// One required control with its current value.
struct RequiredControl {
    element: web_sys::Element,
    name: String,
    kind: FieldKind,
    value: String,
}

fn read_control(el: &web_sys::Element) -> Option<RequiredControl> {
    let (kind, value) = if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        (FieldKind::from_type_attr(&input.type_()), input.value())
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        (FieldKind::Select, select.value())
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        (FieldKind::TextArea, area.value())
    } else {
        return None;
    };
    Some(RequiredControl {
        element: el.clone(),
        name: el.get_attribute("name").unwrap_or_default(),
        kind,
        value,
    })
}

fn clear_error(control: &web_sys::Element) {
    if let Some(parent) = control.parent_element() {
        if let Ok(Some(old)) = parent.query_selector(sel::ERROR_MESSAGE) {
            old.remove();
        }
    }
    dom::set_class(control, class::ERROR, false);
}

fn show_error(doc: &web_sys::Document, control: &web_sys::Element, error: FieldError) {
    dom::set_class(control, class::ERROR, true);
    let Some(parent) = control.parent_element() else {
        return;
    };
    let Ok(message) = doc.create_element("div") else {
        return;
    };
    message.set_class_name("error-message");
    message.set_text_content(Some(&error.to_string()));
    dom::set_style(&message, "color", "#e91e63");
    dom::set_style(&message, "font-size", "14px");
    dom::set_style(&message, "margin-top", "5px");
    let _ = parent.append_child(&message);
}

struct ControlMarkers<'a> {
    doc: &'a web_sys::Document,
    controls: &'a [RequiredControl],
}

impl ErrorMarkers for ControlMarkers<'_> {
    fn clear(&self, index: usize) {
        if let Some(c) = self.controls.get(index) {
            clear_error(&c.element);
        }
    }

    fn show(&self, index: usize, error: FieldError) {
        if let Some(c) = self.controls.get(index) {
            show_error(self.doc, &c.element, error);
        }
    }
}

fn check_required(doc: &web_sys::Document, form: &web_sys::HtmlFormElement) -> bool {
    let controls: Vec<RequiredControl> = dom::query_all_in(form, sel::REQUIRED_FIELDS)
        .iter()
        .filter_map(read_control)
        .collect();
    let inputs: Vec<FieldInput<'_>> = controls
        .iter()
        .map(|c| FieldInput::required(&c.name, c.kind, &c.value))
        .collect();
    let markers = ControlMarkers {
        doc,
        controls: &controls,
    };
    let report = check_form(&inputs, &markers);
    if !report.is_valid() {
        tracing::debug!(errors = report.len(), "form rejected");
    }
    report.is_valid()
}

fn collect_submission(form: &web_sys::HtmlFormElement) -> Submission {
    let id = form.id();
    let mut submission = Submission::new((!id.is_empty()).then_some(id));
    for el in dom::query_all_in(form, SUBMIT_FIELDS) {
        if let Some(c) = read_control(&el) {
            submission.push(c.name, c.value);
        }
    }
    submission
}

/// Validation and simulated submission for every form on the page.
pub(super) fn init(ctx: &PageContext) {
    for el in dom::query_all(&ctx.document, sel::FORMS) {
        let Ok(form) = el.dyn_into::<web_sys::HtmlFormElement>() else {
            continue;
        };
        let doc = ctx.document.clone();
        let latency_ms = ctx.config.submit_latency_ms;
        let timing = ctx.config.notification_timing();
        let target = form.clone();
        dom::listen::<web_sys::Event, _>(&form, "submit", move |ev| {
            ev.prevent_default();
            if !check_required(&doc, &target) {
                return;
            }
            let submission = collect_submission(&target);
            let button = target
                .query_selector(sel::SUBMIT_BUTTON)
                .ok()
                .flatten()
                .and_then(|b| b.dyn_into::<web_sys::HtmlButtonElement>().ok());
            let control = DomSubmitControl {
                form: target.clone(),
                button,
                timing,
            };
            let transport = SimulatedTransport { latency_ms };
            wasm_bindgen_futures::spawn_local(async move {
                let _ = drive_submission(&transport, &control, submission).await;
            });
        });
    }
}
