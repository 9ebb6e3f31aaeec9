use std::cell::RefCell;
use std::rc::Rc;

use dreamknot::modal::{ModalContent, VenueModal};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{dom, PageContext};
use crate::dom_contract::{self as sel, class};

#[derive(Clone)]
struct ModalView {
    doc: web_sys::Document,
    state: Rc<RefCell<VenueModal>>,
}

impl ModalView {
    fn element(&self) -> Option<web_sys::Element> {
        self.doc.get_element_by_id(sel::VENUE_MODAL_ID)
    }

    fn open(&self, content: ModalContent) {
        let Some(modal) = self.element() else {
            return;
        };
        if let Some(img) = dom::by_id_as::<web_sys::HtmlImageElement>(&self.doc, sel::MODAL_IMAGE_ID) {
            img.set_src(&content.image);
        }
        set_text(&self.doc, sel::MODAL_TITLE_ID, &content.title);
        set_text(&self.doc, sel::MODAL_PRICE_ID, &content.price_label);
        set_text(&self.doc, sel::MODAL_LOCATION_ID, &content.location_label);

        tracing::debug!(title = %content.title, "venue modal opened");
        self.state.borrow_mut().open(content);
        dom::set_class(&modal, class::ACTIVE, true);
        dom::lock_body_scroll(&self.doc, true);
    }

    fn close(&self) {
        let Some(modal) = self.element() else {
            return;
        };
        self.state.borrow_mut().close();
        dom::set_class(&modal, class::ACTIVE, false);
        dom::lock_body_scroll(&self.doc, false);
    }
}

fn set_text(doc: &web_sys::Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Installs `window.openVenueModal` / `window.closeVenueModal` and closes the
/// overlay on a backdrop click.
pub(super) fn init(ctx: &PageContext) {
    let view = ModalView {
        doc: ctx.document.clone(),
        state: Rc::new(RefCell::new(VenueModal::new())),
    };

    let open = Closure::wrap(Box::new({
        let view = view.clone();
        // Non-string arguments, including missing ones, count as absent.
        move |image: JsValue, title: JsValue, price: JsValue, location: JsValue| {
            let content = ModalContent::new(
                &image.as_string().unwrap_or_default(),
                &title.as_string().unwrap_or_default(),
                price.as_string().as_deref(),
                location.as_string().as_deref(),
            );
            view.open(content);
        }
    }) as Box<dyn FnMut(JsValue, JsValue, JsValue, JsValue)>);

    let close = Closure::wrap(Box::new({
        let view = view.clone();
        move || view.close()
    }) as Box<dyn FnMut()>);

    expose(&ctx.window, "openVenueModal", open.as_ref());
    expose(&ctx.window, "closeVenueModal", close.as_ref());
    open.forget();
    close.forget();

    dom::listen::<web_sys::MouseEvent, _>(&ctx.document, "click", move |ev| {
        let Some(modal) = view.element() else {
            return;
        };
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|t| t == modal);
        if on_backdrop {
            view.close();
        }
    });
}

pub(super) fn expose(window: &web_sys::Window, name: &str, value: &JsValue) {
    if js_sys::Reflect::set(window, &JsValue::from_str(name), value).is_err() {
        tracing::warn!(name, "failed to expose function");
    }
}
