use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use dreamknot::notification::{Notification, NotificationTiming};
use dreamknot::routes::Route;
use dreamknot::search::{SearchBox, SearchEffects, SearchInput};
use wasm_bindgen::closure::Closure;

use super::timers::WindowTimeout;
use super::{dom, notify, PageContext};
use crate::dom_contract as sel;

type HeroSearch = RefCell<SearchBox<WindowTimeout>>;

struct DomSearchEffects {
    window: web_sys::Window,
    timing: NotificationTiming,
}

impl SearchEffects for DomSearchEffects {
    fn navigate(&self, route: &Route) {
        dom::navigate(&self.window, &route.href());
    }

    fn notify(&self, notification: Notification) {
        notify::present(notification, self.timing);
    }
}

/// Hero search box. Needs both the input and the button; otherwise inert.
pub(super) fn init(ctx: &PageContext) {
    let Some(input) = dom::query_as::<web_sys::HtmlInputElement>(&ctx.document, sel::SEARCH_INPUT)
    else {
        return;
    };
    let Some(button) = dom::query(&ctx.document, sel::SEARCH_BUTTON) else {
        return;
    };

    let cell: Rc<OnceCell<HeroSearch>> = Rc::new(OnceCell::new());
    let weak = Rc::downgrade(&cell);
    let window = ctx.window.clone();
    let redirect = Closure::wrap(Box::new(move || {
        let Some(cell) = weak.upgrade() else {
            return;
        };
        let route = cell.get().and_then(|s| s.borrow_mut().fire());
        if let Some(route) = route {
            dom::navigate(&window, &route.href());
        }
    }) as Box<dyn FnMut()>);
    let search = SearchBox::new(ctx.config.search_redirect_delay_ms, WindowTimeout::new(redirect));
    if cell.set(RefCell::new(search)).is_err() {
        return;
    }

    let effects = Rc::new(DomSearchEffects {
        window: ctx.window.clone(),
        timing: ctx.config.notification_timing(),
    });

    dom::listen::<web_sys::MouseEvent, _>(&button, "click", {
        let ctx = ctx.clone();
        let input = input.clone();
        let cell = Rc::clone(&cell);
        let effects = Rc::clone(&effects);
        move |ev| {
            ev.prevent_default();
            submit(&ctx, &input, &cell, &effects);
        }
    });

    let ctx = ctx.clone();
    let field = input.clone();
    dom::listen::<web_sys::KeyboardEvent, _>(&input, "keypress", move |ev| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit(&ctx, &field, &cell, &effects);
        }
    });
}

fn submit(
    ctx: &PageContext,
    input: &web_sys::HtmlInputElement,
    cell: &OnceCell<HeroSearch>,
    effects: &DomSearchEffects,
) {
    let mut request = SearchInput::query(input.value());
    if let Some(select) = dom::by_id_as::<web_sys::HtmlSelectElement>(&ctx.document, sel::TYPE_FILTER_ID) {
        request = request.with_type_filter(select.value());
    }
    if let Some(search) = cell.get() {
        search.borrow_mut().submit(&ctx.catalog, &request, effects);
    }
}
