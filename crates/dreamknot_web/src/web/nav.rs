use std::cell::RefCell;
use std::rc::Rc;

use dreamknot::page::{self, MobileMenu};
use dreamknot::routes;

use super::dom;
use super::PageContext;
use crate::dom_contract::{self as sel, class};

/// Toggle button, menu container and their shared open flag.
#[derive(Clone)]
pub(super) struct MenuHandle {
    doc: web_sys::Document,
    toggle: web_sys::Element,
    nav: web_sys::Element,
    state: Rc<RefCell<MobileMenu>>,
}

impl MenuHandle {
    fn render(&self) {
        let open = self.state.borrow().is_open();
        dom::set_class(&self.toggle, class::ACTIVE, open);
        dom::set_class(&self.nav, class::ACTIVE, open);
        dom::lock_body_scroll(&self.doc, open);
    }

    pub(super) fn close(&self) {
        if self.state.borrow_mut().close() {
            self.render();
        }
    }
}

/// Mobile menu: toggle, outside-click close and in-place submenus on narrow
/// viewports. Returns the handle so anchor scrolling can close the menu.
pub(super) fn init_mobile_menu(ctx: &PageContext) -> Option<MenuHandle> {
    let toggle = dom::query(&ctx.document, sel::MENU_TOGGLE)?;
    let nav = dom::query(&ctx.document, sel::MAIN_NAV)?;
    let menu = MenuHandle {
        doc: ctx.document.clone(),
        toggle,
        nav,
        state: Rc::new(RefCell::new(MobileMenu::default())),
    };

    dom::listen::<web_sys::MouseEvent, _>(&menu.toggle, "click", {
        let menu = menu.clone();
        move |_| {
            menu.state.borrow_mut().toggle();
            menu.render();
        }
    });

    dom::listen::<web_sys::MouseEvent, _>(&ctx.document, "click", {
        let menu = menu.clone();
        move |ev| {
            let inside_menu = dom::contains_target(&menu.nav, ev.target());
            let inside_toggle = dom::contains_target(&menu.toggle, ev.target());
            if menu
                .state
                .borrow_mut()
                .on_document_click(inside_menu, inside_toggle)
            {
                menu.render();
            }
        }
    });

    let breakpoint = ctx.config.mobile_breakpoint_px;
    for dropdown in dom::query_all(&ctx.document, sel::NAV_DROPDOWNS) {
        let Ok(Some(link)) = dropdown.query_selector("a") else {
            continue;
        };
        let window = ctx.window.clone();
        dom::listen::<web_sys::MouseEvent, _>(&link, "click", move |ev| {
            let width = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(f64::MAX);
            if page::is_narrow_viewport(width, breakpoint) {
                ev.prevent_default();
                let open = dom::has_class(&dropdown, class::ACTIVE);
                dom::set_class(&dropdown, class::ACTIVE, !open);
            }
        });
    }

    tracing::debug!("mobile menu wired");
    Some(menu)
}

/// Smooth scrolling for in-page anchors, clearing the fixed header.
pub(super) fn init_smooth_scroll(ctx: &PageContext, menu: Option<MenuHandle>) {
    let gap = ctx.config.anchor_gap_px;
    for anchor in dom::query_all(&ctx.document, sel::IN_PAGE_ANCHORS) {
        let ctx = ctx.clone();
        let menu = menu.clone();
        let link = anchor.clone();
        dom::listen::<web_sys::MouseEvent, _>(&anchor, "click", move |ev| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target_sel) = page::anchor_target(&href) else {
                return;
            };
            ev.prevent_default();
            let Some(target) = dom::query_as::<web_sys::HtmlElement>(&ctx.document, target_sel)
            else {
                return;
            };
            let header_height = dom::query_as::<web_sys::HtmlElement>(&ctx.document, sel::TOP_HEADER)
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);
            let top = page::anchor_scroll_top(target.offset_top() as f64, header_height, gap);

            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            ctx.window.scroll_to_with_scroll_to_options(&opts);

            if let Some(menu) = &menu {
                menu.close();
            }
        });
    }
}

/// Marks the navigation link for the current page.
pub(super) fn highlight_active_nav(ctx: &PageContext) {
    let pathname = ctx.window.location().pathname().unwrap_or_default();
    let page = routes::current_page(&pathname);
    for link in dom::query_all(&ctx.document, sel::NAV_LINKS) {
        let href = link.get_attribute("href").unwrap_or_default();
        if routes::is_active_link(&href, page) {
            dom::set_class(&link, class::ACTIVE, true);
        }
    }
}

/// Back-to-top button shown past the scroll threshold.
pub(super) fn init_back_to_top(ctx: &PageContext) {
    let Some(button) = dom::query(&ctx.document, sel::BACK_TO_TOP) else {
        return;
    };
    let threshold = ctx.config.back_to_top_threshold_px;

    dom::listen::<web_sys::Event, _>(&ctx.window, "scroll", {
        let window = ctx.window.clone();
        let button = button.clone();
        move |_| {
            let offset = window.page_y_offset().unwrap_or(0.0);
            dom::set_class(&button, class::VISIBLE, page::back_to_top_visible(offset, threshold));
        }
    });

    let window = ctx.window.clone();
    dom::listen::<web_sys::MouseEvent, _>(&button, "click", move |_| {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    });
}

/// Staggered entrance delay for cards already on the page.
pub(super) fn stagger_cards(ctx: &PageContext) {
    for (idx, card) in dom::query_all(&ctx.document, sel::STAGGERED_CARDS)
        .into_iter()
        .enumerate()
    {
        dom::set_style(&card, "animation-delay", &page::stagger_delay(idx));
    }
}
