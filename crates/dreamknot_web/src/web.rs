use std::rc::Rc;

use dreamknot::catalog::Catalog;
use dreamknot::config::SiteConfig;

use crate::dom_contract::Controller;

mod config;
mod destinations;
mod dom;
mod exports;
mod forms;
mod logging;
mod modal;
mod nav;
mod notify;
mod scroll;
mod search;
mod slideshow;
mod timers;

/// Handles every controller needs. Cheap to clone.
#[derive(Clone)]
pub(crate) struct PageContext {
    pub(crate) window: web_sys::Window,
    pub(crate) document: web_sys::Document,
    pub(crate) config: Rc<SiteConfig>,
    pub(crate) catalog: Rc<Catalog>,
}

/// Wires every controller against the current document. Controllers whose
/// elements are missing stay inert; nothing here fails the page.
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = config::load_site_config(&document);
    logging::init(config.tracing_level());

    let catalog = Catalog::builtin();
    if let Err(e) = catalog.validate() {
        tracing::error!("destination catalog is inconsistent: {e}");
    }

    let ctx = PageContext {
        window,
        document,
        config: Rc::new(config),
        catalog: Rc::new(catalog),
    };

    exports::init(&ctx);
    for &controller in Controller::all() {
        if controller.required().iter().all(|sel| present(&ctx.document, sel)) {
            wire(controller, &ctx);
        } else {
            tracing::debug!(controller = controller.label(), "controller inert");
        }
    }
    tracing::info!("site script ready");
}

fn wire(controller: Controller, ctx: &PageContext) {
    match controller {
        Controller::Navigation => {
            let menu = nav::init_mobile_menu(ctx);
            nav::init_smooth_scroll(ctx, menu);
            nav::highlight_active_nav(ctx);
            nav::init_back_to_top(ctx);
        }
        Controller::Slideshow => slideshow::init(ctx),
        Controller::ScrollEffects => {
            scroll::init_header(ctx);
            scroll::init_reveal(ctx);
            scroll::init_lazy_images(ctx);
            nav::stagger_cards(ctx);
        }
        Controller::Forms => forms::init(ctx),
        Controller::Search => search::init(ctx),
        Controller::Destinations => destinations::init(ctx),
        Controller::VenueModal => modal::init(ctx),
    }
    tracing::debug!(controller = controller.label(), "controller wired");
}

fn present(doc: &web_sys::Document, selector: &str) -> bool {
    match selector.strip_prefix('#') {
        Some(id) => doc.get_element_by_id(id).is_some(),
        None => dom::query(doc, selector).is_some(),
    }
}
