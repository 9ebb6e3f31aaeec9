use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use dreamknot::slideshow::{SlideChange, Slideshow};
use wasm_bindgen::closure::Closure;

use super::dom;
use super::timers::WindowInterval;
use super::PageContext;
use crate::dom_contract::{self as sel, class};

struct HeroSlideshow {
    slides: Vec<web_sys::Element>,
    dots: RefCell<Vec<web_sys::Element>>,
    state: RefCell<Slideshow<WindowInterval>>,
}

impl HeroSlideshow {
    fn apply(&self, change: SlideChange) {
        mark(&self.slides, change);
        mark(&self.dots.borrow(), change);
    }

    fn tick(&self) {
        let change = self.state.borrow_mut().next();
        self.apply(change);
    }

    fn jump(&self, index: usize) {
        let result = self.state.borrow_mut().go_to(index);
        match result {
            Ok(change) => self.apply(change),
            Err(e) => tracing::warn!("{e}"),
        }
    }
}

fn mark(elements: &[web_sys::Element], change: SlideChange) {
    if let Some(prev) = elements.get(change.previous) {
        dom::set_class(prev, class::ACTIVE, false);
    }
    if let Some(cur) = elements.get(change.current) {
        dom::set_class(cur, class::ACTIVE, true);
    }
}

/// Hero slideshow with auto-advance and dot navigation. No slides, no-op.
pub(super) fn init(ctx: &PageContext) {
    let slides = dom::query_all(&ctx.document, sel::HERO_SLIDES);
    if slides.is_empty() {
        return;
    }
    let count = slides.len();

    let cell: Rc<OnceCell<HeroSlideshow>> = Rc::new(OnceCell::new());
    let weak = Rc::downgrade(&cell);
    let tick = Closure::wrap(Box::new(move || {
        if let Some(show) = weak.upgrade().as_deref().and_then(OnceCell::get) {
            show.tick();
        }
    }) as Box<dyn FnMut()>);

    let Some(state) = Slideshow::new(count, ctx.config.slideshow_interval_ms, WindowInterval::new(tick))
    else {
        return;
    };
    for (idx, slide) in slides.iter().enumerate() {
        dom::set_class(slide, class::ACTIVE, idx == 0);
    }
    if cell
        .set(HeroSlideshow {
            slides,
            dots: RefCell::new(Vec::new()),
            state: RefCell::new(state),
        })
        .is_err()
    {
        return;
    }

    if let Some(container) = dom::query(&ctx.document, sel::SLIDESHOW_DOTS) {
        let dots = build_dots(&ctx.document, &container, count, &cell);
        if let Some(show) = cell.get() {
            *show.dots.borrow_mut() = dots;
        }
    }

    if let Some(show) = cell.get() {
        show.state.borrow_mut().start();
    }
    tracing::debug!(count, "slideshow started");

    // Lives for the page.
    std::mem::forget(cell);
}

fn build_dots(
    doc: &web_sys::Document,
    container: &web_sys::Element,
    count: usize,
    cell: &Rc<OnceCell<HeroSlideshow>>,
) -> Vec<web_sys::Element> {
    let mut dots = Vec::with_capacity(count);
    for idx in 0..count {
        let Ok(dot) = doc.create_element("button") else {
            continue;
        };
        dot.set_class_name(class::DOT);
        let _ = dot.set_attribute("type", "button");
        let _ = dot.set_attribute("aria-label", &format!("Go to slide {}", idx + 1));
        dom::set_class(&dot, class::ACTIVE, idx == 0);

        let weak = Rc::downgrade(cell);
        dom::listen::<web_sys::MouseEvent, _>(&dot, "click", move |_| {
            if let Some(show) = weak.upgrade().as_deref().and_then(OnceCell::get) {
                show.jump(idx);
            }
        });

        if container.append_child(&dot).is_ok() {
            dots.push(dot);
        }
    }
    dots
}
