use dreamknot::carousel::{self, card_style, CardView, CarouselConfig};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::{dom, PageContext};
use crate::dom_contract as sel;

#[wasm_bindgen]
extern "C" {
    type Swiper;

    #[wasm_bindgen(constructor, catch)]
    fn new(container: &str, options: &JsValue) -> Result<Swiper, JsValue>;
}

/// Renders the catalog into the carousel wrapper and starts the slider.
pub(super) fn init(ctx: &PageContext) {
    let Some(wrapper) = dom::by_id_as::<web_sys::HtmlElement>(&ctx.document, sel::DESTINATIONS_WRAPPER_ID)
    else {
        return;
    };
    wrapper.set_inner_html("");

    let cards = carousel::render_cards(ctx.catalog.iter());
    let count = cards.len();
    let handle = leptos::mount::mount_to(wrapper, move || {
        cards
            .into_iter()
            .map(|card| view! { <DestinationCard card=card /> })
            .collect_view()
    });
    // Cards stay for the page; the slider owns them from here.
    std::mem::forget(handle);
    tracing::debug!(count, "destination cards rendered");

    if let Err(e) = start_slider(&ctx.window, &ctx.config.carousel) {
        tracing::warn!("carousel not started: {e}");
    }
}

fn start_slider(window: &web_sys::Window, cfg: &CarouselConfig) -> Result<(), String> {
    let has_swiper = js_sys::Reflect::has(window, &JsValue::from_str("Swiper")).unwrap_or(false);
    if !has_swiper {
        return Err("slider library not loaded".to_string());
    }
    let json = cfg.to_json().map_err(|e| e.to_string())?;
    let options = js_sys::JSON::parse(&json).map_err(|e| format!("{e:?}"))?;
    Swiper::new(&cfg.container, &options).map_err(|e| format!("{e:?}"))?;
    Ok(())
}

#[component]
fn DestinationCard(card: CardView) -> impl IntoView {
    view! {
        <div class="swiper-slide">
            <div class="card">
                <div class="card-image">
                    <img src=card.image_src alt=card.image_alt />
                    <span class="card-badge" style={card_style::BADGE}>{card.badge}</span>
                </div>
                <div class="card-content">
                    <div style={card_style::HEADING}>
                        <h3 class="card-title" style={card_style::TITLE}>{card.title}</h3>
                        <span style={card_style::RATING}>
                            <i class="fas fa-star"></i>
                            " "
                            {card.rating}
                        </span>
                    </div>
                    <p style={card_style::VENUES}>{card.venues_label}</p>
                    <p class="card-text" style={card_style::DESCRIPTION}>{card.description}</p>
                    <a href=card.link_href class="card-link">
                        {card.link_label}
                        " "
                        <i class="fas fa-arrow-right"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}
