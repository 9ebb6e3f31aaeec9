//! Destination carousel: the card template and the slider widget options.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::DestinationRecord;
use crate::routes::Route;

/// Typed template for one destination card. The browser binding turns this
/// into nodes; nothing here is markup, so field text is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub image_src: String,
    pub image_alt: String,
    pub badge: String,
    pub title: String,
    pub rating: String,
    pub venues_label: String,
    pub description: String,
    pub link_href: String,
    pub link_label: String,
}

impl CardView {
    pub fn from_record(rec: &DestinationRecord) -> Self {
        Self {
            id: rec.id.to_string(),
            image_src: rec.image.to_string(),
            image_alt: format!("{} Wedding", rec.title),
            badge: rec.kind.as_str().to_uppercase(),
            title: rec.title.to_string(),
            rating: rec.rating.to_string(),
            venues_label: format!("{} Destination Venues", rec.venue_count),
            description: rec.description.to_string(),
            link_href: Route::detail(rec.id).href(),
            link_label: format!("Explore {}", rec.title),
        }
    }
}

/// Inline styles for the card nodes. The site stylesheet only covers the
/// base card classes, so layout of the badge, heading row and clamped
/// description travels with the markup.
pub mod card_style {
    /// Lines of description shown before the text is cut off.
    pub const DESCRIPTION_LINES: u32 = 3;

    pub const BADGE: &str = "position: absolute; top: 15px; left: 15px; \
        background: var(--secondary-color); color: white; padding: 5px 15px; \
        border-radius: 20px; font-size: 12px; font-weight: 600;";
    pub const HEADING: &str =
        "display: flex; justify-content: space-between; align-items: center; margin-bottom: 10px;";
    pub const TITLE: &str = "margin-bottom: 0;";
    pub const RATING: &str = "font-weight: 700; color: #ffc107;";
    pub const VENUES: &str =
        "color: var(--primary-color); font-weight: 600; margin-bottom: 12px; font-size: 14px;";
    pub const DESCRIPTION: &str = "font-size: 14px; display: -webkit-box; \
        -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden;";
}

/// Cards for every record, in catalog order.
pub fn render_cards<'a>(records: impl IntoIterator<Item = &'a DestinationRecord>) -> Vec<CardView> {
    records.into_iter().map(CardView::from_record).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Breakpoint {
    pub slides_per_view: u32,
    pub space_between: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pagination {
    pub el: String,
    pub clickable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Navigation {
    pub next_el: String,
    pub prev_el: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

/// Options handed to the slider widget constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CarouselConfig {
    /// Container the widget is constructed on.
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub container: String,
    pub slides_per_view: u32,
    pub space_between: u32,
    pub pagination: Pagination,
    pub navigation: Navigation,
    /// Keyed by minimum viewport width in pixels.
    pub breakpoints: BTreeMap<u32, Breakpoint>,
    pub autoplay: Autoplay,
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looped: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let breakpoints = [(640, 2, 20), (1024, 3, 30), (1280, 4, 30)]
            .into_iter()
            .map(|(width, slides_per_view, space_between)| {
                (
                    width,
                    Breakpoint {
                        slides_per_view,
                        space_between,
                    },
                )
            })
            .collect();

        Self {
            container: ".destination-swiper".to_string(),
            slides_per_view: 1,
            space_between: 20,
            pagination: Pagination {
                el: ".swiper-pagination".to_string(),
                clickable: true,
            },
            navigation: Navigation {
                next_el: ".swiper-button-next".to_string(),
                prev_el: ".swiper-button-prev".to_string(),
            },
            breakpoints,
            autoplay: Autoplay {
                delay: 4000,
                disable_on_interaction: false,
            },
            looped: true,
        }
    }
}

impl CarouselConfig {
    /// Slides visible at a given viewport width.
    pub fn slides_for_width(&self, width: u32) -> u32 {
        self.breakpoints
            .range(..=width)
            .next_back()
            .map(|(_, bp)| bp.slides_per_view)
            .unwrap_or(self.slides_per_view)
    }

    /// Widget options as JSON, in the widget's own key names.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn cards_follow_catalog_order_and_template() {
        let catalog = Catalog::builtin();
        let cards = render_cards(catalog.iter());
        assert_eq!(cards.len(), catalog.len());
        assert_eq!(cards[0].id, "goa");
        assert_eq!(cards[12].id, "thailand");

        let goa = &cards[0];
        assert_eq!(goa.image_src, "image/d1.jpg");
        assert_eq!(goa.image_alt, "Goa Wedding");
        assert_eq!(goa.badge, "BEACH");
        assert_eq!(goa.rating, "4.8");
        assert_eq!(goa.venues_label, "50+ Destination Venues");
        assert_eq!(goa.link_href, "destination-detail.html?location=goa");
        assert_eq!(goa.link_label, "Explore Goa");
    }

    #[test]
    fn description_is_clamped_and_badge_overlays_image() {
        let clamp = format!("-webkit-line-clamp: {};", card_style::DESCRIPTION_LINES);
        assert!(card_style::DESCRIPTION.contains(&clamp));
        assert!(card_style::DESCRIPTION.contains("display: -webkit-box;"));
        assert!(card_style::DESCRIPTION.contains("-webkit-box-orient: vertical;"));
        assert!(card_style::DESCRIPTION.contains("overflow: hidden;"));

        assert!(card_style::BADGE.starts_with("position: absolute; top: 15px; left: 15px; background"));
        assert!(card_style::HEADING.contains("justify-content: space-between;"));
    }

    #[test]
    fn slides_per_breakpoint() {
        let cfg = CarouselConfig::default();
        assert_eq!(cfg.slides_for_width(375), 1);
        assert_eq!(cfg.slides_for_width(640), 2);
        assert_eq!(cfg.slides_for_width(900), 2);
        assert_eq!(cfg.slides_for_width(1024), 3);
        assert_eq!(cfg.slides_for_width(1920), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_uses_widget_option_names() {
        let json = CarouselConfig::default().to_json().expect("serializes");
        let v: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(v["slidesPerView"], 1);
        assert_eq!(v["loop"], true);
        assert_eq!(v["autoplay"]["delay"], 4000);
        assert_eq!(v["autoplay"]["disableOnInteraction"], false);
        assert_eq!(v["pagination"]["el"], ".swiper-pagination");
        assert_eq!(v["pagination"]["clickable"], true);
        assert_eq!(v["navigation"]["nextEl"], ".swiper-button-next");
        assert_eq!(v["breakpoints"]["1024"]["slidesPerView"], 3);
        assert_eq!(v["breakpoints"]["1280"]["spaceBetween"], 30);
        assert!(v.get("container").is_none());
    }
}
