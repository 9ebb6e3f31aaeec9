//! Selectors each controller looks up, available on both wasm and native.
//!
//! Keeping the page contract out of the wasm-only `web` module lets us
//! unit-test the inventory on the host. A controller whose required elements
//! are missing from the current page is skipped silently.

pub const MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const MAIN_NAV: &str = ".main-nav";
pub const NAV_DROPDOWNS: &str = ".nav-menu .dropdown";
pub const NAV_LINKS: &str = ".nav-menu a";

pub const HERO_SLIDES: &str = ".hero-slide";
pub const SLIDESHOW_DOTS: &str = ".slideshow-dots";

pub const TOP_HEADER: &str = ".top-header";
pub const SCROLL_REVEAL: &str = ".animate-on-scroll";
pub const LAZY_IMAGES: &str = "img.lazy";
pub const BACK_TO_TOP: &str = ".back-to-top";
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const STAGGERED_CARDS: &str = ".card";

pub const FORMS: &str = "form";
pub const REQUIRED_FIELDS: &str = "input[required], select[required], textarea[required]";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const ERROR_MESSAGE: &str = ".error-message";

pub const SEARCH_INPUT: &str = ".hero-search-container input[name=\"search\"]";
pub const SEARCH_BUTTON: &str = ".hero-search-container .search-btn";
pub const TYPE_FILTER_ID: &str = "type-search";

pub const DESTINATIONS_WRAPPER_ID: &str = "destinations-wrapper";

pub const VENUE_MODAL_ID: &str = "venueModal";
pub const MODAL_IMAGE_ID: &str = "modal-img";
pub const MODAL_TITLE_ID: &str = "modal-title";
pub const MODAL_PRICE_ID: &str = "modal-price";
pub const MODAL_LOCATION_ID: &str = "modal-location";

pub const CONFIG_SCRIPT_ID: &str = "dreamknot-config";

/// Class names toggled by the controllers.
pub mod class {
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const VISIBLE: &str = "visible";
    pub const ERROR: &str = "error";
    pub const LAZY: &str = "lazy";
    pub const DOT: &str = "dot";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Navigation,
    Slideshow,
    ScrollEffects,
    Forms,
    Search,
    Destinations,
    VenueModal,
}

impl Controller {
    pub fn label(self) -> &'static str {
        match self {
            Controller::Navigation => "navigation",
            Controller::Slideshow => "slideshow",
            Controller::ScrollEffects => "scroll-effects",
            Controller::Forms => "forms",
            Controller::Search => "search",
            Controller::Destinations => "destinations",
            Controller::VenueModal => "venue-modal",
        }
    }

    /// Selectors that must all match for the controller to wire itself.
    /// Ids are given with a leading `#`. Navigation wires its parts one by
    /// one. The venue modal always wires: its entry points are globals that
    /// inline handlers call.
    pub fn required(self) -> &'static [&'static str] {
        match self {
            Controller::Navigation => &[],
            Controller::Slideshow => &[HERO_SLIDES],
            Controller::ScrollEffects => &[],
            Controller::Forms => &[FORMS],
            Controller::Search => &[SEARCH_INPUT, SEARCH_BUTTON],
            Controller::Destinations => &["#destinations-wrapper"],
            Controller::VenueModal => &[],
        }
    }

    /// Order in which controllers are wired at page load.
    pub fn all() -> &'static [Controller] {
        &[
            Controller::Navigation,
            Controller::Slideshow,
            Controller::ScrollEffects,
            Controller::Forms,
            Controller::Search,
            Controller::Destinations,
            Controller::VenueModal,
        ]
    }
}
