//! # dreamknot
//!
//! Site logic for the DreamKnot Weddings marketing pages: the destination
//! catalog and its search, card templates and carousel options, form field
//! validation, the hero slideshow state machine, notifications and the venue
//! modal.
//!
//! Everything here is plain Rust and runs on the host. The browser binding
//! lives in `crates/dreamknot_web` and drives these types from DOM events.
//!
//! ## Quick Start
//!
//! ```
//! use dreamknot::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let outcome = search::resolve(&catalog, &SearchInput::query("GOA"));
//! assert_eq!(
//!     outcome.route().map(|r| r.href()),
//!     Some("destination-detail.html?location=goa".to_string())
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialization for config, catalog export and the
//!   carousel widget options
//!
//! ## Modules
//!
//! - [`catalog`]: fixed destination records and lookups
//! - [`search`]: free-text search resolution and the delayed contact redirect
//! - [`routes`]: typed navigation targets
//! - [`validation`]: required/email/phone field checks
//! - [`submit`]: asynchronous form submission seam
//! - [`slideshow`]: hero slide state machine
//! - [`timer`]: timer traits and the debouncer
//! - [`notification`]: transient banner model
//! - [`modal`]: venue detail overlay state
//! - [`carousel`]: destination card template and widget options
//! - [`format`]: currency and date formatting
//! - [`page`]: navigation and scroll decisions
//! - [`config`]: site configuration

#[path = "core/catalog.rs"]
pub mod catalog;

#[path = "core/carousel.rs"]
pub mod carousel;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/format.rs"]
pub mod format;

#[path = "core/modal.rs"]
pub mod modal;

#[path = "core/notification.rs"]
pub mod notification;

#[path = "core/page.rs"]
pub mod page;

#[path = "core/routes.rs"]
pub mod routes;

#[path = "core/search.rs"]
pub mod search;

#[path = "core/slideshow.rs"]
pub mod slideshow;

#[path = "core/submit.rs"]
pub mod submit;

#[path = "core/timer.rs"]
pub mod timer;

#[path = "core/validation.rs"]
pub mod validation;

/// Prelude module for convenient imports.
///
/// ```
/// use dreamknot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::carousel::{CardView, CarouselConfig};
    pub use crate::catalog::{Budget, Catalog, CatalogError, DestinationKind, DestinationRecord};
    pub use crate::config::{ConfigError, SiteConfig};
    pub use crate::modal::{ModalContent, VenueModal};
    pub use crate::notification::{Notification, Severity};
    pub use crate::routes::Route;
    pub use crate::search::{self, SearchBox, SearchEffects, SearchInput, SearchOutcome};
    pub use crate::slideshow::{SlideChange, Slideshow, SlideshowError};
    pub use crate::submit::{drive_submission, SubmitControl, SubmitError, SubmitTransport, Submission};
    pub use crate::timer::{Debouncer, IntervalTimer, OneShotTimer};
    pub use crate::validation::{
        check_form, validate_form, ErrorMarkers, FieldError, FieldInput, FieldKind, ValidationReport,
    };
}
