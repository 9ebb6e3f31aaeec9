//! Navigation targets.

use std::fmt;

pub const DETAIL_PAGE: &str = "destination-detail.html";
pub const LISTING_PAGE: &str = "destinations.html";
pub const CONTACT_PAGE: &str = "contact.html";
pub const HOME_PAGE: &str = "index.html";

/// A page the site can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `destination-detail.html?location=<id>`
    DestinationDetail { id: String },
    /// `destinations.html?type=<type>`
    Destinations { kind: String },
    Contact,
    Home,
}

impl Route {
    pub fn detail(id: impl Into<String>) -> Self {
        Route::DestinationDetail { id: id.into() }
    }

    pub fn listing(kind: impl Into<String>) -> Self {
        Route::Destinations { kind: kind.into() }
    }

    /// Relative URL for this route. Query values are percent-encoded.
    pub fn href(&self) -> String {
        match self {
            Route::DestinationDetail { id } => {
                format!("{DETAIL_PAGE}?location={}", urlencoding::encode(id))
            }
            Route::Destinations { kind } => {
                format!("{LISTING_PAGE}?type={}", urlencoding::encode(kind))
            }
            Route::Contact => CONTACT_PAGE.to_string(),
            Route::Home => HOME_PAGE.to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Last path segment of `pathname`, or `index.html` for the site root.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => HOME_PAGE,
    }
}

/// Whether a navigation link points at the page currently shown.
pub fn is_active_link(href: &str, page: &str) -> bool {
    href == page || (page.is_empty() && href == HOME_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_match_site_pages() {
        assert_eq!(
            Route::detail("goa").href(),
            "destination-detail.html?location=goa"
        );
        assert_eq!(Route::listing("beach").href(), "destinations.html?type=beach");
        assert_eq!(Route::Contact.href(), "contact.html");
        assert_eq!(Route::Home.to_string(), "index.html");
    }

    #[test]
    fn query_values_are_encoded() {
        assert_eq!(
            Route::listing("a&b=c d").href(),
            "destinations.html?type=a%26b%3Dc%20d"
        );
        assert_eq!(
            Route::detail("₹").href(),
            "destination-detail.html?location=%E2%82%B9"
        );
        assert_eq!(
            Route::detail("west-coast_1.x~").href(),
            "destination-detail.html?location=west-coast_1.x~"
        );
    }

    #[test]
    fn current_page_takes_last_segment() {
        assert_eq!(current_page("/site/contact.html"), "contact.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/site/"), "index.html");
    }

    #[test]
    fn active_link_matches_exact_page() {
        assert!(is_active_link("contact.html", "contact.html"));
        assert!(!is_active_link("contact.html", "index.html"));
        assert!(is_active_link("index.html", current_page("/")));
    }
}
