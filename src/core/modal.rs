//! Venue detail overlay.

pub const DEFAULT_LOCATION: &str = "Prime Location";

/// What the overlay shows. Fully replaced on every open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub image: String,
    pub title: String,
    pub price_label: String,
    pub location_label: String,
}

impl ModalContent {
    pub fn new(image: &str, title: &str, price: Option<&str>, location: Option<&str>) -> Self {
        Self {
            image: image.to_string(),
            title: title.to_string(),
            price_label: price_label(price.unwrap_or_default()),
            location_label: location_label(location),
        }
    }
}

/// Verbatim when the price already carries a rupee sign, otherwise expressed
/// in lakhs.
pub fn price_label(price: &str) -> String {
    if price.contains('₹') {
        price.to_string()
    } else {
        format!("Starting from ₹{price} Lakhs")
    }
}

pub fn location_label(location: Option<&str>) -> String {
    match location {
        Some(loc) if !loc.is_empty() => loc.to_string(),
        _ => DEFAULT_LOCATION.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueModal {
    content: Option<ModalContent>,
    open: bool,
}

impl VenueModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, content: ModalContent) {
        self.content = Some(content);
        self.open = true;
    }

    /// Hides the overlay. The last content stays until the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }
}
