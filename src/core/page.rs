//! Navigation menu and scroll decisions shared by every page.

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
pub const ANCHOR_GAP_PX: f64 = 20.0;
pub const STAGGER_STEP_MS: u32 = 100;

/// Mobile menu open flag. While open, page scrolling is suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A click outside both the menu and its toggle closes the menu.
    pub fn on_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if inside_menu || inside_toggle {
            return false;
        }
        self.close()
    }
}

/// Submenus expand in place instead of navigating on narrow viewports.
pub fn is_narrow_viewport(width_px: f64, breakpoint_px: f64) -> bool {
    width_px <= breakpoint_px
}

/// Header switches to its compact look strictly past the threshold.
pub fn header_is_scrolled(offset_px: f64, threshold_px: f64) -> bool {
    offset_px > threshold_px
}

pub fn back_to_top_visible(offset_px: f64, threshold_px: f64) -> bool {
    offset_px > threshold_px
}

/// In-page anchor to scroll to, if `href` is one. Bare `#` and `#!` are
/// placeholders and keep their default behaviour.
pub fn anchor_target(href: &str) -> Option<&str> {
    if !href.starts_with('#') || href == "#" || href == "#!" {
        return None;
    }
    Some(href)
}

/// Scroll position that puts `target_top_px` just below the fixed header.
pub fn anchor_scroll_top(target_top_px: f64, header_height_px: f64, gap_px: f64) -> f64 {
    target_top_px - header_height_px - gap_px
}

/// CSS `animation-delay` for the card at `index`.
pub fn stagger_delay(index: usize) -> String {
    let ms = (index as u64).saturating_mul(STAGGER_STEP_MS as u64);
    format!("{ms}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes_on_outside_click() {
        let mut menu = MobileMenu::default();
        assert!(menu.toggle());
        assert!(!menu.on_document_click(true, false));
        assert!(!menu.on_document_click(false, true));
        assert!(menu.is_open());
        assert!(menu.on_document_click(false, false));
        assert!(!menu.is_open());
        assert!(!menu.on_document_click(false, false));
    }

    #[test]
    fn narrow_viewport_is_inclusive() {
        assert!(is_narrow_viewport(768.0, MOBILE_BREAKPOINT_PX));
        assert!(is_narrow_viewport(375.0, MOBILE_BREAKPOINT_PX));
        assert!(!is_narrow_viewport(769.0, MOBILE_BREAKPOINT_PX));
    }

    #[test]
    fn header_threshold_is_strict() {
        assert!(!header_is_scrolled(100.0, HEADER_SCROLL_THRESHOLD_PX));
        assert!(header_is_scrolled(100.5, HEADER_SCROLL_THRESHOLD_PX));
        assert!(!header_is_scrolled(0.0, HEADER_SCROLL_THRESHOLD_PX));
        assert!(back_to_top_visible(301.0, BACK_TO_TOP_THRESHOLD_PX));
        assert!(!back_to_top_visible(300.0, BACK_TO_TOP_THRESHOLD_PX));
    }

    #[test]
    fn anchors_skip_placeholders() {
        assert_eq!(anchor_target("#services"), Some("#services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#!"), None);
        assert_eq!(anchor_target("contact.html#form"), None);
    }

    #[test]
    fn anchor_offset_clears_header() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0, ANCHOR_GAP_PX), 1100.0);
    }

    #[test]
    fn stagger_steps_by_100ms() {
        assert_eq!(stagger_delay(0), "0ms");
        assert_eq!(stagger_delay(3), "300ms");
    }
}
