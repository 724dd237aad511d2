use crate::domain::models::NavItem;

/// Transient view state owned by the site header.
///
/// Lives in a component signal: created on mount with everything off,
/// dropped on unmount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderViewState {
    pub sticky: bool,
    pub mobile_menu_open: bool,
}

impl HeaderViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vertical scroll offset. Returns `true` when `sticky` flipped.
    pub fn observe_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        let sticky = offset > threshold;
        let changed = sticky != self.sticky;
        self.sticky = sticky;
        changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Apply the side effect of activating an entry inside the mobile panel.
    ///
    /// Links and logout close the panel; the user label is not a control.
    /// Returns `true` when the panel was closed by this activation.
    pub fn activate_panel_item(&mut self, item: &NavItem) -> bool {
        if !item.is_control() {
            return false;
        }
        let was_open = self.mobile_menu_open;
        self.close_mobile_menu();
        was_open
    }

    /// BEM class list for the `<header>` element
    pub fn header_class(&self) -> &'static str {
        if self.sticky {
            "c-header c-header--sticky"
        } else {
            "c-header"
        }
    }
}
