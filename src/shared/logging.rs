//! Structured logging for the site header
//!
//! Keeps field names consistent across the header, the scroll hook and the
//! app shell. Everything goes through `tracing`; the subscriber is installed
//! by the server entry point.

/// Operations the header logs about
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ScrollListener,
    StickyState,
    MobileMenu,
    Logout,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ScrollListener => "scroll_listener",
            LogOperation::StickyState => "sticky_state",
            LogOperation::MobileMenu => "mobile_menu",
            LogOperation::Logout => "logout",
            LogOperation::Config => "config",
        }
    }
}

/// Log scroll listener registration
pub fn log_scroll_listener_registered() {
    tracing::debug!(
        operation = LogOperation::ScrollListener.as_str(),
        "Registered window scroll listener"
    );
}

/// Log scroll listener removal (header unmounted)
pub fn log_scroll_listener_removed() {
    tracing::debug!(
        operation = LogOperation::ScrollListener.as_str(),
        "Removed window scroll listener"
    );
}

/// Log a failed registration; the header stays non-sticky
pub fn log_scroll_listener_error(error: &str) {
    tracing::warn!(
        operation = LogOperation::ScrollListener.as_str(),
        error = error,
        "Failed to register scroll listener - sticky header disabled"
    );
}

pub fn log_sticky_changed(sticky: bool, offset: f64) {
    tracing::trace!(
        operation = LogOperation::StickyState.as_str(),
        sticky = sticky,
        scroll_y = offset,
        "Sticky header state changed"
    );
}

pub fn log_mobile_menu_toggled(open: bool) {
    tracing::debug!(
        operation = LogOperation::MobileMenu.as_str(),
        open = open,
        "Mobile menu toggled"
    );
}

/// Log the panel closing because one of its entries was activated
pub fn log_mobile_menu_closed(item: &str) {
    tracing::debug!(
        operation = LogOperation::MobileMenu.as_str(),
        item = item,
        "Mobile menu closed after activation"
    );
}

/// Log a logout click. `wired` is false when no handler was injected.
pub fn log_logout_requested(wired: bool) {
    if wired {
        tracing::info!(
            operation = LogOperation::Logout.as_str(),
            "Logout requested"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::Logout.as_str(),
            "Logout clicked with no handler attached"
        );
    }
}

pub fn log_config_loaded(source: &str, site_name: &str, threshold: f64) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        source = source,
        site_name = site_name,
        sticky_threshold_px = threshold,
        "Header configuration loaded"
    );
}
