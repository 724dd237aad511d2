//! Site header: logo, primary navigation, auth-aware actions, a sticky
//! state driven by window scroll, and a collapsible mobile panel.

use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::config::HeaderConfig;
use crate::domain::models::{nav_items, HeaderViewState, NavItem, NavTarget, Viewer};
use crate::shared::hooks::use_window_scroll;
use crate::shared::logging::{
    log_logout_requested, log_mobile_menu_closed, log_mobile_menu_toggled, log_sticky_changed,
};

// Hamburger / cross icons for the mobile toggle
const MENU_ICON: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

/// Site header.
///
/// `is_authenticated` and `user_name` are owned by the parent session
/// provider. Logout only invokes `on_logout`; ending the session is the
/// caller's job. `initial_view` seeds the view state on mount and
/// defaults to everything off.
#[component]
pub fn SiteHeader(
    is_authenticated: bool,
    #[props(default)] user_name: Option<String>,
    #[props(default)] on_logout: Option<EventHandler<MouseEvent>>,
    #[props(default)] initial_view: HeaderViewState,
) -> Element {
    let config = try_use_context::<HeaderConfig>().unwrap_or_default();
    let threshold = config.sticky_threshold_px;

    let mut view = use_signal(move || initial_view);

    use_window_scroll(move |offset| {
        let mut next = *view.peek();
        if next.observe_scroll(offset, threshold) {
            log_sticky_changed(next.sticky, offset);
            view.set(next);
        }
    });

    let viewer = Viewer {
        is_authenticated,
        user_name,
    };
    let items = nav_items(&viewer);
    let logout = move |evt: MouseEvent| request_logout(on_logout, evt);
    let state = view();
    let header_class = state.header_class();

    rsx! {
        header {
            class: "{header_class}",
            role: "banner",
            aria_label: "Main header",
            nav { class: "c-header__nav", aria_label: "Primary navigation",
                div { class: "c-header__bar",
                    Brand { config: config.clone() }

                    DesktopNav { items: items.clone(), on_logout: logout }

                    MobileMenuToggle {
                        open: state.mobile_menu_open,
                        on_toggle: move |_| {
                            view.write().toggle_mobile_menu();
                            log_mobile_menu_toggled(view.peek().mobile_menu_open);
                        },
                    }
                }

                if state.mobile_menu_open {
                    MobilePanel {
                        items,
                        on_logout: logout,
                        on_activate: move |item: NavItem| {
                            if view.write().activate_panel_item(&item) {
                                log_mobile_menu_closed(item.text());
                            }
                        },
                    }
                }
            }
        }
    }
}

/// Logo, site name and tagline, linking home
#[component]
fn Brand(config: HeaderConfig) -> Element {
    rsx! {
        Link {
            to: Route::Home {},
            class: "c-header__brand",
            aria_label: "{config.site_name} Home",
            div { class: "c-header__logo",
                img {
                    class: "c-header__logo-img",
                    src: "{config.logo_src}",
                    alt: "{config.logo_alt}",
                }
            }
            div { class: "c-header__titles",
                span { class: "c-header__site-name", "{config.site_name}" }
                span { class: "c-header__tagline", "{config.tagline}" }
            }
        }
    }
}

/// Inline link row shown on wide viewports
#[component]
fn DesktopNav(items: Vec<NavItem>, on_logout: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "c-header__links",
            for (index, item) in items.into_iter().enumerate() {
                DesktopItem { key: "{index}", item, on_logout }
            }
        }
    }
}

#[component]
fn DesktopItem(item: NavItem, on_logout: EventHandler<MouseEvent>) -> Element {
    match item {
        NavItem::Link(target) => {
            let class = link_class(target, false);
            let label = target.label();
            rsx! {
                Link { to: Route::from(target), class: "{class}", "{label}" }
            }
        }
        NavItem::UserLabel(name) => rsx! {
            span { class: "c-header__user", "{name}" }
        },
        NavItem::Logout => rsx! {
            button {
                class: "c-header__logout",
                r#type: "button",
                onclick: move |evt| on_logout.call(evt),
                "Logout"
            }
        },
    }
}

#[component]
fn MobileMenuToggle(open: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    let icon = if open { CLOSE_ICON } else { MENU_ICON };

    rsx! {
        button {
            class: "c-header__toggle",
            r#type: "button",
            aria_label: "Toggle mobile menu",
            "aria-expanded": "{open}",
            onclick: move |evt| on_toggle.call(evt),
            svg {
                class: "c-header__toggle-icon",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                "aria-hidden": "true",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "{icon}",
                }
            }
        }
    }
}

/// Stacked copy of the link/action set with larger touch targets.
/// Every control reports itself through `on_activate` so the parent can
/// close the panel.
#[component]
fn MobilePanel(
    items: Vec<NavItem>,
    on_logout: EventHandler<MouseEvent>,
    on_activate: EventHandler<NavItem>,
) -> Element {
    rsx! {
        div { class: "c-header__panel",
            div { class: "c-header__panel-list",
                for (index, item) in items.into_iter().enumerate() {
                    MobileItem { key: "{index}", item, on_logout, on_activate }
                }
            }
        }
    }
}

#[component]
fn MobileItem(
    item: NavItem,
    on_logout: EventHandler<MouseEvent>,
    on_activate: EventHandler<NavItem>,
) -> Element {
    match item {
        NavItem::Link(target) => {
            let class = link_class(target, true);
            let label = target.label();
            rsx! {
                Link {
                    to: Route::from(target),
                    class: "{class}",
                    onclick: move |_| on_activate.call(NavItem::Link(target)),
                    "{label}"
                }
            }
        }
        NavItem::UserLabel(name) => rsx! {
            div { class: "c-header__panel-user", "Welcome, {name}" }
        },
        NavItem::Logout => rsx! {
            button {
                class: "c-header__logout c-header__logout--block",
                r#type: "button",
                onclick: move |evt| {
                    on_activate.call(NavItem::Logout);
                    on_logout.call(evt);
                },
                "Logout"
            }
        },
    }
}

/// Login is styled as a call to action; everything else is a plain link
fn link_class(target: NavTarget, stacked: bool) -> &'static str {
    match (target, stacked) {
        (NavTarget::Login, false) => "c-header__link c-header__link--cta",
        (NavTarget::Login, true) => "c-header__link c-header__link--block c-header__link--cta",
        (_, false) => "c-header__link",
        (_, true) => "c-header__link c-header__link--block",
    }
}

fn request_logout(on_logout: Option<EventHandler<MouseEvent>>, evt: MouseEvent) {
    log_logout_requested(on_logout.is_some());
    if let Some(handler) = on_logout {
        handler.call(evt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Routable, Debug, PartialEq)]
    enum HarnessRoute {
        #[route("/")]
        OpenMenu {},
    }

    /// Signed-in header mounted scrolled down with the panel already open
    #[component]
    fn OpenMenu() -> Element {
        rsx! {
            SiteHeader {
                is_authenticated: true,
                user_name: Some("Alice".to_string()),
                initial_view: HeaderViewState { sticky: true, mobile_menu_open: true },
            }
        }
    }

    fn harness() -> Element {
        rsx! { Router::<HarnessRoute> {} }
    }

    fn render_open_menu() -> String {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_open_menu_renders_panel_with_welcome_label() {
        let html = render_open_menu();

        assert!(html.contains("c-header__panel"), "{html}");
        assert!(html.contains("Welcome, Alice"), "{html}");
        assert!(html.contains("c-header__logout c-header__logout--block"), "{html}");
        assert!(html.contains("c-header__link c-header__link--block"), "{html}");
    }

    #[test]
    fn test_open_menu_marks_toggle_expanded_with_close_icon() {
        let html = render_open_menu();

        assert!(html.contains(r#"aria-expanded="true""#), "{html}");
        assert!(html.contains(CLOSE_ICON), "{html}");
        assert!(!html.contains(MENU_ICON), "{html}");
    }

    #[test]
    fn test_sticky_state_adds_modifier_class() {
        let html = render_open_menu();
        assert!(html.contains("c-header c-header--sticky"), "{html}");
    }

    #[test]
    fn test_only_login_gets_cta_modifier() {
        assert!(link_class(NavTarget::Login, false).contains("c-header__link--cta"));
        assert!(link_class(NavTarget::Login, true).contains("c-header__link--cta"));
        for target in [NavTarget::Home, NavTarget::Search, NavTarget::Dashboard] {
            assert!(!link_class(target, false).contains("--cta"));
        }
    }

    #[test]
    fn test_stacked_links_are_block() {
        assert!(link_class(NavTarget::Home, true).contains("c-header__link--block"));
        assert!(!link_class(NavTarget::Home, false).contains("--block"));
    }
}
