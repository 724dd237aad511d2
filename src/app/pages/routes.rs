use dioxus::prelude::*;
use dioxus::document;

use crate::app::layouts::SiteHeader;
use crate::domain::models::NavTarget;
use crate::shared::state::{use_session, use_session_provider};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/search")]
    Search {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/login")]
    Login {},
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Search => Route::Search {},
            NavTarget::Dashboard => Route::Dashboard {},
            NavTarget::Login => Route::Login {},
        }
    }
}

#[component]
pub fn App() -> Element {
    use_session_provider();

    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let session = use_session();
    let viewer = session.viewer.read().clone();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            SiteHeader {
                is_authenticated: viewer.is_authenticated,
                user_name: viewer.user_name,
                on_logout: move |_| session.sign_out(),
            }

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        PagePlaceholder { title: "Home", description: "Welcome." }
    }
}

#[component]
fn Search() -> Element {
    rsx! {
        PagePlaceholder { title: "Search", description: "Search is served by its own page." }
    }
}

#[component]
fn Dashboard() -> Element {
    let session = use_session();

    if !session.viewer.read().is_authenticated {
        return rsx! {
            PagePlaceholder { title: "Dashboard", description: "Sign in to see your dashboard." }
        };
    }

    rsx! {
        PagePlaceholder { title: "Dashboard", description: "Your dashboard." }
    }
}

/// Stand-in for the real sign-in flow, which lives outside this crate
#[component]
fn Login() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "Login" }
            button {
                class: "c-button c-button--primary",
                r#type: "button",
                onclick: move |_| {
                    session.sign_in(Some("Guest".to_string()));
                    navigator.push(Route::Dashboard {});
                },
                "Continue as guest"
            }
        }
    }
}

#[component]
fn PagePlaceholder(title: String, description: String) -> Element {
    rsx! {
        div { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            p { class: "c-page__description", "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Viewer;
    use crate::shared::state::SessionContext;

    /// Full app router under a fixed session
    #[component]
    fn SessionHarness(viewer: Viewer) -> Element {
        let initial = viewer.clone();
        use_context_provider(move || SessionContext {
            viewer: Signal::new(initial),
        });

        rsx! {
            Router::<Route> {}
        }
    }

    fn render_for(viewer: Viewer) -> String {
        let mut dom = VirtualDom::new_with_props(SessionHarness, SessionHarnessProps { viewer });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_every_nav_target_maps_to_its_route() {
        for target in [NavTarget::Home, NavTarget::Search, NavTarget::Dashboard, NavTarget::Login] {
            assert_eq!(Route::from(target).to_string(), target.path());
        }
    }

    #[test]
    fn test_anonymous_header_shows_login_only() {
        let html = render_for(Viewer::anonymous());

        assert!(html.contains(">Login</a>"), "{html}");
        assert!(html.contains("c-header__link--cta"), "{html}");
        assert!(!html.contains("Dashboard"), "{html}");
        assert!(!html.contains("Logout"), "{html}");
    }

    #[test]
    fn test_signed_in_header_shows_name_dashboard_and_logout() {
        let html = render_for(Viewer::signed_in(Some("Alice".to_string())));

        assert!(html.contains(r#"<span class="c-header__user">Alice</span>"#), "{html}");
        assert!(html.contains(">Dashboard</a>"), "{html}");
        assert!(html.contains("Logout"), "{html}");
        assert!(!html.contains(">Login</a>"), "{html}");
    }

    #[test]
    fn test_signed_in_without_name_has_no_user_label() {
        let html = render_for(Viewer::signed_in(None));

        assert!(html.contains(">Dashboard</a>"), "{html}");
        assert!(html.contains("Logout"), "{html}");
        assert!(!html.contains("c-header__user"), "{html}");
    }

    #[test]
    fn test_header_mounts_closed_and_not_sticky() {
        let html = render_for(Viewer::anonymous());

        assert!(html.contains(r#"class="c-header""#), "{html}");
        assert!(!html.contains("c-header--sticky"), "{html}");
        assert!(html.contains(r#"aria-expanded="false""#), "{html}");
        assert!(!html.contains("c-header__panel"), "{html}");
    }

    #[test]
    fn test_brand_link_has_accessible_name() {
        let html = render_for(Viewer::anonymous());

        assert!(html.contains(r#"aria-label="Gitarth Ganga Home""#), "{html}");
        assert!(html.contains(r#"src="/images/logo.svg""#), "{html}");
    }
}
