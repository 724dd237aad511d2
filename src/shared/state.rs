use dioxus::prelude::*;

use crate::domain::models::Viewer;

/// Session provider shared through context.
///
/// Holds the viewer the header renders for. The header never writes to it;
/// pages and the logout callback do.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    pub viewer: Signal<Viewer>,
}

impl SessionContext {
    pub fn sign_in(mut self, user_name: Option<String>) {
        tracing::info!(has_name = user_name.is_some(), "Viewer signed in");
        self.viewer.set(Viewer::signed_in(user_name));
    }

    pub fn sign_out(mut self) {
        tracing::info!("Viewer signed out");
        self.viewer.set(Viewer::anonymous());
    }
}

/// Provide a fresh, signed-out session to the subtree
pub fn use_session_provider() -> SessionContext {
    use_context_provider(|| SessionContext {
        viewer: Signal::new(Viewer::anonymous()),
    })
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
