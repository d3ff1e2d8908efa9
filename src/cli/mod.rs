//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the stores and wizards.

pub mod auth;
pub mod console;
pub mod flows;
pub mod theme;
pub mod view;

pub use auth::{
    handle_login, handle_logout, handle_profile, handle_signup, handle_whoami, ProfileArgs,
};
pub use console::Console;
pub use flows::{handle_add_money, handle_convert, handle_create_card, handle_send, FlowOutcome};
pub use theme::handle_theme;
pub use view::{
    handle_accounts, handle_card_settings, handle_cards, handle_dashboard, handle_invoices,
    handle_transactions, CardArgs, CardSettingsArgs, InvoiceArgs, TransactionArgs,
};

use std::sync::Arc;

use tracing::warn;

use crate::config::{Settings, VennPaths};
use crate::error::{VennError, VennResult};
use crate::nav::{AuthGate, GateDecision, Route, RouteGroup};
use crate::notice::{NoticeDispatcher, Severity};
use crate::session::{Session, SessionStore};
use crate::storage::{FileStore, KeyValueStore};
use crate::theme::{HostScheme, ThemeStore};

/// Everything a command needs: configuration and the initialized stores
pub struct Context {
    pub paths: VennPaths,
    pub settings: Settings,
    pub session: SessionStore,
    pub theme: ThemeStore,
    pub notices: NoticeDispatcher,
    pub host_scheme: HostScheme,
}

impl Context {
    /// Build the stores over the file-backed key-value store and load them
    ///
    /// Unreadable persisted state is logged and treated as absent.
    pub fn open(paths: VennPaths, settings: Settings, host_scheme: HostScheme) -> Self {
        let kv: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(paths.store_file()));
        Self::with_store(paths, settings, host_scheme, kv)
    }

    pub fn with_store(
        paths: VennPaths,
        settings: Settings,
        host_scheme: HostScheme,
        kv: Arc<dyn KeyValueStore>,
    ) -> Self {
        let mut session = SessionStore::new(Arc::clone(&kv), settings.login_delay());
        if let Err(e) = session.initialize() {
            warn!(error = %e, "Session store failed to initialize");
        }

        let mut theme = ThemeStore::new(kv);
        if let Err(e) = theme.initialize() {
            warn!(error = %e, "Theme store failed to initialize");
        }

        let notices = NoticeDispatcher::new(settings.notice_duration());

        Self {
            paths,
            settings,
            session,
            theme,
            notices,
            host_scheme,
        }
    }

    /// Pass `route` through the auth gate, returning the signed-in session
    pub fn require_session(&self, route: Route) -> VennResult<&Session> {
        match AuthGate::decide(self.session.status(), route.group()) {
            GateDecision::Redirect(Route::Login) | GateDecision::Wait => Err(VennError::Auth(
                format!("{} requires a session; run `venn login` first", route),
            )),
            _ => self
                .session
                .current()
                .ok_or_else(|| VennError::Auth(route.to_string())),
        }
    }

    /// Whether an auth screen should be skipped because a session exists
    pub fn already_signed_in(&self) -> bool {
        matches!(
            AuthGate::decide(self.session.status(), RouteGroup::Auth),
            GateDecision::Redirect(_)
        )
    }

    /// Show a notice and return its terminal rendering
    pub fn notify(&self, message: &str, severity: Severity) -> String {
        self.notices.show(message, severity);
        self.notices
            .current()
            .map(|n| n.render())
            .unwrap_or_default()
    }
}
