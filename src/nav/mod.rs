//! Screen routing and the auth gate

use std::fmt;

use crate::session::SessionStatus;

/// Which half of the app a route belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    Auth,
    Main,
}

/// Every screen in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Accounts,
    Cards,
    Transfers,
    More,
    SendMoney,
    AddMoney,
    ConvertMoney,
    CreateCard,
    Invoices,
    Settings,
    CardSettings,
    TransactionDetail,
}

impl Route {
    pub fn group(&self) -> RouteGroup {
        match self {
            Self::Login | Self::Signup => RouteGroup::Auth,
            _ => RouteGroup::Main,
        }
    }

    /// Modal screens stack on top of a tab
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Self::SendMoney
                | Self::AddMoney
                | Self::ConvertMoney
                | Self::CreateCard
                | Self::Invoices
                | Self::Settings
                | Self::CardSettings
                | Self::TransactionDetail
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Signup => "Create Account",
            Self::Dashboard => "Home",
            Self::Accounts => "Accounts",
            Self::Cards => "Cards",
            Self::Transfers => "Transfers",
            Self::More => "More",
            Self::SendMoney => "Send Money",
            Self::AddMoney => "Add Money",
            Self::ConvertMoney => "Convert",
            Self::CreateCard => "Create Card",
            Self::Invoices => "Invoices",
            Self::Settings => "Settings",
            Self::CardSettings => "Card Settings",
            Self::TransactionDetail => "Transaction",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of an auth gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Session state is not known yet
    Wait,
    Redirect(Route),
    Stay,
}

/// Keeps anonymous users in the auth group and signed-in users out of it
pub struct AuthGate;

impl AuthGate {
    pub fn decide(status: SessionStatus, current: RouteGroup) -> GateDecision {
        match (status, current) {
            (SessionStatus::Unknown, _) => GateDecision::Wait,
            (SessionStatus::Anonymous, RouteGroup::Main) => GateDecision::Redirect(Route::Login),
            (SessionStatus::Authenticated, RouteGroup::Auth) => {
                GateDecision::Redirect(Route::Dashboard)
            }
            _ => GateDecision::Stay,
        }
    }
}

/// A navigation stack above a root screen
#[derive(Debug, Clone)]
pub struct Navigator {
    root: Route,
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(self.root)
    }

    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop one screen; returns false at the root
    pub fn back(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    /// Pop everything above the root
    pub fn dismiss_all(&mut self) {
        self.stack.clear();
    }

    /// Replace the whole stack
    pub fn reset(&mut self, root: Route) {
        self.root = root;
        self.stack.clear();
    }

    /// Apply a gate decision for the current route
    pub fn apply_gate(&mut self, status: SessionStatus) -> GateDecision {
        let decision = AuthGate::decide(status, self.current().group());
        if let GateDecision::Redirect(route) = decision {
            self.reset(route);
        }
        decision
    }
}
