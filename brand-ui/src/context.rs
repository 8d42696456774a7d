// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! Shared state that needs to be reachable from anywhere in the component
//! tree: the signed-in identity and the toast queue. Both are exposed through
//! Yew's `ContextProvider` by the components in `components::providers`.

use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

// -----------------------------------------------------------------------------
// Session Context
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserIdentity {
    pub email: String,
    pub name: Option<String>,
}

/// Who is using the app right now.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Identity has not been resolved yet.
    Loading,
    #[default]
    Anonymous,
    Authenticated(UserIdentity),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// `UseStateHandle<SessionState>` allows both read-only access (via deref)
/// and replacing the session with `.set(..)` after sign-in or sign-out.
pub type SessionCtx = UseStateHandle<SessionState>;

/// The session scope, or `None` when called outside `SessionProvider`.
#[hook]
pub fn use_session() -> Option<SessionCtx> {
    use_context::<SessionCtx>()
}

// -----------------------------------------------------------------------------
// Toast Context
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Suffix used for the `toast-{kind}` CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// `None` keeps the toast until it is dismissed.
    pub duration_ms: Option<u32>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
    Clear,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(toast) => {
                let mut toasts = self.toasts.clone();
                toasts.push(toast);
                Rc::new(ToastList { toasts })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let toasts = self.toasts.iter().filter(|t| t.id != id).cloned().collect();
                Rc::new(ToastList { toasts })
            }
            ToastAction::Clear => {
                if self.toasts.is_empty() {
                    return self;
                }
                Rc::new(ToastList::default())
            }
        }
    }
}

/// Handle for raising and dismissing toasts.
#[derive(Clone)]
pub struct ToastCtx {
    list: UseReducerHandle<ToastList>,
    next_id: Rc<Cell<u64>>,
    default_duration_ms: u32,
}

impl PartialEq for ToastCtx {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
            && Rc::ptr_eq(&self.next_id, &other.next_id)
            && self.default_duration_ms == other.default_duration_ms
    }
}

impl ToastCtx {
    pub fn new(
        list: UseReducerHandle<ToastList>,
        next_id: Rc<Cell<u64>>,
        default_duration_ms: u32,
    ) -> Self {
        Self {
            list,
            next_id,
            default_duration_ms,
        }
    }

    /// Queue a toast with the provider's default duration and return its id.
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let duration = (self.default_duration_ms > 0).then_some(self.default_duration_ms);
        self.push_with_duration(kind, message, duration)
    }

    /// Queue a toast with an explicit duration; `None` makes it sticky.
    pub fn push_with_duration(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        duration_ms: Option<u32>,
    ) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let toast = Toast {
            id,
            kind,
            message: message.into(),
            duration_ms,
        };
        log::debug!("toast {id} ({}) queued", kind.as_str());
        self.list.dispatch(ToastAction::Push(toast));
        id
    }

    pub fn dismiss(&self, id: u64) {
        log::debug!("toast {id} dismissed");
        self.list.dispatch(ToastAction::Dismiss(id));
    }

    pub fn clear(&self) {
        self.list.dispatch(ToastAction::Clear);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.list.toasts
    }
}

/// The toast scope, or `None` when called outside `ToastProvider`.
#[hook]
pub fn use_toasts() -> Option<ToastCtx> {
    use_context::<ToastCtx>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            kind: ToastKind::Info,
            message: format!("toast {id}"),
            duration_ms: None,
        }
    }

    fn ids(list: &ToastList) -> Vec<u64> {
        list.toasts.iter().map(|t| t.id).collect()
    }

    #[test]
    fn push_appends_in_order() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Push(toast(2)));
        assert_eq!(ids(&list), vec![1, 2]);
    }

    #[test]
    fn dismiss_removes_only_matching() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Push(toast(2)))
            .reduce(ToastAction::Dismiss(1));
        assert_eq!(ids(&list), vec![2]);
    }

    #[test]
    fn dismiss_unknown_keeps_same_state() {
        let list = Rc::new(ToastList::default()).reduce(ToastAction::Push(toast(7)));
        let after = list.clone().reduce(ToastAction::Dismiss(99));
        assert!(Rc::ptr_eq(&list, &after));
    }

    #[test]
    fn clear_empties_list() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1)))
            .reduce(ToastAction::Clear);
        assert!(list.toasts.is_empty());
    }

    #[test]
    fn session_state_accessors() {
        let anon = SessionState::default();
        assert_eq!(anon, SessionState::Anonymous);
        assert!(!anon.is_authenticated());
        assert!(anon.identity().is_none());

        let user = UserIdentity {
            email: "alice@example.com".into(),
            name: Some("Alice".into()),
        };
        let signed_in = SessionState::Authenticated(user.clone());
        assert!(signed_in.is_authenticated());
        assert_eq!(signed_in.identity(), Some(&user));
        assert!(!SessionState::Loading.is_authenticated());
    }

    #[test]
    fn toast_kind_css_suffix() {
        assert_eq!(ToastKind::Error.as_str(), "error");
        assert_eq!(ToastKind::Success.as_str(), "success");
    }
}
