// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composition root for the app-wide context scopes.

use yew::prelude::*;

use crate::components::session_provider::SessionProvider;
use crate::components::toast_provider::ToastProvider;
use crate::constants::DEFAULT_TOAST_DURATION_MS;
use crate::context::SessionState;

#[derive(Properties, PartialEq)]
pub struct AppProvidersProps {
    #[prop_or_default]
    pub children: Html,

    #[prop_or_default]
    pub initial_session: SessionState,

    #[prop_or(DEFAULT_TOAST_DURATION_MS)]
    pub toast_duration_ms: u32,
}

/// Wraps `children` in the session scope and, inside it, the toast scope.
/// The session scope must stay outermost so toast consumers can read it.
#[function_component(AppProviders)]
pub fn app_providers(props: &AppProvidersProps) -> Html {
    html! {
        <SessionProvider initial={props.initial_session.clone()}>
            <ToastProvider duration_ms={props.toast_duration_ms}>
                { props.children.clone() }
            </ToastProvider>
        </SessionProvider>
    }
}
