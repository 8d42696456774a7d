// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::context::{SessionCtx, SessionState};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,

    /// Session to start from before anything signs the user in or out.
    #[prop_or_default]
    pub initial: SessionState,
}

/// Makes the current [`SessionState`] available to everything below it.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let initial = props.initial.clone();
    let session: SessionCtx = use_state(move || initial);

    html! {
        <ContextProvider<SessionCtx> context={session}>
            <div data-scope="session" style="display: contents;">
                { props.children.clone() }
            </div>
        </ContextProvider<SessionCtx>>
    }
}
