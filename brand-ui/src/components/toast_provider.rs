/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Transient notification scope.
//!
//! `ToastProvider` owns the toast queue, hands out a [`ToastCtx`] to its
//! subtree and renders the queued toasts in a viewport after the children.
//! Toasts with a duration remove themselves when their timer fires.

use std::cell::Cell;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::constants::DEFAULT_TOAST_DURATION_MS;
use crate::context::{Toast, ToastCtx, ToastList};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,

    /// Auto-dismiss delay for toasts raised with `ToastCtx::push`.
    /// Zero keeps them until closed.
    #[prop_or(DEFAULT_TOAST_DURATION_MS)]
    pub duration_ms: u32,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0u64));
    let ctx = ToastCtx::new(list, next_id, props.duration_ms);

    let on_dismiss = {
        let ctx = ctx.clone();
        Callback::from(move |id: u64| ctx.dismiss(id))
    };

    html! {
        <ContextProvider<ToastCtx> context={ctx.clone()}>
            <div data-scope="notifications" style="display: contents;">
                { props.children.clone() }
                <div class="toast-viewport" role="status" aria-live="polite">
                    { for ctx.toasts().iter().map(|toast| html! {
                        <ToastItem
                            key={toast.id}
                            toast={toast.clone()}
                            on_dismiss={on_dismiss.clone()}
                        />
                    }) }
                </div>
            </div>
        </ContextProvider<ToastCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.duration_ms, move |duration| {
            let timeout = (*duration).map(|ms| Timeout::new(ms, move || on_dismiss.emit(id)));
            move || drop(timeout)
        });
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", format!("toast-{}", props.toast.kind.as_str()))}>
            <span class="toast-message">{ &props.toast.message }</span>
            <button class="toast-close" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}
