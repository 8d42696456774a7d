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

use brand_ui::constants::RuntimeConfig;
use brand_ui::context::{use_session, use_toasts, ToastKind};
use brand_ui::types::LogoSize;
use brand_ui::{AppProviders, BrandMark, Logo};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ShowcaseProps {
    logo_size: LogoSize,
}

/// Demo page: the configured logo plus every size preset.
#[function_component(Showcase)]
fn showcase(props: &ShowcaseProps) -> Html {
    let session = use_session();
    let toasts = use_toasts();

    let who = session
        .as_ref()
        .and_then(|s| s.identity().map(|id| id.email.clone()))
        .unwrap_or_else(|| "guest".to_string());

    let on_ping = Callback::from(move |_: MouseEvent| {
        if let Some(toasts) = &toasts {
            toasts.push(ToastKind::Info, "Hello from the toast scope");
        }
    });

    html! {
        <main class="showcase">
            <header class="showcase-header">
                <Logo size={props.logo_size} />
                <span class="showcase-user">{ who }</span>
            </header>
            <section class="showcase-sizes">
                { for LogoSize::ALL.into_iter().map(|size| html! {
                    <figure key={size.as_str()}>
                        <BrandMark {size} />
                        <figcaption>{ size.to_string() }</figcaption>
                    </figure>
                }) }
            </section>
            <button class="showcase-ping" onclick={on_ping}>{"Show toast"}</button>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: RuntimeConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <AppProviders toast_duration_ms={props.config.toast_duration_ms()}>
            <Showcase logo_size={props.config.logo_size()} />
        </AppProviders>
    }
}

fn main() {
    let _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = RuntimeConfig::load_or_default();
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        config.log_level()
    };
    log::set_max_level(level.to_level_filter());
    log::info!("brand-ui starting, log level {level}");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
