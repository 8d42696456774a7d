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

//! Brand image at one of the fixed size presets.

use yew::prelude::*;

use crate::classes::merge_classes;
use crate::constants::{LOGO_ALT, LOGO_SRC};
use crate::types::LogoSize;

/// Always applied: scale to fit the box without cropping.
pub const BASE_CLASS: &str = "object-contain";
/// Decorative glow added when `show_glow` is set.
pub const GLOW_CLASS: &str = "drop-shadow-[0_0_12px_rgba(139,92,246,0.55)]";

#[derive(Properties, Debug, PartialEq)]
pub struct BrandMarkProps {
    #[prop_or_default]
    pub size: LogoSize,

    #[prop_or(false)]
    pub show_glow: bool,

    /// Extra classes, applied after the built-in ones.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BrandMark)]
pub fn brand_mark(props: &BrandMarkProps) -> Html {
    let (width, height) = props.size.dimensions();
    let caller = props.class.to_string();
    let class = merge_classes([
        Some(BASE_CLASS),
        props.show_glow.then_some(GLOW_CLASS),
        Some(caller.as_str()),
    ]);

    html! {
        <img
            src={LOGO_SRC}
            alt={LOGO_ALT}
            width={width.to_string()}
            height={height.to_string()}
            {class}
            loading="eager"
            fetchpriority="high"
            decoding="async"
        />
    }
}

/// Same props as [`BrandMarkProps`] but with the glow on unless disabled.
#[derive(Properties, Debug, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub size: LogoSize,

    #[prop_or(true)]
    pub show_glow: bool,

    #[prop_or_default]
    pub class: Classes,
}

/// Older name for [`BrandMark`], kept for existing call sites.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <BrandMark
            size={props.size}
            show_glow={props.show_glow}
            class={props.class.clone()}
        />
    }
}
