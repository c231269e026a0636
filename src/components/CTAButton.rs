/*
 * Copyright 2025 Village Connect
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use leptos::*;

/// Button variants for the green hero/CTA backgrounds
#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    /// White button with green text, the primary action on colored sections
    Light,
    /// Transparent button with a white border
    Outline,
}

#[derive(Clone, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Light)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = String::new())] class: String,
    #[prop(default = None)] href: Option<String>,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center font-medium transition-colors duration-200 ease-out focus:outline-none focus:ring-2 focus:ring-offset-2";

    let variant_classes = match variant {
        ButtonVariant::Light => "bg-white text-green-800 hover:bg-gray-100 focus:ring-white/40 shadow-sm",
        ButtonVariant::Outline => "border border-white text-white hover:bg-white/10 focus:ring-white/40",
    };

    let size_classes = match size {
        ButtonSize::Medium => "px-6 py-3 text-base rounded-lg",
        ButtonSize::Large => "px-8 py-4 text-lg rounded-lg",
    };

    let combined_class = format!("{} {} {} {}", base_classes, variant_classes, size_classes, class);

    match href {
        Some(href) => view! {
            <a href=href class=combined_class>
                {children()}
            </a>
        }
        .into_view(),
        None => view! {
            <button class=combined_class>
                {children()}
            </button>
        }
        .into_view(),
    }
}
