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

/// One cell of the feature grid: the icon (passed as children) inside a green
/// circular badge, then a title and a short description.
#[component]
pub fn FeatureCard(
    children: Children,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card bg-white border border-gray-200 rounded-lg shadow-sm p-6">
            <div class="bg-green-100 w-12 h-12 rounded-full flex items-center justify-center text-green-700 mb-4">
                <div class="w-6 h-6">{children()}</div>
            </div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-base text-gray-600">{description}</p>
        </div>
    }
}
