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

use crate::icons::ShieldIcon;
use leptos::*;

/// One entry of the security list: a fixed shield mark, a bold title, and the
/// supporting copy below it.
#[component]
pub fn SecurityFeature(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <li class="security-feature flex items-start">
            <div class="mr-3 mt-1 w-5 h-5 text-green-600 flex-shrink-0">
                <ShieldIcon/>
            </div>
            <div>
                <h4 class="font-semibold">{title}</h4>
                <p class="text-gray-600">{description}</p>
            </div>
        </li>
    }
}
