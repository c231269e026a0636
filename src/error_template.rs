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

use crate::errors::SiteError;
use leptos::*;

// Renders the errors collected during rendering, setting the response status
// from the first one when running on the server.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => create_rw_signal(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };

    let errors: Vec<SiteError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<SiteError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        let response = use_context::<leptos_axum::ResponseOptions>();
        if let (Some(response), Some(error)) = (response, errors.first()) {
            response.set_status(error.status_code());
        }
    }

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-gray-50 px-4 text-center">
            <h1 class="text-4xl font-bold text-green-800 mb-4">"Page Not Found"</h1>
            {errors
                .into_iter()
                .map(|error| {
                    view! {
                        <p class="text-lg text-gray-700 mb-8">{error.to_string()}</p>
                    }
                })
                .collect_view()}
            <a
                href="/"
                class="inline-flex items-center justify-center px-6 py-3 rounded-lg bg-green-700 text-white font-medium hover:bg-green-800 transition-colors"
            >
                "Back to Village Connect"
            </a>
        </div>
    }
}
