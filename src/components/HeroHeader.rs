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

use crate::components::CTAButton::*;
use crate::icons::ArrowRightIcon;
use leptos::*;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <header class="bg-gradient-to-r from-green-600 to-green-800 text-white">
            <div class="container mx-auto px-4 py-16 md:py-24">
                <div class="flex flex-col md:flex-row items-center gap-8">
                    <div class="flex-1 space-y-6">
                        <h1 class="text-4xl md:text-6xl font-bold">
                            "Connecting Villages to the World"
                        </h1>
                        <p class="text-xl md:text-2xl opacity-90">
                            "A secure marketplace and delivery network built for remote communities"
                        </p>
                        <div class="flex flex-wrap gap-4">
                            <CTAButton size=ButtonSize::Large>
                                "Get Started"
                                <span class="ml-2 w-5 h-5">
                                    <ArrowRightIcon/>
                                </span>
                            </CTAButton>
                            <CTAButton variant=ButtonVariant::Outline size=ButtonSize::Large>
                                "Learn More"
                            </CTAButton>
                        </div>
                    </div>
                    <div class="flex-1">
                        <img
                            src="/images/placeholder.svg"
                            alt="Village Connect App"
                            width="500"
                            height="400"
                            class="rounded-lg shadow-xl"
                        />
                    </div>
                </div>
            </div>
        </header>
    }
}
