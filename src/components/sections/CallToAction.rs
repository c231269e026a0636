use crate::components::CTAButton::*;
use leptos::*;

#[component]
pub fn CallToActionSection() -> impl IntoView {
    view! {
        <section class="py-16 bg-green-700 text-white">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">"Ready to Connect Your Village?"</h2>
                <p class="text-xl mb-8 max-w-2xl mx-auto">
                    "Join thousands of users already buying, selling, and delivering across remote communities."
                </p>
                <CTAButton size=ButtonSize::Large>
                    "Download the App"
                </CTAButton>
            </div>
        </section>
    }
}
