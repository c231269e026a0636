use crate::components::SecurityFeature::*;
use leptos::*;

#[component]
pub fn SecuritySection() -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center gap-12">
                    <div class="flex-1">
                        <img
                            src="/images/placeholder.svg"
                            alt="Security Features"
                            width="400"
                            height="500"
                            class="rounded-lg shadow-lg"
                        />
                    </div>
                    <div class="flex-1 space-y-6">
                        <h2 class="text-3xl md:text-4xl font-bold">"Security You Can Trust"</h2>
                        <p class="text-lg text-gray-700">
                            "Our platform is built with multiple layers of protection to ensure safe transactions and secure communications."
                        </p>
                        <ul class="space-y-4">
                            <SecurityFeature
                                title="Protected Payments"
                                description="All money is secured with escrow until delivery is confirmed"
                            />
                            <SecurityFeature
                                title="QR Code Verification"
                                description="Secure package delivery with unique QR codes"
                            />
                            <SecurityFeature
                                title="Data Encryption"
                                description="All personal data and messages are encrypted"
                            />
                            <SecurityFeature
                                title="Fraud Prevention"
                                description="Admin oversight and reporting system to prevent scams"
                            />
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
