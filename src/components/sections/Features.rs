use crate::components::FeatureCard::*;
use crate::icons::*;
use leptos::*;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"Main Features"</h2>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <FeatureCard
                        title="Create Your Account"
                        description="Sign up with phone, email, or social media. Add your details and verify your business if needed."
                    >
                        <UsersIcon/>
                    </FeatureCard>
                    <FeatureCard
                        title="Send & Receive Goods"
                        description="Sell farm products to town buyers or order goods from the city with live tracking."
                    >
                        <ShoppingBagIcon/>
                    </FeatureCard>
                    <FeatureCard
                        title="Secure Digital Wallet"
                        description="Load money, pay for items and delivery. All funds are held safely until delivery confirmation."
                    >
                        <WalletIcon/>
                    </FeatureCard>
                    <FeatureCard
                        title="Local Pickup Shops"
                        description="Village shopkeepers can register as pickup centers, earning commission for helping with deliveries."
                    >
                        <TruckIcon/>
                    </FeatureCard>
                    <FeatureCard
                        title="Messaging and Chat"
                        description="Chat privately with sellers, buyers, or delivery drivers with admin oversight for security."
                    >
                        <MessageCircleIcon/>
                    </FeatureCard>
                    <FeatureCard
                        title="Multi-Language Support"
                        description="Use the app in English, Hausa, Yoruba, Igbo, or French with auto-translation."
                    >
                        <GlobeIcon/>
                    </FeatureCard>
                </div>
            </div>
        </section>
    }
}
