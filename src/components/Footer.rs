use leptos::*;

/// Current calendar year, read from the system clock at render time.
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Village Connect"</h3>
                        <p class="text-gray-400">
                            "Connecting remote communities to the global marketplace."
                        </p>
                    </div>
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            <li>
                                <a href="#" class="text-gray-400 hover:text-white transition-colors">
                                    "About Us"
                                </a>
                            </li>
                            <li>
                                <a href="#" class="text-gray-400 hover:text-white transition-colors">
                                    "How It Works"
                                </a>
                            </li>
                            <li>
                                <a href="#" class="text-gray-400 hover:text-white transition-colors">
                                    "For Businesses"
                                </a>
                            </li>
                            <li>
                                <a href="#" class="text-gray-400 hover:text-white transition-colors">
                                    "Support"
                                </a>
                            </li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-xl font-bold mb-4">"Contact"</h3>
                        <address class="text-gray-400 not-italic">
                            <p>"Email: info@villageconnect.com"</p>
                            <p>"Phone: +234 800 123 4567"</p>
                        </address>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-500">
                    <p>{format!("© {} Village Connect. All rights reserved.", current_year())}</p>
                </div>
            </div>
        </footer>
    }
}
