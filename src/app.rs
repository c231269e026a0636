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

use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - Village Connect");
    provide_meta_context();

    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "MobileApplication",
        "name": "Village Connect",
        "operatingSystem": "Any",
        "applicationCategory": "ShoppingApplication",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        },
        "description": "A secure marketplace and delivery network built for remote communities. Buy, sell, and deliver goods between villages and cities with escrow-protected payments."
    }
    "#;

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/village_connect_website.css"/>
        <Title formatter/>
        <Meta
            name="description"
            content="A secure marketplace and delivery network built for remote communities. Sell farm products to town buyers, order goods from the city, and pay safely with an escrow-backed digital wallet."
        />
        <Meta
            name="keywords"
            content="village marketplace, rural delivery network, escrow payments, digital wallet, local pickup shops, remote communities, buy and sell goods"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="Village Connect"/>
        <Meta property="og:url" content="https://villageconnect.com/"/>
        <Meta property="og:title" content="Village Connect - Connecting Villages to the World"/>
        <Meta property="og:description" content="A secure marketplace and delivery network built for remote communities. Escrow-protected payments, local pickup shops, and delivery between villages and cities."/>
        <Meta property="og:image" content="https://villageconnect.com/images/og-image.png"/>

        // Twitter
        <Meta property="twitter:card" content="summary_large_image"/>
        <Meta property="twitter:site" content="@villageconnect"/>
        <Meta property="twitter:creator" content="@villageconnect"/>
        <Meta property="twitter:url" content="https://villageconnect.com/"/>
        <Meta property="twitter:title" content="Village Connect - Connecting Villages to the World"/>
        <Meta property="twitter:description" content="A secure marketplace and delivery network built for remote communities."/>
        <Meta property="twitter:image" content="https://villageconnect.com/images/og-image.png"/>

        <Router>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
