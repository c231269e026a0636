use crate::components::sections::CallToAction::*;
use crate::components::sections::Features::*;
use crate::components::sections::Security::*;
use crate::components::HeroHeader::*;
use crate::components::Page::*;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <Page>
            <HeroHeader/>
            <FeaturesSection/>
            <SecuritySection/>
            <CallToActionSection/>
        </Page>
    }
}
