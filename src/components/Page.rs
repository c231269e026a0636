use crate::components::Footer::*;
use leptos::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col min-h-screen overflow-x-hidden bg-white">{children()} <Footer/></div> }
}
