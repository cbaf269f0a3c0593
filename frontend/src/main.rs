//! Single-page portfolio rendered with Yew.

mod components;
mod config;
mod hooks;
mod i18n;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
