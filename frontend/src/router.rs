use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::nav_bar::NavBar, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "gh-pages"))]
    #[at("/")]
    Home,
    #[cfg(feature = "gh-pages")]
    #[at("/portfolio/")]
    Home,

    #[not_found]
    #[cfg(not(feature = "gh-pages"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "gh-pages")]
    #[at("/portfolio/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <>
                <NavBar />
                <pages::home::HomePage />
            </>
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <main class={classes!(
                "min-h-screen",
                "bg-[#0a192f]",
                "text-[#fdfbf7]",
                "font-sans",
                "scroll-smooth",
                "selection:bg-[#fdfbf7]",
                "selection:text-[#0a192f]"
            )}>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}
