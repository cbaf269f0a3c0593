use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="max-w-6xl mx-auto px-6 pt-32 pb-24 space-y-6 text-center">
            <h2 class="text-3xl font-bold">{ t::TITLE }</h2>
            <p class="text-[#fdfbf7]/60">{ t::BODY }</p>
            <Link<Route>
                to={Route::Home}
                classes={classes!("inline-block", "underline", "underline-offset-4", "hover:text-[#fdfbf7]/80")}
            >
                { t::BACK_HOME }
            </Link<Route>>
        </div>
    }
}
