use portfolio_shared::{section_scroll_top, Section, NAV_OFFSET_PX};
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::i18n::current::nav_bar as t;

/// Smooth-scroll the document so `section` sits just under the nav bar and
/// record the fragment in the address bar. Returns `false` when the section
/// is not in the document, leaving the click to the browser.
fn scroll_to_section(section: Section) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window
        .document()
        .and_then(|document| document.get_element_by_id(section.anchor_id()))
    else {
        return false;
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = section_scroll_top(target.get_bounding_client_rect().top(), scroll_y, NAV_OFFSET_PX);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&section.href()));
    }
    true
}

/// Sticky pill navigation; hidden on small screens.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <nav
            class={classes!(
                "fixed",
                "top-6",
                "left-1/2",
                "-translate-x-1/2",
                "z-50",
                "bg-[#112240]/80",
                "backdrop-blur-md",
                "border",
                "border-[#233554]",
                "px-6",
                "py-3",
                "rounded-full",
                "hidden",
                "md:block"
            )}
            aria-label={t::ARIA_NAV}
        >
            <ul class="flex gap-8 text-sm font-medium text-[#fdfbf7]/60">
                { for Section::NAV.iter().map(|section| {
                    let section = *section;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        if scroll_to_section(section) {
                            e.prevent_default();
                        }
                    });
                    html! {
                        <li key={section.anchor_id()}>
                            <a
                                href={section.href()}
                                onclick={onclick}
                                class="hover:text-[#fdfbf7] transition-colors uppercase tracking-wider"
                            >
                                { section.label() }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
