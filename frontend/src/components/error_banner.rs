use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

/// Persistent alert shown in place of the page when content fails to load.
/// Dismissing only hides the banner; there is nothing to retry.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let dismissed = use_state(|| false);

    {
        let dismissed = dismissed.clone();
        use_effect_with(props.message.clone(), move |_| dismissed.set(false));
    }

    if *dismissed || props.message.trim().is_empty() {
        return Html::default();
    }

    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };

    html! {
        <div
            class={classes!(
                "flex",
                "items-start",
                "gap-3",
                "w-full",
                "max-w-2xl",
                "rounded-2xl",
                "px-5",
                "py-4",
                "text-sm",
                "shadow-xl",
                "bg-[#112240]",
                "border",
                "border-[#233554]",
                "text-[#fdfbf7]"
            )}
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{ "⚠️" }</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ t::TITLE }</p>
                <p class="font-mono text-[#fdfbf7]/70 break-words">{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="ml-4 inline-flex h-8 w-8 items-center justify-center rounded-full text-lg transition-colors hover:bg-white/15"
                aria-label={t::CLOSE_ARIA}
                onclick={on_dismiss}
            >
                { "×" }
            </button>
        </div>
    }
}
