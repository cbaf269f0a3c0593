use portfolio_shared::{FallbackAction, ImageFallback};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageWithFallbackProps {
    pub src: String,
    pub alt: String,
    pub fallback: ImageFallback,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub loading: Option<AttrValue>,
}

/// Image with a loading shimmer that recovers from a failed load locally:
/// either by swapping to a fallback source once, or by hiding itself.
#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageWithFallbackProps) -> Html {
    let current_src = use_state(|| props.src.clone());
    let image_loaded = use_state(|| false);
    let hidden = use_state(|| false);

    {
        let current_src = current_src.clone();
        let image_loaded = image_loaded.clone();
        let hidden = hidden.clone();
        use_effect_with(props.src.clone(), move |src| {
            current_src.set(src.clone());
            image_loaded.set(false);
            hidden.set(false);
        });
    }

    let on_image_load = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };
    let on_image_error = {
        let current_src = current_src.clone();
        let image_loaded = image_loaded.clone();
        let hidden = hidden.clone();
        let fallback = props.fallback.clone();
        Callback::from(move |_: Event| match fallback.on_error(&current_src) {
            FallbackAction::SwapSource(next) => current_src.set(next),
            FallbackAction::Hide => hidden.set(true),
            FallbackAction::Settle => image_loaded.set(true),
        })
    };

    let container_classes = classes!(
        props.container_class.clone(),
        "relative",
        "overflow-hidden",
        if !*image_loaded && !*hidden { "bg-[#0a192f]" } else { "" }
    );

    let image_classes = classes!(
        props.class.clone(),
        "transition-opacity",
        "duration-500",
        if *image_loaded { "opacity-100" } else { "opacity-0" },
        if *hidden { "hidden" } else { "" }
    );

    html! {
        <div class={container_classes}>
            {
                if !*image_loaded && !*hidden {
                    html! {
                        <div class={classes!(
                            "absolute",
                            "inset-0",
                            "bg-gradient-to-br",
                            "from-[#112240]",
                            "to-[#0a192f]",
                            "animate-pulse",
                            "pointer-events-none"
                        )} />
                    }
                } else {
                    html! {}
                }
            }
            <img
                src={(*current_src).clone()}
                alt={props.alt.clone()}
                class={image_classes}
                loading={props.loading.clone().unwrap_or(AttrValue::from("lazy"))}
                onload={on_image_load}
                onerror={on_image_error}
            />
        </div>
    }
}
