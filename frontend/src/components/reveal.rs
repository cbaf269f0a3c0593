use yew::prelude::*;

use crate::hooks::use_reveal_once;

/// Where revealed content slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_reveal_once(node_ref.clone());

    let hidden_offset = match props.from {
        RevealFrom::Below => "translate-y-5",
        RevealFrom::Left => "-translate-x-5",
    };

    let class = classes!(
        "transition-all",
        "duration-700",
        if revealed {
            "opacity-100 translate-x-0 translate-y-0"
        } else {
            "opacity-0"
        },
        (!revealed).then_some(hidden_offset),
        props.class.clone()
    );

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={node_ref} class={class} style={style}>
            { props.children.clone() }
        </div>
    }
}
