use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Rounded panel used by every section.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!(
            "bg-[#112240]",
            "border",
            "border-[#233554]",
            "rounded-3xl",
            "p-6",
            "hover:border-[#fdfbf7]/30",
            "transition-all",
            props.class.clone()
        )}>
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <h2 class="text-3xl font-bold mb-6 flex items-center gap-3 text-[#fdfbf7]">
            <span class="h-8 w-1 bg-[#fdfbf7]/30 rounded-full" aria-hidden="true" />
            { props.title.clone() }
        </h2>
    }
}
