use portfolio_shared::{ContactKind, SkillIcon};
use yew::prelude::*;

/// Lucide Icons - stroke icon set
/// SVG paths come from <https://lucide.dev>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ChevronLeft,
    ChevronRight,
    ExternalLink,

    // Contact
    Linkedin,
    Mail,
    Github,

    // Skills
    Code2,
    Layout,
    Settings,
}

impl IconName {
    /// SVG path data for the icon
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::ExternalLink => {
                "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"
            },

            IconName::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 \
                 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z"
            },
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 \
                 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"
            },
            IconName::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
                 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 \
                 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 \
                 1.85v4M9 18c-4.51 2-5-2-7-2"
            },

            IconName::Code2 => "m18 16 4-4-4-4M6 8l-4 4 4 4M14.5 4l-5 16",
            IconName::Layout => {
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM3 9h18M9 21V9"
            },
            IconName::Settings => {
                "M20 7h-9M14 17H5M17 14a3 3 0 1 0 0 6 3 3 0 0 0 0-6zM7 4a3 3 0 1 0 0 6 3 3 0 0 0 \
                 0-6z"
            },
        }
    }
}

impl From<SkillIcon> for IconName {
    fn from(icon: SkillIcon) -> Self {
        match icon {
            SkillIcon::Code => IconName::Code2,
            SkillIcon::Layout => IconName::Layout,
            SkillIcon::Settings => IconName::Settings,
        }
    }
}

impl From<ContactKind> for IconName {
    fn from(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Linkedin => IconName::Linkedin,
            ContactKind::Email => IconName::Mail,
            ContactKind::Github => IconName::Github,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                "transition-colors",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Round icon button
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,

    #[prop_or(20)]
    pub size: u32,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub aria_label: AttrValue,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let IconButtonProps {
        icon,
        size,
        onclick,
        aria_label,
        class,
    } = props;

    let button_class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "p-3",
        "rounded-full",
        "border",
        "border-[#233554]",
        "bg-[#112240]",
        "text-[#fdfbf7]",
        "transition-colors",
        "hover:bg-[#233554]",
        "focus-visible:outline-none",
        "focus-visible:ring-2",
        "focus-visible:ring-[#fdfbf7]/50",
        class.clone()
    );

    html! {
        <button
            class={button_class}
            onclick={onclick}
            aria-label={aria_label.clone()}
            title={aria_label.clone()}
            type="button"
        >
            <Icon name={*icon} size={*size} />
        </button>
    }
}
