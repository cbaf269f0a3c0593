use portfolio_shared::{
    About, Connect, Experience, ImageFallback, Owner, Portfolio, Section, SkillGroup,
};
use web_sys::console;
use yew::prelude::*;

use crate::{
    components::{
        card::{Card, SectionTitle},
        error_banner::ErrorBanner,
        icons::{Icon, IconName},
        image_with_fallback::ImageWithFallback,
        project_carousel::ProjectCarousel,
        reveal::{Reveal, RevealFrom},
    },
    config::asset_path,
    i18n::{
        current::{
            about as about_text, connect as connect_text, experience as experience_text,
            hero as hero_text, skills as skills_text,
        },
        fill_one,
    },
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let portfolio = use_memo((), |_| {
        let loaded = Portfolio::embedded();
        if let Err(e) = &loaded {
            console::error_1(&format!("Failed to load portfolio content: {}", e).into());
        }
        loaded
    });

    let portfolio = match &*portfolio {
        Ok(portfolio) => portfolio.clone(),
        Err(e) => {
            return html! {
                <div class="max-w-6xl mx-auto px-6 pt-32 flex justify-center">
                    <ErrorBanner message={e.to_string()} />
                </div>
            };
        },
    };

    html! {
        <>
            <div class="max-w-6xl mx-auto px-6 pt-32 pb-24 space-y-16">
                <HeroSection owner={portfolio.owner.clone()} />
                <AboutSection about={portfolio.about.clone()} owner={portfolio.owner.clone()} />
                <ExperienceSection entries={portfolio.experience.clone()} />
                <section id={Section::Projects.anchor_id()} class="scroll-mt-32">
                    <ProjectCarousel projects={portfolio.projects.clone()} />
                    <SkillsGrid groups={portfolio.skills.clone()} />
                </section>
                <ConnectSection connect={portfolio.connect.clone()} />
            </div>

            <footer class="text-center pb-12 text-[#fdfbf7]/20 text-[10px] font-mono uppercase tracking-[0.3em]">
                { &portfolio.footer }
            </footer>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    owner: Owner,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    let owner = &props.owner;

    html! {
        <section id={Section::Hero.anchor_id()} class="space-y-6 scroll-mt-32">
            <Reveal class={classes!("inline-block")}>
                <div class="inline-block px-3 py-1 rounded-full bg-[#fdfbf7]/10 border border-[#fdfbf7]/20 text-[#fdfbf7] text-xs font-bold uppercase tracking-widest mb-4">
                    { &owner.tagline }
                </div>
            </Reveal>
            <Reveal delay_ms={100}>
                <h1 class="text-5xl md:text-7xl font-bold tracking-tighter leading-tight">
                    { hero_text::GREETING }{ " " }
                    <span class="text-[#fdfbf7]/40 text-4xl md:text-6xl block mt-2">
                        { fill_one(hero_text::NAME_TEMPLATE, &owner.greeting_name) }
                    </span>
                </h1>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AboutProps {
    about: About,
    owner: Owner,
}

#[function_component(AboutSection)]
fn about_section(props: &AboutProps) -> Html {
    let AboutProps {
        about,
        owner,
    } = props;

    html! {
        <section id={Section::About.anchor_id()} class="scroll-mt-32">
            <SectionTitle title={about_text::TITLE} />
            <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                <Card class={classes!("lg:col-span-3", "flex", "flex-col", "justify-between", "space-y-6")}>
                    <div>
                        <h3 class="font-bold text-sm uppercase tracking-widest text-[#fdfbf7]/60 mb-6">
                            { about_text::DESCRIPTION }
                        </h3>
                        <div class="text-[#fdfbf7]/80 leading-relaxed text-lg space-y-6">
                            { for about.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
                        </div>
                    </div>

                    if !about.competitions.is_empty() {
                        <div class="pt-8 border-t border-[#233554]">
                            <h3 class="font-bold text-sm uppercase tracking-widest text-[#fdfbf7]/60 mb-6">
                                { about_text::COMPETITIONS }
                            </h3>
                            <div class="text-[#fdfbf7]/80 leading-relaxed text-lg space-y-1">
                                { for about.competitions.iter().map(|c| html! { <p>{ c }</p> }) }
                            </div>
                        </div>
                    }
                </Card>

                <ImageWithFallback
                    src={asset_path(&owner.photo)}
                    alt={owner.name.clone()}
                    fallback={ImageFallback::Replace(owner.fallback_avatar())}
                    loading={AttrValue::from("eager")}
                    container_class={classes!(
                        "w-full",
                        "h-full",
                        "min-h-[250px]",
                        "bg-[#112240]",
                        "border",
                        "border-[#233554]",
                        "rounded-3xl",
                        "flex",
                        "items-center",
                        "justify-center"
                    )}
                    class={classes!("w-full", "h-full", "object-cover")}
                />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceProps {
    entries: Vec<Experience>,
}

#[function_component(ExperienceSection)]
fn experience_section(props: &ExperienceProps) -> Html {
    html! {
        <section id={Section::Experience.anchor_id()} class="scroll-mt-32">
            <SectionTitle title={experience_text::TITLE} />
            <div class="relative border-l-2 border-[#233554] ml-3 space-y-12 pb-4">
                { for props.entries.iter().enumerate().map(|(idx, exp)| html! {
                    <Reveal key={idx} from={RevealFrom::Left} class={classes!("relative", "pl-10")}>
                        <div
                            class="absolute -left-[11px] top-1.5 w-5 h-5 rounded-full bg-[#112240] border-4 border-[#0a192f] shadow-[0_0_0_2px_#233554]"
                            aria-hidden="true"
                        />
                        <h3 class="text-2xl font-bold text-[#fdfbf7] mb-1 uppercase tracking-tight">{ &exp.company }</h3>
                        <div class="text-[#fdfbf7]/60 font-medium text-sm mb-3">
                            { format!("{} | {}", exp.role, exp.date) }
                        </div>
                        <p class="text-[#fdfbf7]/80 leading-relaxed text-sm max-w-2xl">{ &exp.description }</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillsProps {
    groups: Vec<SkillGroup>,
}

#[function_component(SkillsGrid)]
fn skills_grid(props: &SkillsProps) -> Html {
    html! {
        <Card class={classes!("mt-12")}>
            <h3 class="font-bold mb-8 text-sm uppercase tracking-widest text-[#fdfbf7]/60 flex items-center gap-2">
                <Icon name={IconName::Code2} size={16} />
                { skills_text::TITLE }
            </h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                { for props.groups.iter().enumerate().map(|(idx, group)| html! {
                    <div key={idx} class="space-y-4">
                        <h4 class="text-[#fdfbf7]/80 text-xs font-bold uppercase tracking-widest flex items-center gap-2">
                            <Icon name={IconName::from(group.icon)} size={14} class={classes!(group.accent.clone())} />
                            { &group.title }
                        </h4>
                        <div class="flex flex-wrap gap-2">
                            { for group.items.iter().enumerate().map(|(idx, skill)| html! {
                                <span
                                    key={idx}
                                    class="text-xs px-3 py-1.5 bg-[#0a192f] rounded-lg border border-[#233554] font-mono text-[#fdfbf7]/80 uppercase"
                                >
                                    { skill }
                                </span>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
struct ConnectProps {
    connect: Connect,
}

#[function_component(ConnectSection)]
fn connect_section(props: &ConnectProps) -> Html {
    let connect = &props.connect;

    html! {
        <section id={Section::Connect.anchor_id()} class="pb-20 scroll-mt-32">
            <SectionTitle title={connect_text::TITLE} />
            <Card class={classes!(
                "flex",
                "flex-col",
                "items-center",
                "text-center",
                "space-y-10",
                "py-16",
                "bg-gradient-to-b",
                "from-[#112240]",
                "to-transparent"
            )}>
                <div class="space-y-4 max-w-lg">
                    <h3 class="text-3xl font-bold text-[#fdfbf7] tracking-tight">{ &connect.heading }</h3>
                    <p class="text-sm text-[#fdfbf7]/50 leading-relaxed font-medium">{ &connect.blurb }</p>
                </div>
                <div class="flex gap-6 justify-center">
                    { for connect.links.iter().enumerate().map(|(idx, link)| {
                        let (target, rel) = if link.opens_new_tab() {
                            (Some("_blank"), Some("noopener noreferrer"))
                        } else {
                            (None, None)
                        };
                        html! {
                            <a
                                key={idx}
                                href={link.href.clone()}
                                target={target}
                                rel={rel}
                                class="p-5 bg-[#0a192f] rounded-2xl border border-[#233554] hover:border-[#fdfbf7]/50 transition-all group"
                                aria-label={link.label.clone()}
                            >
                                <Icon
                                    name={IconName::from(link.kind)}
                                    class={classes!("text-[#fdfbf7]/60", "group-hover:text-[#fdfbf7]")}
                                />
                            </a>
                        }
                    }) }
                </div>
            </Card>
        </section>
    }
}
