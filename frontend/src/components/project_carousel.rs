use portfolio_shared::{Direction, ImageFallback, Project};
use yew::prelude::*;

use crate::{
    components::{
        card::{Card, SectionTitle},
        icons::{Icon, IconButton, IconName},
        image_with_fallback::ImageWithFallback,
        reveal::Reveal,
    },
    config::asset_path,
    hooks::use_carousel,
    i18n::{current::projects as t, fill_one, fill_two},
};

#[derive(Properties, PartialEq)]
pub struct ProjectCarouselProps {
    pub projects: Vec<Project>,
}

/// Section heading with prev/next buttons over a snap-scrolling strip of
/// full-width project cards.
#[function_component(ProjectCarousel)]
pub fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let (strip_ref, on_advance) = use_carousel();

    let on_prev = on_advance.reform(|_: MouseEvent| Direction::Left);
    let on_next = on_advance.reform(|_: MouseEvent| Direction::Right);
    let total = props.projects.len();

    html! {
        <>
            <div class="flex justify-between items-end mb-2">
                <SectionTitle title={t::TITLE} />
                <div class="flex gap-3 mb-4">
                    <IconButton icon={IconName::ChevronLeft} aria_label={t::ARIA_PREV} onclick={on_prev} />
                    <IconButton icon={IconName::ChevronRight} aria_label={t::ARIA_NEXT} onclick={on_next} />
                </div>
            </div>

            <div class="relative">
                <div
                    ref={strip_ref}
                    class="flex overflow-x-auto scroll-smooth snap-x snap-mandatory no-scrollbar"
                    style="scrollbar-width: none;"
                    role="region"
                    aria-roledescription="carousel"
                    aria-label={t::ARIA_CAROUSEL}
                >
                    { for props.projects.iter().enumerate().map(|(idx, project)| html! {
                        <div
                            key={idx}
                            class="min-w-full snap-start px-1"
                            role="group"
                            aria-roledescription="slide"
                            aria-label={fill_two(t::SLIDE_TEMPLATE, idx + 1, total)}
                        >
                            <Reveal>
                                <ProjectCard project={project.clone()} />
                            </Reveal>
                        </div>
                    }) }
                </div>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let visual = match project.image.as_deref() {
        Some(image) => html! {
            <ImageWithFallback
                src={asset_path(image)}
                alt={project.title.clone()}
                fallback={ImageFallback::Hide}
                container_class={classes!("max-h-full", "max-w-full", "flex", "items-center", "justify-center")}
                class={classes!(
                    "max-h-full",
                    "max-w-full",
                    "object-contain",
                    "group-hover:scale-105",
                    "transition-transform",
                    "duration-700"
                )}
            />
        },
        None => html! {
            <h4 class="relative z-10 text-3xl font-black text-[#fdfbf7]/5 uppercase tracking-tighter select-none">
                { &project.title }
            </h4>
        },
    };

    html! {
        <a
            href={project.link.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="block group"
            aria-label={fill_one(t::OPEN_TEMPLATE, &project.title)}
        >
            <Card class={classes!(
                "p-0",
                "overflow-hidden",
                "flex",
                "flex-col",
                "md:flex-row",
                "h-auto",
                "md:h-[380px]",
                "group-hover:border-[#fdfbf7]/40"
            )}>
                <div class={classes!(
                    "w-full",
                    "md:w-5/12",
                    "bg-[#0a192f]",
                    "relative",
                    "overflow-hidden",
                    "flex",
                    "items-center",
                    "justify-center",
                    "border-b",
                    "md:border-b-0",
                    "md:border-r",
                    "border-[#233554]",
                    "p-6",
                    "opacity-70",
                    "group-hover:opacity-100",
                    "transition-opacity"
                )}>
                    { visual }
                    <div class="absolute bottom-4 left-4 z-20">
                        <span class="px-3 py-1 bg-[#0a192f]/90 backdrop-blur-md border border-[#233554] rounded-full text-[10px] font-bold uppercase tracking-widest">
                            { &project.year }
                        </span>
                    </div>
                </div>

                <div class="w-full md:w-7/12 p-10 flex flex-col justify-between bg-gradient-to-br from-[#112240] to-[#0a192f]">
                    <div>
                        <div class="flex justify-between items-start mb-4">
                            <h3 class="text-3xl font-bold tracking-tighter text-[#fdfbf7]">{ &project.title }</h3>
                            <Icon
                                name={IconName::ExternalLink}
                                size={20}
                                class={classes!("text-[#fdfbf7]/40", "group-hover:text-[#fdfbf7]")}
                            />
                        </div>
                        <p class="text-[#fdfbf7]/60 leading-relaxed text-base mb-4">{ &project.description }</p>
                    </div>
                    <div class="flex flex-wrap gap-3">
                        { for project.tags.iter().enumerate().map(|(idx, tag)| html! {
                            <span
                                key={idx}
                                class="text-[10px] font-bold text-[#fdfbf7]/40 uppercase tracking-[0.2em] border-b border-[#233554] pb-1"
                            >
                                { tag }
                            </span>
                        }) }
                    </div>
                </div>
            </Card>
        </a>
    }
}
