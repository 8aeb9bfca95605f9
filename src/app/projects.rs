use leptos::{either::Either, prelude::*};

use crate::content::{tech_label, tech_url, Project, PROJECTS};
use crate::nav::Section;

use super::header::project_anchor;

const BADGE_CLASS: &str = "rounded-full border border-teal-300/30 bg-teal-300/10 px-3 py-1 text-xs text-teal-200";

#[component]
fn TechBadge(name: &'static str) -> impl IntoView {
    let label = tech_label(name);
    match tech_url(name) {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=format!("{BADGE_CLASS} hover:bg-teal-300/20")
            >
                {label}
            </a>
        }),
        None => Either::Right(view! { <span class=BADGE_CLASS>{label}</span> }),
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article
            id=project_anchor(project.id)
            class="flex flex-col rounded-lg border border-white/10 bg-white/[0.03] p-6 scroll-mt-24"
        >
            <div class="flex flex-wrap items-center justify-between gap-2 mb-4 text-xs">
                <span class="uppercase tracking-wider text-teal-300">{project.category}</span>
                <span class="rounded bg-white/10 px-2 py-1 text-white/70">{project.status}</span>
            </div>
            <h3 class="text-xl font-semibold mb-1">{project.title}</h3>
            <p class="text-sm text-white/50 mb-4">{project.duration}</p>
            <p class="text-white/70 leading-relaxed mb-4">{project.description}</p>
            <ul class="list-disc list-inside space-y-1 text-sm text-white/60 mb-6">
                {project.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>
            <div class="mt-auto flex flex-wrap gap-2">
                {project
                    .tech_stack
                    .iter()
                    .map(|name| view! { <TechBadge name=*name /> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl lg:text-4xl font-bold mb-12 text-center">"Featured Projects"</h2>
                <div class="grid gap-8 md:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
