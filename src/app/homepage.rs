use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::PERSONAL_INFO;
use crate::nav::Section;

use super::background::FluidBackground;
use super::contact::ContactSection;
use super::header::scroll_to_id;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=PERSONAL_INFO.title />
        <Hero />
        <About />
        <SkillsSection />
        <ProjectsSection />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let jump = |section: Section| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            scroll_to_id(section.id());
        }
    };
    view! {
        <section id=Section::Home.id() class="relative min-h-screen flex items-center overflow-hidden">
            <FluidBackground />
            <div class="absolute inset-0 z-10 bg-gradient-to-b from-black/30 via-transparent to-black pointer-events-none" />
            <div class="relative z-20 max-w-6xl mx-auto px-6 py-32">
                <p class="text-teal-300 tracking-widest uppercase text-sm mb-4">"Hello, I'm"</p>
                <h1 class="text-5xl lg:text-7xl font-bold mb-6">{PERSONAL_INFO.name}</h1>
                <h2 class="text-xl lg:text-2xl text-white/80 mb-6">{PERSONAL_INFO.title}</h2>
                <p class="max-w-2xl text-white/60 leading-relaxed mb-10">{PERSONAL_INFO.tagline}</p>
                <div class="flex flex-wrap gap-4">
                    <a
                        href=Section::Projects.href()
                        class="rounded-md bg-teal-400 px-8 py-3 font-semibold text-black hover:bg-teal-300 transition"
                        on:click=jump(Section::Projects)
                    >
                        "View My Work"
                    </a>
                    <a
                        href=Section::Contact.href()
                        class="rounded-md border border-white/30 px-8 py-3 font-semibold hover:border-teal-300 hover:text-teal-300 transition"
                        on:click=jump(Section::Contact)
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let stats = [
        (PERSONAL_INFO.experience, "Experience"),
        (PERSONAL_INFO.projects_completed, "Projects Completed"),
        (PERSONAL_INFO.clients_satisfied, "Clients Satisfied"),
    ];
    view! {
        <section id=Section::About.id() class="py-24 px-6">
            <div class="max-w-6xl mx-auto grid gap-12 lg:grid-cols-2 items-center">
                <div>
                    <h2 class="text-3xl lg:text-4xl font-bold mb-6">"About Me"</h2>
                    <p class="text-white/70 leading-relaxed mb-6">{PERSONAL_INFO.bio}</p>
                    <p class="text-white/50 text-sm">
                        {PERSONAL_INFO.location} " · " {PERSONAL_INFO.availability}
                    </p>
                </div>
                <div class="grid grid-cols-3 gap-4">
                    {stats
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="rounded-lg border border-white/10 bg-white/5 p-6 text-center">
                                    <div class="text-3xl font-bold text-teal-300">{value}</div>
                                    <div class="mt-2 text-sm text-white/60">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
