use leptos::prelude::*;

use crate::content::TECH_STACK;
use crate::nav::Section;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-24 px-6 bg-white/[0.02]">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl lg:text-4xl font-bold mb-12 text-center">"Technical Expertise"</h2>
                <div class="grid gap-8 md:grid-cols-2">
                    {TECH_STACK
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="rounded-lg border border-white/10 p-6">
                                    <h3 class="text-lg font-semibold text-teal-300 mb-4">
                                        {category.category}
                                    </h3>
                                    <ul class="space-y-4">
                                        {category
                                            .technologies
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <li class="flex items-start gap-3">
                                                        <span class="text-2xl" aria-hidden="true">{tech.icon}</span>
                                                        <div>
                                                            <p class="font-medium">{tech.name}</p>
                                                            <p class="text-sm text-white/60">{tech.description}</p>
                                                        </div>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
