use leptos::prelude::*;

use crate::content::{ProjectEntry, Section, PORTFOLIO};

use super::{
    homepage::{use_page, SectionHeading},
    reveal::Reveal,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading text="Featured Projects" />
                <div class="grid md:grid-cols-2 gap-8">
                    {PORTFOLIO
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    let page = use_page();
    let id = project.id.as_str();
    let expanded = move || page.state.with(|s| s.is_expanded(id));

    view! {
        <Reveal class="group cursor-pointer">
            <div class=format!(
                "bg-gradient-to-br {} p-0.5 rounded-2xl h-full hover:scale-[1.02] transition",
                project.accent,
            )>
                <div class="bg-slate-900 p-8 rounded-2xl h-full flex flex-col">
                    <div class="flex items-start justify-between mb-4">
                        <div>
                            <h3 class="text-2xl font-bold mb-2">{project.title.clone()}</h3>
                            <p class="text-gray-400 text-sm">{project.subtitle.clone()}</p>
                        </div>
                        <span class="text-cyan-400 text-2xl flex-shrink-0">"</>"</span>
                    </div>

                    <p class="text-gray-300 mb-6 flex-grow">{project.description.clone()}</p>

                    <button
                        class="flex items-center gap-2 text-cyan-400 hover:text-blue-300 hover:translate-x-1 transition mb-6 font-semibold"
                        aria-expanded=move || expanded().to_string()
                        on:click=move |_| page.toggle_project(id)
                    >
                        {move || page.state.with(|s| s.project_toggle_label(id))}
                        <span class="inline-block transition" class=("rotate-180", expanded)>
                            "⌄"
                        </span>
                    </button>

                    <Show when=expanded>
                        <ProjectDetails project=project />
                    </Show>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ProjectDetails(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <div class="space-y-4 pt-6 border-t border-slate-700 fade-in">
            <div>
                <h4 class="font-semibold text-blue-300 mb-3">"Key Features:"</h4>
                <ul class="space-y-2">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex gap-2 text-gray-300 text-sm">
                                    <span class="text-cyan-400">"✓"</span>
                                    <span>{feature.clone()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div>
                <h4 class="font-semibold text-blue-300 mb-3">"Technologies:"</h4>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-slate-800 border border-slate-700 rounded-full text-xs text-gray-300">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
