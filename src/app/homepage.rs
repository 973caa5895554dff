use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::use_window_scroll;

use crate::{
    contact::{DraftError, Field},
    content::{copyright_year, Section, PORTFOLIO},
    view::{ViewSession, ViewState},
};

use super::{
    contact::{ContactSection, LinkGlyph},
    header::NavBar,
    projects::ProjectsSection,
    reveal::Reveal,
    scheduler::BrowserScheduler,
};

type PageSession = ViewSession<RwSignal<ViewState>, BrowserScheduler>;

/// Shared by every component of the page. Reads go through `state`,
/// writes through the session.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub state: RwSignal<ViewState>,
    session: StoredValue<PageSession>,
}

impl PageContext {
    pub fn toggle_menu(&self) {
        self.session.with_value(|s| s.toggle_menu());
    }

    pub fn select_section(&self, section: Section) {
        self.session.with_value(|s| s.select_section(section));
    }

    pub fn toggle_project(&self, id: &str) {
        self.session.with_value(|s| s.toggle_project(id));
    }

    pub fn update_field(&self, field: Field, value: String) {
        self.session.with_value(|s| s.update_field(field, value));
    }

    pub fn submit(&self) -> Result<(), DraftError> {
        self.session
            .try_update_value(|s| s.submit())
            .unwrap_or(Ok(()))
    }
}

pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());
    let session = StoredValue::new(ViewSession::new(state, BrowserScheduler, &PORTFOLIO));
    let page = PageContext { state, session };
    provide_context(page);

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let offset = scroll_y.get();
        session.try_with_value(|s| s.record_scroll(offset));
    });

    // dropping the session cancels a pending form reset
    on_cleanup(move || session.dispose());

    view! {
        <Title text=PORTFOLIO.profile.name.clone() />
        <div class="min-h-screen bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 text-white overflow-hidden">
            <Backdrop />
            <NavBar />
            <Hero />
            <About />
            <Skills />
            <Experience />
            <ProjectsSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="blob blob-drift absolute top-0 left-1/4 w-96 h-96 bg-blue-500"></div>
            <div class="blob blob-drift-reverse absolute top-1/2 right-1/4 w-96 h-96 bg-cyan-500"></div>
        </div>
    }
}

#[component]
pub fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <Reveal>
            <h2 class="text-5xl font-bold mb-16 text-center bg-gradient-to-r from-blue-400 to-cyan-400 bg-clip-text text-transparent">
                {text}
            </h2>
        </Reveal>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    view! {
        <section
            id=Section::Home.id()
            class="relative pt-32 pb-20 px-4 sm:px-6 lg:px-8 min-h-screen flex items-center"
        >
            <div class="max-w-6xl mx-auto w-full text-center">
                <div class="mb-8 flex justify-center rise-in">
                    <div class="w-32 h-32 bg-gradient-to-br from-blue-400 via-cyan-400 to-blue-600 rounded-full flex items-center justify-center text-5xl font-bold shadow-2xl hover:scale-110 hover:rotate-6 transition">
                        {profile.initials.clone()}
                    </div>
                </div>
                <h1 class="text-6xl sm:text-7xl font-bold mb-4 bg-gradient-to-r from-blue-300 via-cyan-300 to-blue-300 bg-clip-text text-transparent rise-in">
                    {profile.name.clone()}
                </h1>
                <p class="text-2xl text-cyan-400 mb-4 font-semibold rise-in">
                    {profile.headline.clone()}
                </p>
                <p class="text-lg text-gray-400 max-w-2xl mx-auto mb-12 leading-relaxed rise-in">
                    {profile.summary.clone()}
                </p>
                <div class="flex flex-wrap justify-center gap-4 mb-12 rise-in">
                    <a
                        href=Section::Projects.href()
                        class="px-8 py-3 bg-gradient-to-r from-blue-500 to-cyan-500 rounded-lg font-semibold hover:shadow-lg hover:shadow-cyan-500/50 transition"
                    >
                        "View My Work →"
                    </a>
                    <a
                        href=Section::Contact.href()
                        class="px-8 py-3 border-2 border-cyan-400 text-cyan-400 rounded-lg font-semibold hover:bg-cyan-400 hover:text-slate-950 transition"
                    >
                        "Get In Touch"
                    </a>
                </div>
                <div class="flex justify-center gap-6 rise-in">
                    {PORTFOLIO
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    target=link.opens_new_tab().then_some("_blank")
                                    rel="noopener noreferrer"
                                    aria-label=link.label.clone()
                                    class="p-3 w-12 h-12 flex items-center justify-center bg-slate-800 hover:bg-gradient-to-r hover:from-blue-500 hover:to-cyan-500 rounded-full transition"
                                >
                                    <LinkGlyph kind=link.kind />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 text-cyan-400 text-3xl bob">
                "⌄"
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    view! {
        <section id=Section::About.id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading text="About Me" />
                <div class="grid md:grid-cols-2 gap-12">
                    <Reveal class="slide-from-left">
                        <div class="bg-gradient-to-br from-slate-800 to-slate-900 p-8 rounded-2xl border border-slate-700 hover:border-cyan-500 transition">
                            <h3 class="text-2xl font-bold text-cyan-400 mb-6">
                                "Professional Profile"
                            </h3>
                            {profile
                                .about
                                .iter()
                                .enumerate()
                                .map(|(i, p)| {
                                    let class = if i == 0 {
                                        "text-gray-300 leading-relaxed mb-4"
                                    } else {
                                        "text-gray-400 leading-relaxed"
                                    };
                                    view! { <p class=class>{p.clone()}</p> }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal class="slide-from-right">
                        <div class="space-y-6">
                            {PORTFOLIO
                                .education
                                .iter()
                                .map(|edu| {
                                    view! {
                                        <div class="bg-gradient-to-r from-blue-500 to-cyan-500 p-0.5 rounded-xl hover:scale-[1.02] transition">
                                            <div class="bg-slate-900 p-6 rounded-xl">
                                                <h4 class="font-bold text-lg mb-2">{edu.title.clone()}</h4>
                                                <p class="text-gray-400 text-sm mb-1">
                                                    {edu.organization.clone()}
                                                </p>
                                                <div class="flex justify-between text-sm text-gray-500">
                                                    <span>{edu.period.clone()}</span>
                                                    <span>{edu.score.clone()}</span>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading text="Technical Skills" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PORTFOLIO
                        .skills
                        .iter()
                        .map(|group| {
                            view! {
                                <Reveal>
                                    <div class="bg-gradient-to-br from-slate-800 to-slate-900 p-6 rounded-xl border border-slate-700 hover:border-cyan-500 hover:-translate-y-1 transition group h-full">
                                        <h3 class="text-lg font-bold text-cyan-400 mb-4 group-hover:text-blue-300 transition">
                                            {group.category.clone()}
                                        </h3>
                                        <div class="flex flex-wrap gap-2">
                                            {group
                                                .items
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="px-3 py-1 bg-gradient-to-r from-blue-600 to-cyan-600 text-white rounded-full text-sm font-medium">
                                                            {skill.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-6xl mx-auto">
                <SectionHeading text="Professional Experience" />
                {PORTFOLIO
                    .experience
                    .iter()
                    .map(|job| {
                        view! {
                            <Reveal>
                                <div class="bg-gradient-to-br from-slate-800 to-slate-900 p-8 rounded-2xl border border-slate-700 hover:border-cyan-500 transition mb-8">
                                    <div class="flex items-start justify-between mb-6 flex-wrap gap-4">
                                        <div>
                                            <h3 class="text-2xl font-bold text-cyan-400 mb-2">
                                                {job.role.clone()}
                                            </h3>
                                            <p class="text-gray-400 text-lg">{job.company.clone()}</p>
                                        </div>
                                        <span class="text-blue-400 font-semibold text-lg">
                                            {job.period.clone()}
                                        </span>
                                    </div>
                                    <div class="space-y-4 mt-6">
                                        {job
                                            .highlights
                                            .iter()
                                            .map(|point| {
                                                view! {
                                                    <div class="flex gap-4">
                                                        <div class="w-2 h-2 bg-cyan-400 rounded-full mt-2 flex-shrink-0" />
                                                        <p class="text-gray-300 leading-relaxed">{point.clone()}</p>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    view! {
        <footer class="border-t border-slate-800 py-8 px-4 sm:px-6 lg:px-8 text-center text-gray-500">
            <p>{format!("© {} {}. All rights reserved.", copyright_year(), profile.name)}</p>
            <p class="mt-2 text-sm">{format!("Languages: {}", profile.languages)}</p>
        </footer>
    }
}
