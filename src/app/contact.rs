use leptos::{ev::SubmitEvent, prelude::*};

use crate::{
    contact::Field,
    content::{LinkKind, Section, PORTFOLIO},
};

use super::{
    homepage::{use_page, SectionHeading},
    reveal::Reveal,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-slate-700 border border-slate-600 rounded-lg focus:border-cyan-400 focus:outline-none transition text-white";

#[component]
pub fn LinkGlyph(kind: LinkKind) -> impl IntoView {
    match kind {
        LinkKind::Phone => view! { <span class="text-xl" aria-hidden="true">"📞"</span> }.into_any(),
        LinkKind::Email => view! { <span class="text-xl" aria-hidden="true">"✉️"</span> }.into_any(),
        LinkKind::GitHub => view! { <i class="devicon-github-plain text-xl"></i> }.into_any(),
        LinkKind::LinkedIn => view! { <i class="devicon-linkedin-plain text-xl"></i> }.into_any(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let copy = &PORTFOLIO.contact;
    view! {
        <section id=Section::Contact.id() class="py-20 px-4 sm:px-6 lg:px-8 relative">
            <div class="max-w-4xl mx-auto">
                <SectionHeading text=copy.heading.as_str() />
                <Reveal>
                    <p class="text-center text-gray-400 mb-12 text-lg -mt-12">
                        {copy.tagline.clone()}
                    </p>
                </Reveal>
                <Reveal>
                    <ContactForm />
                </Reveal>
                <Reveal class="mt-12">
                    <div class="grid md:grid-cols-3 gap-6">
                        {PORTFOLIO
                            .contact_cards()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href.clone()
                                        target=link.opens_new_tab().then_some("_blank")
                                        rel="noopener noreferrer"
                                        class="bg-slate-800 p-6 rounded-xl border border-slate-700 hover:border-cyan-500 hover:-translate-y-1 transition text-center group"
                                    >
                                        <div class="text-cyan-400 mb-3 group-hover:scale-110 transition">
                                            <LinkGlyph kind=link.kind />
                                        </div>
                                        <p class="text-sm text-gray-400 mb-1">{link.label.clone()}</p>
                                        <p class="font-semibold text-white group-hover:text-cyan-400 transition break-all">
                                            {link.value.clone()}
                                        </p>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let page = use_page();
    let state = page.state;
    let draft = move |field: Field| state.with(|s| s.form.draft.get(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        // no backend: acknowledge locally instead of navigating
        ev.prevent_default();
        if let Err(e) = page.submit() {
            log::debug!("contact form not submitted: {e}");
        }
    };

    view! {
        <form
            on:submit=on_submit
            class="bg-gradient-to-br from-slate-800 to-slate-900 p-8 rounded-2xl border border-slate-700"
        >
            <div class="grid md:grid-cols-2 gap-6 mb-6">
                <div class="hover:scale-[1.02] transition">
                    <label for="contact-name" class="block text-sm font-semibold text-cyan-400 mb-2">
                        "Name"
                    </label>
                    <input
                        id="contact-name"
                        name="name"
                        type="text"
                        class=INPUT_CLASS
                        placeholder="Your name"
                        required
                        prop:value=move || draft(Field::Name)
                        on:input=move |ev| page.update_field(Field::Name, event_target_value(&ev))
                    />
                </div>
                <div class="hover:scale-[1.02] transition">
                    <label for="contact-email" class="block text-sm font-semibold text-cyan-400 mb-2">
                        "Email"
                    </label>
                    <input
                        id="contact-email"
                        name="email"
                        type="email"
                        class=INPUT_CLASS
                        placeholder="your@email.com"
                        required
                        prop:value=move || draft(Field::Email)
                        on:input=move |ev| page.update_field(Field::Email, event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="hover:scale-[1.02] transition mb-6">
                <label for="contact-message" class="block text-sm font-semibold text-cyan-400 mb-2">
                    "Message"
                </label>
                <textarea
                    id="contact-message"
                    name="message"
                    class=format!("{INPUT_CLASS} h-32 resize-none")
                    placeholder="Tell me about your project..."
                    required
                    prop:value=move || draft(Field::Message)
                    on:input=move |ev| page.update_field(Field::Message, event_target_value(&ev))
                ></textarea>
            </div>

            <button
                type="submit"
                class="w-full px-8 py-3 bg-gradient-to-r from-blue-500 to-cyan-500 rounded-lg font-semibold flex items-center justify-center gap-2 hover:shadow-lg hover:shadow-cyan-500/50 hover:scale-[1.02] active:scale-[0.98] transition"
            >
                <span aria-hidden="true">"➤"</span>
                {move || state.with(|s| s.submit_label())}
            </button>
        </form>
    }
}
