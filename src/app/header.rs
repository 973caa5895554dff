use leptos::{either::Either, prelude::*};

use crate::{
    content::{NavItem, PORTFOLIO},
    view::MenuIcon,
};

use super::homepage::use_page;

#[component]
pub fn NavBar() -> impl IntoView {
    let page = use_page();
    let state = page.state;

    view! {
        <nav class=move || {
            let base = "fixed w-full z-50 border-b border-slate-800 backdrop-blur-xl transition-colors drop-in";
            if state.with(|s| s.nav_elevated()) {
                format!("{base} bg-slate-950/90 shadow-lg")
            } else {
                format!("{base} bg-slate-950/80")
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-2xl font-bold bg-gradient-to-r from-blue-400 via-cyan-400 to-blue-400 bg-clip-text text-transparent hover:scale-110 transition">
                        {PORTFOLIO.profile.initials.clone()}
                    </div>

                    <div class="hidden md:flex space-x-1">
                        {PORTFOLIO
                            .nav
                            .iter()
                            .map(|item| view! { <DesktopLink item=item.clone() /> })
                            .collect_view()}
                    </div>

                    <button
                        class="md:hidden p-2 text-2xl leading-none"
                        aria-label="Toggle menu"
                        aria-expanded=move || state.with(|s| s.menu_open).to_string()
                        on:click=move |_| page.toggle_menu()
                    >
                        {move || match state.with(|s| s.menu_icon()) {
                            MenuIcon::Hamburger => "☰",
                            MenuIcon::Close => "✕",
                        }}
                    </button>
                </div>

                {move || {
                    if state.with(|s| s.menu_open) {
                        Either::Left(
                            view! {
                                <div class="md:hidden pb-4 space-y-2 fade-in">
                                    {PORTFOLIO
                                        .nav
                                        .iter()
                                        .map(|item| view! { <MobileLink item=item.clone() /> })
                                        .collect_view()}
                                </div>
                            },
                        )
                    } else {
                        Either::Right(())
                    }
                }}
            </div>
        </nav>
    }
}

#[component]
fn DesktopLink(item: NavItem) -> impl IntoView {
    let page = use_page();
    let section = item.section;
    let is_active = move || page.state.with(|s| s.is_active(section));

    view! {
        <a
            href=section.href()
            class="relative px-4 py-2 text-sm font-medium transition group"
            class=("text-white", is_active)
            class=("text-gray-300", move || !is_active())
            on:click=move |_| page.select_section(section)
        >
            {item.label}
            <span
                class="absolute bottom-0 left-0 h-0.5 bg-gradient-to-r from-blue-400 to-cyan-400 transition-all duration-300 group-hover:w-full"
                class=("w-full", is_active)
                class=("w-0", move || !is_active())
            ></span>
        </a>
    }
}

#[component]
fn MobileLink(item: NavItem) -> impl IntoView {
    let page = use_page();
    let section = item.section;

    view! {
        <a
            href=section.href()
            class="block py-2 px-4 text-gray-300 hover:text-blue-400 hover:translate-x-2 transition"
            on:click=move |_| page.select_section(section)
        >
            {item.label}
        </a>
    }
}
