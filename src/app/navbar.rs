use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{actions::nav_condensed, content::NavSection};

use super::ActiveSection;

const CONTACT_HREF: &str = "#contact";

#[component]
pub fn Navbar(name: &'static str, sections: &'static [NavSection]) -> impl IntoView {
    let active = expect_context::<ActiveSection>();
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let header_class = move || {
        let base = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";
        if nav_condensed(scroll_y.get()) {
            format!("{base} bg-blue-950/90 backdrop-blur-md border-b border-blue-500/10 py-1 shadow-lg shadow-blue-950/50")
        } else {
            format!("{base} bg-blue-950/50 backdrop-blur-sm py-3")
        }
    };

    let desktop_links = sections
        .iter()
        .map(|s| {
            let href = s.id.href();
            let id = s.id.clone();
            let underline_id = s.id.clone();
            view! {
                <a
                    href=href
                    class=move || {
                        if active.is(&id) {
                            "relative group transition-all duration-300 text-cyan-300 font-medium"
                        } else {
                            "relative group transition-all duration-300 text-blue-200/70 hover:text-blue-100"
                        }
                    }
                >
                    {s.label.as_str()}
                    <span class=move || {
                        let scale = if active.is(&underline_id) {
                            "scale-x-100"
                        } else {
                            "scale-x-0 group-hover:scale-x-100"
                        };
                        format!(
                            "absolute -bottom-1 left-0 w-full h-0.5 bg-gradient-to-r from-blue-400 to-cyan-400 origin-left transition-transform duration-300 {scale}"
                        )
                    }></span>
                </a>
            }
        })
        .collect_view();

    let mobile_links = move || {
        sections
            .iter()
            .map(|s| {
                let href = s.id.href();
                let id = s.id.clone();
                view! {
                    <a
                        href=href
                        class=move || {
                            if active.is(&id) {
                                "text-2xl transition-colors duration-300 text-transparent bg-clip-text bg-gradient-to-r from-blue-300 to-cyan-300 font-medium"
                            } else {
                                "text-2xl transition-colors duration-300 text-blue-200/80 hover:text-blue-100"
                            }
                        }
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {s.label.as_str()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <div class="container max-w-7xl mx-auto flex h-16 items-center justify-between px-4 md:px-8 lg:px-12">
                <a href="#home" class="group">
                    <span class="text-xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-200 via-cyan-200 to-blue-100">
                        {name}
                    </span>
                </a>
                <nav class="hidden md:flex space-x-8">{desktop_links}</nav>
                <div class="hidden md:block">
                    <a
                        href=CONTACT_HREF
                        class="flex items-center gap-1 rounded-full px-6 py-2 text-sm bg-gradient-to-r from-blue-600 to-cyan-500 hover:from-blue-700 hover:to-cyan-600 text-white shadow-md shadow-blue-500/20"
                    >
                        "Get in Touch"
                        <i class="extra-chevron-right animate-bounce-subtle" />
                    </a>
                </div>
                <button
                    class="md:hidden mt-2 z-50 text-2xl text-blue-200 hover:text-cyan-300 transition-colors duration-300"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <i class=move || if menu_open.get() { "extra-close" } else { "extra-menu" } />
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col justify-center items-center space-y-8 p-8 bg-blue-950/90">
                    {mobile_links()}
                    <a
                        href=CONTACT_HREF
                        class="flex items-center gap-2 rounded-full px-8 py-3 mt-6 bg-gradient-to-r from-blue-600 to-cyan-500 text-white shadow-lg shadow-blue-500/20"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "Get in Touch"
                        <i class="extra-chevron-right" />
                    </a>
                </div>
            </Show>
        </header>
    }
}
