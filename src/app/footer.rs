use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{
    actions::show_scroll_top,
    content::{Channel, Footer, NavSection, Owner},
};

use super::contact::Availability;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn SiteFooter(
    owner: &'static Owner,
    footer: &'static Footer,
    sections: &'static [NavSection],
    channels: &'static [Channel],
) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    let social = channels.iter().map(social_link).collect_view();

    let quick_links = sections
        .iter()
        .map(|s| {
            view! {
                <li>
                    <a
                        href=s.id.href()
                        class="text-blue-200/60 hover:text-cyan-300 transition-colors duration-300 text-sm flex items-center gap-1 group"
                    >
                        <i class="extra-arrow-right text-xs opacity-0 group-hover:opacity-100 transition-all duration-300" />
                        {s.label.as_str()}
                    </a>
                </li>
            }
        })
        .collect_view();

    let secondary = footer
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            view! {
                {(i > 0).then_some(" • ")}
                <a href=link.url.as_str() class="hover:text-blue-200/80 transition-colors duration-300">
                    {link.label.as_str()}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="border-t border-blue-500/10 py-8 px-4 md:px-8 lg:px-12 relative z-10 bg-gradient-to-b from-blue-950 to-slate-900 overflow-hidden">
            <div class="container max-w-7xl mx-auto relative z-10">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8 pb-8 border-b border-blue-500/10">
                    <div class="space-y-4">
                        <h3 class="text-lg font-semibold text-transparent bg-clip-text bg-gradient-to-r from-blue-200 to-cyan-200">
                            {owner.name.as_str()}
                        </h3>
                        <p class="text-sm text-blue-200/60 max-w-xs">{owner.summary.as_str()}</p>
                        <div class="flex space-x-4 pt-2">{social}</div>
                    </div>
                    <div class="space-y-4">
                        <h3 class="text-sm font-semibold uppercase tracking-wider text-blue-200/80">
                            "Quick Links"
                        </h3>
                        <ul class="space-y-2">{quick_links}</ul>
                    </div>
                    <div class="space-y-4">
                        <h3 class="text-sm font-semibold uppercase tracking-wider text-blue-200/80">
                            "Contact"
                        </h3>
                        <p class="text-sm text-blue-200/60">{footer.contact_note.as_str()}</p>
                        <Availability text=footer.availability.as_str() />
                    </div>
                </div>
                <div class="flex flex-col md:flex-row justify-between items-center gap-4 pt-2">
                    <div class="text-sm text-blue-200/60 flex items-center gap-1">
                        {format!("© {BUILD_YEAR} {}. All rights reserved.", owner.name)}
                        <span class="hidden md:inline-flex items-center text-xs ml-2">
                            "Made with Rust and Leptos"
                        </span>
                    </div>
                    <div class="text-xs text-blue-200/40">{secondary}</div>
                </div>
            </div>
            <button
                aria-label="Scroll to top"
                class=move || {
                    let state = if show_scroll_top(scroll_y.get()) {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-10 pointer-events-none"
                    };
                    format!(
                        "fixed bottom-6 right-6 w-10 h-10 rounded-full bg-gradient-to-r from-blue-600 to-cyan-500 flex items-center justify-center text-white shadow-lg shadow-blue-500/20 z-50 transition-all duration-300 {state}"
                    )
                }
                on:click=move |_| scroll_to_top()
            >
                <i class="extra-arrow-up" />
            </button>
        </footer>
    }
}

fn social_link(channel: &'static Channel) -> impl IntoView {
    view! {
        <a
            href=channel.url.as_str()
            target="_blank"
            rel="noopener noreferrer"
            class="w-9 h-9 flex items-center justify-center rounded-full bg-blue-900/30 text-blue-300 hover:text-cyan-300 hover:bg-blue-800/50 transition-all duration-300 hover:scale-110 border border-blue-500/10 hover:border-blue-400/30"
        >
            <i class=channel.icon.as_str() />
            <span class="sr-only">{channel.label.as_str()}</span>
        </a>
    }
}
