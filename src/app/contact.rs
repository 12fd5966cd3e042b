use leptos::prelude::*;
use leptos_use::{use_clipboard, UseClipboardReturn};

use crate::{
    actions::ContactAction,
    content::{Channel, ConnectCard, Contact, CONTACT_ID},
};

use super::about::SectionHeading;

fn open_in_new_tab(url: &str) {
    if let Err(e) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("couldn't open {url}: {e:?}");
    }
}

#[component]
pub fn ContactSection(contact: &'static Contact) -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();

    let run_action = move |action: &ContactAction| match action {
        ContactAction::CopyEmail(address) if is_supported.get_untracked() => copy(address.as_str()),
        ContactAction::CopyEmail(_) => {
            log::warn!("clipboard unavailable, falling back to mailto");
            open_in_new_tab(&action.href());
        }
        ContactAction::OpenExternal(url) => open_in_new_tab(url),
    };

    let channels = contact
        .channels
        .iter()
        .enumerate()
        .map(|(index, channel)| view! { <ChannelLink channel index /> })
        .collect_view();

    let cards = contact
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let run_action = run_action.clone();
            view! {
                <ConnectCardView
                    card
                    index
                    copied
                    on_activate=move || run_action(&card.action)
                />
            }
        })
        .collect_view();

    view! {
        <section
            id=CONTACT_ID
            class="py-20 scroll-mt-16 px-4 md:px-8 lg:px-12 relative overflow-hidden bg-gradient-to-b from-slate-900 to-blue-950"
        >
            <div class="max-w-5xl mx-auto relative z-10 space-y-12">
                <SectionHeading title=contact.title.as_str() subtitle=contact.subtitle.as_str() />
                <div class="grid md:grid-cols-5 gap-8 items-start">
                    <div class="md:col-span-2 space-y-8 animate-slide-up">
                        <div class="backdrop-blur-sm bg-blue-950/30 p-6 rounded-2xl border border-blue-500/10 shadow-lg">
                            <p class="text-blue-100/80 mb-6 leading-relaxed">
                                {contact.blurb.as_str()}
                            </p>
                            <div class="space-y-4">{channels}</div>
                            <div class="flex justify-center mt-8">
                                <Availability text=contact.availability.as_str() />
                            </div>
                        </div>
                    </div>
                    <div class="md:col-span-3 animate-slide-up animation-delay-200">
                        <div class="backdrop-blur-sm bg-blue-950/30 p-6 rounded-2xl border border-blue-500/10 shadow-lg space-y-6">
                            <div class="text-center mb-2">
                                <h3 class="text-xl font-semibold mb-2 text-blue-100">
                                    {contact.cards_title.as_str()}
                                </h3>
                                <p class="text-blue-200/70 text-sm">
                                    {contact.cards_subtitle.as_str()}
                                </p>
                            </div>
                            <div class="grid grid-cols-2 gap-4">{cards}</div>
                            <div class="flex items-center justify-between rounded-xl bg-blue-900/40 p-4 border border-blue-500/20 animate-pulse-subtle">
                                <div>
                                    <h4 class="font-medium text-blue-100">
                                        {contact.resume.title.as_str()}
                                    </h4>
                                    <p class="text-xs text-blue-200/70">
                                        {contact.resume.description.as_str()}
                                    </p>
                                </div>
                                <a
                                    href=contact.resume.url.as_str()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-1 rounded-full px-3 py-1 text-sm border border-blue-500/30 bg-blue-800/50 text-blue-100 hover:bg-blue-700/50"
                                >
                                    <i class="extra-download" />
                                    " Download"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ChannelLink(channel: &'static Channel, index: usize) -> impl IntoView {
    view! {
        <a
            href=channel.url.as_str()
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-3 group hover:text-cyan-300 transition-colors duration-300 animate-fade-up"
            style=format!("animation-delay: {}ms", index * 150)
        >
            <div class="flex-shrink-0 w-8 h-8 rounded-full bg-blue-800/50 flex items-center justify-center border border-blue-500/20 group-hover:border-blue-400/40 group-hover:scale-110 transition-all duration-300">
                <i class=channel.icon.as_str() />
            </div>
            <div>
                <div class="text-xs text-blue-200/70">{channel.label.as_str()}</div>
                <div class="font-medium text-blue-100 group-hover:text-cyan-300 transition-colors duration-300">
                    {channel.value.as_str()}
                </div>
            </div>
        </a>
    }
}

#[component]
fn ConnectCardView<F>(
    card: &'static ConnectCard,
    index: usize,
    copied: Signal<bool>,
    on_activate: F,
) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    let is_copy = matches!(card.action, ContactAction::CopyEmail(_));
    let call_to_action = move || {
        if is_copy && copied.get() {
            "Copied!"
        } else {
            card.call_to_action.as_str()
        }
    };
    view! {
        <a
            href=card.action.href()
            target=card.action.opens_new_tab().then_some("_blank")
            rel="noopener noreferrer"
            class="relative group animate-fade-up block"
            style=format!("animation-delay: {}ms", index * 100 + 200)
            on:click=move |ev| {
                ev.prevent_default();
                on_activate();
            }
        >
            <div class=format!(
                "absolute -inset-0.5 rounded-lg bg-gradient-to-r {} opacity-0 group-hover:opacity-100 blur transition duration-500",
                card.border,
            )></div>
            <div class="relative bg-blue-900/40 p-4 rounded-lg flex flex-col items-center text-center space-y-2 hover:scale-105 transition-all duration-300 cursor-pointer border border-blue-500/10 group-hover:border-blue-400/30">
                <div class="bg-blue-800/50 p-2 rounded-full">
                    <i class=format!("{} text-blue-400", card.icon) />
                </div>
                <h4 class="font-medium text-blue-100">{card.label.as_str()}</h4>
                <p class="text-xs text-blue-200/70">{card.value.as_str()}</p>
                <span class="text-xs font-medium text-cyan-300 px-2 py-1 rounded-full bg-blue-800/50 flex items-center gap-1">
                    {call_to_action}
                    <i class="extra-link" />
                </span>
            </div>
        </a>
    }
}

#[component]
pub fn Availability(text: &'static str) -> impl IntoView {
    view! {
        <div class="inline-flex items-center rounded-full border border-green-500/30 bg-green-500/10 px-4 py-1.5 text-sm text-green-300">
            <span class="relative flex h-2 w-2 mr-2">
                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75"></span>
                <span class="relative inline-flex rounded-full h-2 w-2 bg-green-500"></span>
            </span>
            {text}
        </div>
    }
}
