use leptos::prelude::*;

use crate::content::{About, ABOUT_ID};

#[component]
pub fn AboutSection(about: &'static About) -> impl IntoView {
    let paragraphs = about
        .paragraphs
        .iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                {(i > 0)
                    .then(|| {
                        view! {
                            <div class="w-full h-px bg-gradient-to-r from-transparent via-blue-500/20 to-transparent my-6"></div>
                        }
                    })}
                <p class="text-lg text-blue-100/80 leading-relaxed">{p.as_str()}</p>
            }
        })
        .collect_view();

    let stats = about
        .stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            view! {
                <div
                    class="bg-blue-900/30 backdrop-blur-sm rounded-2xl p-6 text-center border border-blue-500/10 hover:border-blue-400/30 transition-all duration-500 hover:-translate-y-2 animate-fade-up group"
                    style=format!("animation-delay: {}ms", i * 150)
                >
                    <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-gradient-to-br from-blue-500/20 to-cyan-400/20 flex items-center justify-center">
                        <i class=format!("{} text-xl text-blue-300 group-hover:text-blue-200", stat.icon) />
                    </div>
                    <div class="text-4xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500 mb-2">
                        {stat.value.as_str()}
                    </div>
                    <div class="text-sm text-blue-200/70 group-hover:text-blue-100 transition-all duration-300">
                        {stat.label.as_str()}
                    </div>
                </div>
            }
        })
        .collect_view();

    let skills = about
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            view! {
                <div
                    class="px-4 py-2 rounded-full bg-blue-900/30 text-blue-200 border border-blue-500/20 hover:border-blue-400/40 hover:bg-blue-800/30 transition-all duration-300 animate-fade-up backdrop-blur-sm"
                    style=format!("animation-delay: {}ms", i * 100)
                >
                    {skill.as_str()}
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=ABOUT_ID
            class="py-20 px-4 md:px-8 lg:px-12 relative overflow-hidden bg-gradient-to-b from-slate-900 to-blue-950"
        >
            <div class="max-w-7xl mx-auto relative z-10 space-y-16">
                <SectionHeading title=about.title.as_str() subtitle=about.subtitle.as_str() />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6 animate-slide-up backdrop-blur-sm bg-blue-950/30 p-8 rounded-2xl border border-blue-500/10 shadow-xl">
                        {paragraphs}
                    </div>
                    <div class="grid grid-cols-2 gap-6">{stats}</div>
                </div>
                <div class="pt-8">
                    <div class="text-center mb-10">
                        <h3 class="text-2xl font-semibold text-blue-200 mb-6">
                            {about.skills_title.as_str()}
                        </h3>
                        <div class="h-1 w-16 bg-gradient-to-r from-blue-400 to-cyan-400 rounded-full mx-auto"></div>
                    </div>
                    <div class="flex flex-wrap justify-center gap-4">{skills}</div>
                </div>
            </div>
        </section>
    }
}

/// Accent bar, title and subtitle shared by the content sections.
#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-4 text-center max-w-3xl mx-auto">
            <div class="h-1 w-20 bg-gradient-to-r from-blue-400 to-cyan-400 rounded-full mb-6 mx-auto"></div>
            <h2 class="text-3xl font-bold tracking-tight sm:text-5xl text-transparent bg-clip-text bg-gradient-to-r from-blue-200 via-cyan-200 to-blue-100 animate-text-reveal">
                {title}
            </h2>
            <p class="text-lg text-blue-200/70 animate-text-reveal animation-delay-300">{subtitle}</p>
        </div>
    }
}
