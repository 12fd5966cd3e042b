use leptos::prelude::*;

use crate::content::{Hero, LinkButton, Owner, TextRun, HOME_ID};

#[component]
pub fn HeroSection(owner: &'static Owner, hero: &'static Hero) -> impl IntoView {
    view! {
        <section
            id=HOME_ID
            class="min-h-[100vh] flex flex-col justify-center px-4 md:px-8 lg:px-12 py-12 relative overflow-hidden bg-gradient-to-b from-blue-950 to-slate-900"
        >
            <div class="absolute inset-0 pointer-events-none overflow-hidden">
                <div class="absolute top-0 right-0 w-[60%] h-[60%] bg-gradient-to-b from-blue-500/10 to-purple-500/5 rounded-full blur-3xl"></div>
                <div class="absolute bottom-0 left-0 w-[50%] h-[50%] bg-gradient-to-tr from-cyan-400/10 to-transparent rounded-full blur-3xl"></div>
                <div class="absolute top-1/3 left-1/4 w-[30%] h-[30%] bg-gradient-to-tr from-indigo-500/10 to-transparent rounded-full blur-3xl animate-pulse-slow"></div>
            </div>

            <div class="grid md:grid-cols-2 gap-8 items-center relative z-10 mt-10">
                <div class="space-y-8 order-2 md:order-1 animate-fade-in">
                    <div class="space-y-3">
                        <div class="inline-block px-3 py-1 rounded-full bg-blue-500/10 border border-blue-500/20 text-blue-300 text-sm font-medium mb-2 backdrop-blur-sm">
                            {owner.role.as_str()}
                        </div>
                        <h1 class="text-4xl md:text-5xl lg:text-7xl font-bold tracking-tight text-transparent bg-clip-text bg-gradient-to-r from-blue-200 via-cyan-200 to-blue-100 animate-text-reveal">
                            {hero.greeting.as_str()}
                            " "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500">
                                {owner.name.as_str()}
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-white font-light animate-text-reveal animation-delay-300">
                            {hero.subtitle.as_str()}
                        </p>
                    </div>
                    <p class="text-lg text-blue-100/70 max-w-md animate-text-reveal animation-delay-600 leading-relaxed">
                        {hero.intro.iter().map(intro_run).collect_view()}
                    </p>
                    <div class="flex flex-wrap gap-4 animate-fade-up animation-delay-800">
                        {hero.actions.iter().map(action_button).collect_view()}
                    </div>
                </div>

                <div class="flex justify-center order-1 md:order-2 mt-8 md:mt-0">
                    <div class="relative w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden animate-float">
                        <div class="absolute -inset-0.5 bg-gradient-to-r from-cyan-400 to-blue-500 rounded-full blur-sm opacity-70 animate-pulse-slow"></div>
                        <div class="absolute inset-[3px] rounded-full overflow-hidden bg-blue-950 z-10">
                            <img
                                src=hero.photo.as_str()
                                alt=owner.name.as_str()
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div class="absolute inset-0 animate-rotate-slow [animation-duration:15s]">
                            <div class="absolute top-[5%] left-[50%] w-4 h-4 rounded-full bg-cyan-400/30 blur-sm"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn intro_run(run: &'static TextRun) -> AnyView {
    match &run.highlight {
        Some(gradient) => view! {
            <strong class=format!("bg-gradient-to-t {gradient} bg-clip-text text-transparent")>
                {run.text.as_str()}
            </strong>
        }
        .into_any(),
        None => run.text.as_str().into_any(),
    }
}

fn action_button(button: &'static LinkButton) -> impl IntoView {
    let class = if button.primary {
        "flex items-center gap-2 rounded-full px-8 py-4 bg-gradient-to-r from-blue-600 to-cyan-500 hover:from-blue-700 hover:to-cyan-600 text-white shadow-lg shadow-blue-500/20"
    } else {
        "flex items-center gap-2 rounded-full px-8 py-4 border border-blue-400/30 text-blue-200 bg-blue-800 hover:bg-blue-800/30 hover:text-blue-100"
    };
    view! {
        <a href=button.href.as_str() class=class>
            <i class=button.icon.as_str() />
            {button.label.as_str()}
        </a>
    }
}
