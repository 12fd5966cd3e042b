use leptos::prelude::*;

use crate::content::{Project, Projects, PROJECTS_ID};

use super::about::SectionHeading;

#[component]
pub fn ProjectsSection(projects: &'static Projects) -> impl IntoView {
    view! {
        <section
            id=PROJECTS_ID
            class="py-20 scroll-mt-16 px-4 md:px-8 lg:px-12 relative overflow-hidden bg-gradient-to-b from-blue-950 to-slate-900"
        >
            <div class="max-w-7xl mx-auto relative z-10 space-y-16">
                <SectionHeading
                    title=projects.title.as_str()
                    subtitle=projects.subtitle.as_str()
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let tags = project
        .tags
        .iter()
        .map(|tag| {
            view! {
                <span class="px-2 py-1 bg-blue-800/40 text-blue-200 text-xs rounded-md border border-blue-500/10 group-hover:border-blue-400/30 transition-colors duration-300">
                    {tag.as_str()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            class="overflow-hidden group animate-fade-up rounded-xl bg-emerald-900/50 backdrop-blur-sm border border-blue-500/10 hover:border-blue-400/30 transition-all duration-500 hover:-translate-y-2 hover:shadow-xl hover:shadow-blue-500/10 relative flex flex-col"
            style=format!("animation-delay: {}ms", index * 150 + 300)
        >
            <div class="relative aspect-video overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.name.as_str()
                    loading="lazy"
                    class="absolute inset-0 w-full h-full object-contain transition-transform duration-700 group-hover:scale-110"
                />
            </div>
            <div class="p-6 space-y-2">
                <h3 class="text-xl font-semibold text-blue-100 group-hover:text-cyan-300 transition-colors duration-300">
                    {project.name.as_str()}
                </h3>
                <p class="text-sm text-blue-200/70">{project.description.as_str()}</p>
            </div>
            <div class="px-6 flex flex-wrap gap-2">{tags}</div>
            <div class="p-6 mt-auto">
                <a
                    href=project.link.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center text-blue-200 hover:text-blue-100"
                >
                    <span>"View Project"</span>
                    <i class="extra-link ml-2" />
                </a>
            </div>
        </div>
    }
}
