mod about;
mod active_section;
mod background;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;

pub use active_section::{provide_active_section, ActiveSection};

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{portfolio, ContentError, Portfolio},
    tracker::SectionRegistry,
};

use about::AboutSection;
use background::ParallaxBackground;
use contact::ContactSection;
use footer::SiteFooter;
use hero::HeroSection;
use navbar::Navbar;
use projects::ProjectsSection;

/// Brand glyphs (`devicon-*` classes). Interface icons (`extra-*`) live in input.css.
const DEVICON_STYLESHEET: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

fn load_page() -> Result<(&'static Portfolio, SectionRegistry), ContentError> {
    let portfolio = portfolio()?;
    let registry = portfolio.navigation.registry()?;
    Ok((portfolio, registry))
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match load_page() {
        Ok((portfolio, registry)) => Either::Left(view! { <Page portfolio registry /> }),
        Err(e) => {
            log::error!("couldn't load portfolio: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center text-red-400">"Couldn't load this page: " {e.to_string()}</p>
            })
        }
    }
}

/// The single scrolling page. Owns the active section state and hands a
/// read-only handle to the navbar through context.
#[component]
fn Page(portfolio: &'static Portfolio, registry: SectionRegistry) -> impl IntoView {
    provide_active_section(registry, portfolio.navigation.tracker_config());
    let name = portfolio.owner.name.as_str();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Title text=portfolio.owner.role.as_str() />
        <Meta name="description" content=portfolio.owner.summary.as_str() />
        <div class="min-h-screen bg-blue-950 relative overflow-hidden text-blue-50">
            <ParallaxBackground layers=&portfolio.background />
            <Navbar name sections=&portfolio.navigation.sections />
            <main class="relative z-10">
                <HeroSection owner=&portfolio.owner hero=&portfolio.hero />
                <AboutSection about=&portfolio.about />
                <ProjectsSection projects=&portfolio.projects />
                <ContactSection contact=&portfolio.contact />
            </main>
            <SiteFooter
                owner=&portfolio.owner
                footer=&portfolio.footer
                sections=&portfolio.navigation.sections
                channels=&portfolio.contact.channels
            />
        </div>
    }
}
