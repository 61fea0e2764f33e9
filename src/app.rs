mod about;
mod bento;
mod button;
mod cursor;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

use crate::content::content;
use crate::tilt::ElementRect;

use about::About;
use cursor::CursorEffect;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let site = &content().site;

    view! {
        <Title text=site.full_name.clone() />
        <Meta name="description" content=site.description.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div>
            <CursorEffect />
            <main class="relative min-h-screen w-screen overflow-x-hidden">
                <NavBar />
                <Hero />
                <About />
                <Experience />
                <Skills />
                <Projects />
                <Footer />
            </main>
        </div>
    }
}

/// `(width, height)` of the window, `None` if the browser won't say.
fn viewport_size() -> Option<(f64, f64)> {
    let window = window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

fn element_rect(el: &web_sys::Element) -> ElementRect {
    let rect = el.get_bounding_client_rect();
    ElementRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("couldn't set {property}: {e:?}");
    }
}

/// Runs `measure` once on mount and again on every window scroll and resize.
/// The listeners are removed when the calling component is cleaned up.
fn on_scroll_or_resize<F>(measure: F)
where
    F: Fn() + Clone + 'static,
{
    let options = UseEventListenerOptions::default().passive(true);
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        {
            let measure = measure.clone();
            move |_| measure()
        },
        options,
    );
    let _ = use_event_listener_with_options(
        use_window(),
        ev::resize,
        {
            let measure = measure.clone();
            move |_| measure()
        },
        options,
    );
    Effect::new(move |_| measure());
}
