use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::content::content;
use crate::scroll::{active_section, NavState, SectionBounds};

use super::{button::Button, on_scroll_or_resize, viewport_size};

/// Reads the bounds of every `section[id]` on the page and returns the one
/// under the probe line.
fn section_under_probe() -> Option<String> {
    let (_, viewport_height) = viewport_size()?;
    let nodes = document().query_selector_all("section[id]").ok()?;
    let mut found = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let rect = el.get_bounding_client_rect();
        found.push((el.id(), rect.top(), rect.bottom()));
    }
    let sections: Vec<SectionBounds> = found
        .iter()
        .map(|(id, top, bottom)| SectionBounds {
            id: id.as_str(),
            top: *top,
            bottom: *bottom,
        })
        .collect();
    active_section(&sections, viewport_height).map(str::to_string)
}

#[component]
fn AudioBars(playing: ReadSignal<bool>) -> impl IntoView {
    view! {
        <span class="flex items-center space-x-0.5">
            {(1..=4)
                .map(|bar| {
                    view! {
                        <span
                            class=move || {
                                if playing.get() { "indicator-line active" } else { "indicator-line" }
                            }
                            style=format!("animation-delay: {}s;", bar as f64 * 0.1)
                        ></span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let site = &content().site;
    let (nav_state, set_nav_state) = signal(NavState::default());
    let (current, set_current) = signal("home".to_string());
    let (menu_open, set_menu_open) = signal(false);
    let (playing, set_playing) = signal(false);
    let audio_ref = NodeRef::<html::Audio>::new();

    let (_, scroll_y) = use_window_scroll();
    Effect::watch(
        move || scroll_y.get(),
        move |y, _, _| set_nav_state.update(|nav| nav.on_scroll(*y)),
        false,
    );

    on_scroll_or_resize(move || {
        if let Some(id) = section_under_probe() {
            if current.get_untracked() != id {
                log::debug!("active section: {id}");
                set_current.set(id);
            }
        }
    });

    Effect::watch(
        move || playing.get(),
        move |playing, _, _| {
            let Some(audio) = audio_ref.get_untracked() else {
                return;
            };
            if *playing {
                audio.set_loop(true);
                if let Err(e) = audio.play() {
                    log::warn!("couldn't start background audio: {e:?}");
                }
            } else if let Err(e) = audio.pause() {
                log::warn!("couldn't pause background audio: {e:?}");
            }
        },
        false,
    );

    let link_class = move |id: &'static str, mobile: bool| {
        move || {
            let base = if mobile {
                "nav-hover-btn block py-2"
            } else {
                "nav-hover-btn"
            };
            if current.get() == id {
                format!("{base} text-red-500")
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <div
            class=move || {
                if nav_state.get().floating() {
                    "fixed inset-x-0 top-4 z-50 h-16 border-none transition-all duration-700 sm:inset-x-6 floating-nav"
                } else {
                    "fixed inset-x-0 top-4 z-50 h-16 border-none transition-all duration-700 sm:inset-x-6"
                }
            }
            style=move || {
                let nav = nav_state.get();
                format!(
                    "transform: translateY({}px); opacity: {}; transition: transform 0.2s, opacity 0.2s;",
                    nav.offset_y(),
                    if nav.visible() { 1 } else { 0 },
                )
            }
        >
            <header class="absolute top-1/2 w-full -translate-y-1/2">
                <nav class="flex size-full items-center justify-between p-4">
                    <div class="flex items-center gap-7">
                        <a href="#home" class="text-2xl font-bold text-white">
                            {site.name.clone()}
                        </a>
                        <Button
                            id="linkedin-button"
                            title=site.cta.label.clone()
                            href=site.cta.href.clone()
                            arrow=true
                            container_class="bg-blue-50 md:flex hidden items-center justify-center gap-1"
                        />
                    </div>

                    <div class="flex h-full items-center">
                        <div class="hidden md:block">
                            {site
                                .nav
                                .iter()
                                .map(|item| {
                                    let id = item.id.as_str();
                                    view! {
                                        <a href=format!("#{id}") class=link_class(id, false)>
                                            {item.label.clone()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <button
                            class="md:hidden ml-6 text-white"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>

                        <button
                            class="ml-10"
                            aria-label="Toggle background audio"
                            on:click=move |_| set_playing.update(|p| *p = !*p)
                        >
                            <audio
                                node_ref=audio_ref
                                class="hidden"
                                src=site.audio_src.clone()
                            ></audio>
                            <AudioBars playing />
                        </button>
                    </div>
                </nav>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden bg-black bg-opacity-90 p-4">
                        {site
                            .nav
                            .iter()
                            .map(|item| {
                                let id = item.id.as_str();
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class=link_class(id, true)
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {item.label.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </header>
        </div>
    }
}
