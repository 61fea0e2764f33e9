use leptos::{html, prelude::*};

use crate::content::{content, Project};

use super::on_scroll_or_resize;

#[component]
fn ExternalLink() -> impl IntoView {
    view! {
        <svg class="h-3 w-3" viewBox="0 0 512 512" fill="currentColor" aria-hidden="true">
            <path d="M432 320h-32a16 16 0 0 0-16 16v112H64V128h144a16 16 0 0 0 16-16V80a16 16 0 0 0-16-16H48a48 48 0 0 0-48 48v352a48 48 0 0 0 48 48h352a48 48 0 0 0 48-48V336a16 16 0 0 0-16-16zM488 0H360c-21.37 0-32.05 25.91-17 41l35.73 35.73L135 320.37a24 24 0 0 0 0 34L157.67 377a24 24 0 0 0 34 0l243.61-243.68L471 169c15 15 41 4.5 41-17V24a24 24 0 0 0-24-24z" />
        </svg>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let class = if project.full_span {
        "bg-black text-white p-6 rounded-2xl shadow-lg flex flex-col col-span-2"
    } else {
        "bg-black text-white p-6 rounded-2xl shadow-lg flex flex-col"
    };

    view! {
        <div class=class>
            {project
                .img
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=project.desc.clone()
                            class="rounded-xl object-cover h-48 w-full"
                        />
                    }
                })}
            <div class="flex-grow py-4">
                <div class="flex gap-3">
                    {(!project.title.is_empty())
                        .then(|| {
                            view! {
                                <h3 class="text-2xl font-extrabold mb-1">{project.title.clone()}</h3>
                            }
                        })}
                    {project
                        .in_progress
                        .then(|| {
                            view! {
                                <span class="text-yellow-400 text-sm flex items-center gap-1">
                                    "In Progress"
                                </span>
                            }
                        })}
                </div>
                <p class="text-lg mb-1 text-left">{project.desc.clone()}</p>
                {project
                    .full_desc
                    .clone()
                    .map(|d| view! { <p class="text-sm text-gray-300 text-left">{d}</p> })}
                {(!project.tech.is_empty())
                    .then(|| {
                        view! {
                            <div class="mt-3 flex flex-wrap gap-2 text-sm text-gray-400">
                                {project
                                    .tech
                                    .iter()
                                    .map(|t| {
                                        view! {
                                            <span class="bg-gray-800 px-2 py-1 rounded-md border border-gray-700">
                                                {t.clone()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
            <div class="flex items-end mt-4">
                {project
                    .link
                    .clone()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 self-start bg-white hover:bg-primary text-black hover:text-white text-sm px-4 py-2 rounded-md"
                            >
                                "View Project"
                                <ExternalLink />
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

/// Tabbed project catalog with an underline that slides to the selected tab.
#[component]
pub fn Projects() -> impl IntoView {
    let catalog = &content().projects;
    let (selected, set_selected) = signal(catalog.default_tab.as_str());
    let (underline, set_underline) = signal(None::<(i32, i32)>);
    let tab_refs: Vec<(&'static str, NodeRef<html::Button>)> = catalog
        .tabs
        .iter()
        .map(|tab| (tab.key.as_str(), NodeRef::new()))
        .collect();
    let buttons = StoredValue::new(tab_refs.clone());

    let place_underline = move || {
        let key = selected.get_untracked();
        let button = buttons.with_value(|buttons| {
            buttons
                .iter()
                .find(|(k, _)| *k == key)
                .and_then(|(_, node)| node.get_untracked())
        });
        if let Some(button) = button {
            let placed = Some((button.offset_left(), button.offset_width()));
            if underline.get_untracked() != placed {
                set_underline.set(placed);
            }
        }
    };

    Effect::watch(move || selected.get(), move |_, _, _| place_underline(), false);
    on_scroll_or_resize(place_underline);

    view! {
        <section id="projects" class="flex flex-col items-center pb-12 bg-primary w-full">
            <div class="container px-3 md:px-10">
                <h2 class="hero-heading">"Projects."</h2>
                <p class="hero-text mb-8">"What I've been working on."</p>
            </div>
            <div class="relative w-full border-b border-gray-300 mb-8">
                <div class="flex justify-center space-x-6" role="tablist">
                    {tab_refs
                        .into_iter()
                        .zip(&catalog.tabs)
                        .map(|((key, node_ref), tab)| {
                            view! {
                                <button
                                    node_ref=node_ref
                                    role="tab"
                                    aria-controls=key
                                    aria-selected=move || {
                                        if selected.get() == key { "true" } else { "false" }
                                    }
                                    class=move || {
                                        if selected.get() == key {
                                            "tab-btn pb-2 text-2xl hover:text-secondary transition cursor-none text-blue-700 font-semibold"
                                        } else {
                                            "tab-btn pb-2 font-medium text-white text-2xl hover:text-secondary transition cursor-none"
                                        }
                                    }
                                    on:click=move |_| set_selected.set(key)
                                >
                                    {tab.title.clone()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    class="tab-underline absolute bottom-0 h-1 bg-black rounded transition-all duration-300 ease-in-out"
                    style=move || {
                        underline
                            .get()
                            .map(|(left, width)| format!("left: {left}px; width: {width}px;"))
                            .unwrap_or_default()
                    }
                ></div>
            </div>
            <div class="w-full">
                {catalog
                    .tabs
                    .iter()
                    .map(|tab| {
                        let key = tab.key.as_str();
                        view! {
                            <div
                                id=key
                                role="tabpanel"
                                class=move || {
                                    if selected.get() == key { "tab-content" } else { "tab-content hidden" }
                                }
                            >
                                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6 mx-auto px-6">
                                    {tab
                                        .projects
                                        .iter()
                                        .map(|project| view! { <ProjectCard project /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
