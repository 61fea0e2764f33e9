use leptos::{html, prelude::*};

use crate::content::{content, Experience as ExperienceEntry};
use crate::timeline::{is_active, NodeBox, ScrollGeometry, TimelineFrame};

use super::{on_scroll_or_resize, viewport_size};

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry, active: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            if active.get() { "experience-card active" } else { "experience-card" }
        }>
            <img src=entry.image.clone() alt=format!("{} logo", entry.title) />
            <h3>{entry.title.clone()}</h3>
            <p class="duration">{entry.duration.clone()}</p>
            <p>{entry.description.clone()}</p>
            {(!entry.skills.is_empty())
                .then(|| {
                    view! {
                        <div class="skills-container">
                            {entry
                                .skills
                                .iter()
                                .map(|skill| view! { <span class="skill-tag">{skill.clone()}</span> })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}

/// Experience timeline. The progress bar fills and the nodes light up as
/// the card column scrolls through the activation line.
#[component]
pub fn Experience() -> impl IntoView {
    let entries = &content().experiences;
    let container_ref = NodeRef::<html::Div>::new();
    let node_refs: Vec<NodeRef<html::Div>> = entries.iter().map(|_| NodeRef::new()).collect();
    let nodes = StoredValue::new(node_refs.clone());
    let (frame, set_frame) = signal(TimelineFrame::default());

    on_scroll_or_resize(move || {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let Some((_, viewport_height)) = viewport_size() else {
            return;
        };
        // every node has to be attached before the fill can be measured
        let Some(boxes) = nodes.with_value(|nodes| {
            nodes
                .iter()
                .map(|node| {
                    node.get_untracked().map(|el| NodeBox {
                        offset_top: el.offset_top() as f64,
                        offset_height: el.offset_height() as f64,
                    })
                })
                .collect::<Option<Vec<_>>>()
        }) else {
            return;
        };
        let rect = container.get_bounding_client_rect();
        let geometry = ScrollGeometry {
            container_top: rect.top(),
            container_height: rect.height(),
            viewport_height,
        };
        if let Some(next) = TimelineFrame::compute(geometry, &boxes) {
            if frame.get_untracked() != next {
                set_frame.set(next);
            }
        }
    });

    let node_active = move |index: usize| is_active(index, frame.get().active_index);

    view! {
        <section id="experience" class="bg-gradient-to-b from-black to-secondary">
            <div class="container mx-auto md:px-10 p-3">
                <p class="hero-heading">"Experiences."</p>
                <p class="hero-text">"Where I have grown."</p>
            </div>
            <div class="experience-section-container">
                <div class="timeline-container">
                    <div class="timeline-wrapper">
                        <div
                            class="timeline-progress"
                            style=move || format!("height: {}px;", frame.get().fill_height)
                        ></div>
                        {node_refs
                            .into_iter()
                            .enumerate()
                            .map(|(i, node_ref)| {
                                view! {
                                    <div
                                        node_ref=node_ref
                                        class=move || {
                                            if node_active(i) { "timeline-node active" } else { "timeline-node" }
                                        }
                                    >
                                        <div class="timeline-circle"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="experiences-container" node_ref=container_ref>
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! {
                                <ExperienceCard
                                    entry
                                    active=Signal::derive(move || node_active(i))
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
