use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn, utils::Pausable};

use crate::content::content;
use crate::scroll::{hero_clip, hero_progress, HERO_CLIP_START};
use crate::typewriter::{Typewriter, TypewriterTiming};

use super::{on_scroll_or_resize, viewport_size};

#[component]
fn TypingRoles() -> impl IntoView {
    let writer = StoredValue::new(Typewriter::new(
        content().site.roles.clone(),
        TypewriterTiming::default(),
    ));
    let (text, set_text) = signal(String::new());

    let Pausable { pause, .. } = use_raf_fn(move |args| {
        let changed = writer
            .try_update_value(|w| w.advance(args.delta))
            .unwrap_or(false);
        if changed {
            set_text.set(writer.with_value(|w| w.text().to_string()));
        }
    });
    on_cleanup(pause);

    view! {
        <span class="text-red-500 font-bold">
            {move || text.get()}
            <span class="typewriter-cursor">"|"</span>
        </span>
    }
}

#[component]
fn Quote(#[prop(into)] color: String) -> impl IntoView {
    let site = &content().site;
    view! {
        <h2 class=format!(
            "quote-text absolute bottom-12 right-5 z-40 font-display italic leading-relaxed text-right {color}",
        )>{format!("\"{}\"", site.quote)}</h2>
        <h2 class=format!(
            "quote-author absolute bottom-5 right-5 z-40 max-w-md font-display font-bold {color}",
        )>{format!("- {}", site.quote_author)}</h2>
    }
}

/// Landing section. Its clip circle shrinks toward the top-left corner as
/// the page scrolls past it, revealing the quote underneath.
#[component]
pub fn Hero() -> impl IntoView {
    let site = &content().site;
    let section_ref = NodeRef::<html::Section>::new();
    let (clip, set_clip) = signal(HERO_CLIP_START.css());

    on_scroll_or_resize(move || {
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        let Some((_, viewport_height)) = viewport_size() else {
            return;
        };
        let rect = section.get_bounding_client_rect();
        let next = hero_clip(hero_progress(rect.top(), rect.height(), viewport_height)).css();
        if clip.get_untracked() != next {
            set_clip.set(next);
        }
    });

    view! {
        <div class="relative h-dvh w-full">
            <div class="relative z-20 h-dvh rounded-lg">
                <section
                    id="home"
                    node_ref=section_ref
                    class="hero-section inset-0 z-10 flex justify-center min-h-dvh text-white"
                    style=move || format!("clip-path: {};", clip.get())
                >
                    <div class="fixed top-0 left-0 w-full h-full z-0 pointer-events-none">
                        <div class="hero-bg absolute w-full h-full bg-gradient-to-t from-primary to-secondary"></div>
                    </div>
                    <div class="absolute left-0 top-0 z-40 size-full">
                        <div class="mt-30 ml-10">
                            <h1 class="hero-heading">{site.name.clone()}</h1>
                            <p class="hero-text ml-1">
                                <TypingRoles />
                            </p>
                        </div>
                    </div>
                    <Quote color="text-white" />
                </section>
            </div>
            <Quote color="text-secondary" />
        </div>
    }
}
