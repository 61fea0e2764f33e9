use leptos::{html, prelude::*};

use crate::content::content;
use crate::scroll::{
    about_progress, about_scroll_distance, about_tilt_enabled, MaskFrame, ABOUT_SCROLL_DESKTOP_PX,
    MASK_START,
};

use super::{bento::BentoTilt, on_scroll_or_resize, viewport_size};

/// About section. The video mask is pinned while it grows to fill the
/// viewport; the pin lasts for the scrub distance.
#[component]
pub fn About() -> impl IntoView {
    let about = &content().site.about;
    let clip_ref = NodeRef::<html::Div>::new();
    let (mask, set_mask) = signal(MASK_START.css());
    let (distance, set_distance) = signal(ABOUT_SCROLL_DESKTOP_PX);
    let (tilt_disabled, set_tilt_disabled) = signal(false);
    let video_ref = NodeRef::<html::Video>::new();

    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            video.set_loop(true);
        }
    });

    on_scroll_or_resize(move || {
        let Some(clip) = clip_ref.get_untracked() else {
            return;
        };
        let Some((viewport_width, viewport_height)) = viewport_size() else {
            return;
        };
        let scroll_distance = about_scroll_distance(viewport_width);
        if distance.get_untracked() != scroll_distance {
            set_distance.set(scroll_distance);
        }
        let rect = clip.get_bounding_client_rect();
        // the pinned block is one viewport tall
        let progress = about_progress(rect.top(), viewport_height, viewport_height, scroll_distance);
        let next = MaskFrame::at(progress).css();
        if mask.get_untracked() != next {
            set_mask.set(next);
        }
        let disabled = !about_tilt_enabled(rect.bottom());
        if tilt_disabled.get_untracked() != disabled {
            set_tilt_disabled.set(disabled);
        }
    });

    view! {
        <section id="about" class="min-h-screen w-screen overflow-hidden">
            <div class="relative z-30 flex flex-col items-center">
                <h1 class="hero-heading relative">{about.heading.clone()}</h1>
                <div class="flex-row text-center">
                    <p class="hero-text max-w-7xl mb-16 mx-16">{about.text.clone()}</p>
                </div>
            </div>
            <div
                id="clip"
                node_ref=clip_ref
                class="relative w-screen"
                style=move || format!("height: calc(100dvh + {}px);", distance.get())
            >
                <div class="sticky top-0 flex h-dvh w-screen items-center justify-center">
                    <div class="mask-clip-path about-me-img" style=move || mask.get()>
                        <BentoTilt
                            class_name="bento-tilt_1 relative mb-7 overflow-visible w-full h-full"
                            disabled=tilt_disabled
                        >
                            <div class="relative size-full">
                                <video
                                    node_ref=video_ref
                                    src=about.video.clone()
                                    muted=true
                                    autoplay=true
                                    playsinline=true
                                    class="absolute left-0 top-0 size-full object-cover object-center rounded-lg"
                                ></video>
                            </div>
                        </BentoTilt>
                    </div>
                </div>
            </div>
        </section>
    }
}
