use leptos::{html, prelude::*};

use crate::content::SkillCard;
use crate::cursor::Point;
use crate::tilt::{spotlight, spotlight_vars, Tilt};

use super::element_rect;

fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Wrapper that leans toward the pointer while hovered.
#[component]
pub fn BentoTilt(
    #[prop(optional, into)] class_name: String,
    #[prop(optional)] disabled: Option<ReadSignal<bool>>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(None::<String>);

    let on_move = move |ev: web_sys::MouseEvent| {
        if disabled.is_some_and(|d| d.get_untracked()) {
            return;
        }
        let Some(el) = node_ref.get_untracked() else {
            return;
        };
        if let Some(tilt) = Tilt::from_pointer(element_rect(&el), client_point(&ev)) {
            set_transform.set(Some(tilt.css()));
        }
    };

    view! {
        <div
            node_ref=node_ref
            class=class_name
            on:mousemove=on_move
            on:mouseleave=move |_| set_transform.set(None)
            style=move || {
                transform.get().map(|t| format!("transform: {t};")).unwrap_or_default()
            }
        >
            {children()}
        </div>
    }
}

/// Skill card with a pointer-following spotlight and a scrolling strip of
/// technology icons.
#[component]
pub fn BentoCard(card: &'static SkillCard) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (local, set_local) = signal(Point::default());
    let (hovered, set_hovered) = signal(false);

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(el) = node_ref.get_untracked() else {
            return;
        };
        set_local.set(spotlight(element_rect(&el), client_point(&ev)));
    };

    // tripled so the vertical scroll loops without a gap
    let strip = std::iter::repeat(&card.icons)
        .take(3)
        .flatten()
        .map(|icon| {
            view! {
                <div class="group relative flex flex-col items-center">
                    <div class="transition-transform group-hover:scale-110 group-hover:text-white">
                        <i class=icon.class.clone()></i>
                    </div>
                    <span class="absolute top-full mt-1 w-max text-xs text-white/80 opacity-0 transition-opacity group-hover:opacity-100">
                        {icon.name.clone()}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=node_ref
            class="bento-card relative size-full overflow-hidden rounded-lg"
            style=move || spotlight_vars(local.get())
            on:mousemove=on_move
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div
                class="bento-spotlight pointer-events-none absolute inset-0 z-20 transition-opacity duration-300"
                style=move || if hovered.get() { "opacity: 1;" } else { "opacity: 0;" }
            ></div>
            <div class="relative size-full">
                <img
                    src=card.image.clone()
                    alt=card.title.clone()
                    loading="lazy"
                    class="absolute left-0 top-0 size-full rounded-lg object-cover object-center"
                />
                <div class="relative z-10 grid size-full grid-cols-3 flex-col justify-between p-5 text-white">
                    <div class="col-span-3">
                        <h1 class="bento-title">{card.title.clone()}</h1>
                        {card
                            .description
                            .clone()
                            .map(|d| {
                                view! { <p class="mt-3 max-w-[30rem] text-md md:text-base">{d}</p> }
                            })}
                    </div>
                    {(!card.icons.is_empty())
                        .then(|| {
                            view! {
                                <div class="absolute right-4 top-0 h-full w-20 overflow-hidden">
                                    <div class="animate-vertical-scroll flex flex-col gap-6 text-4xl text-white/40 md:text-5xl">
                                        {strip}
                                    </div>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
