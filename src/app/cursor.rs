use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_document_visibility, use_event_listener, use_raf_fn, use_window, utils::Pausable,
};
use wasm_bindgen::JsCast;
use web_sys::VisibilityState;

use crate::cursor::{
    marker_opacity, marker_transform, GlyphPose, Point, PointerTracker, TrailChain, TIP_OFFSET_X,
    TIP_OFFSET_Y, TRAIL_LEN,
};

use super::set_style;

fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

fn touch_point(ev: &web_sys::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(touch.client_x() as f64, touch.client_y() as f64))
}

fn root_element() -> Option<web_sys::HtmlElement> {
    document()
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Replaces the native cursor with a directional arrow and a fading
/// trail of dots that follows it.
#[component]
pub fn CursorEffect() -> impl IntoView {
    let tracker = StoredValue::new(PointerTracker::default());
    let chain = StoredValue::new(TrailChain::new(TRAIL_LEN));
    // index-aligned with the chain's markers
    let marker_refs: Vec<NodeRef<html::Div>> = (0..TRAIL_LEN).map(|_| NodeRef::new()).collect();
    let handles = StoredValue::new(marker_refs.clone());
    let (pose, set_pose) = signal(GlyphPose::default());
    let (seen, set_seen) = signal(false);

    let paint_chain = move || {
        chain.with_value(|chain| {
            handles.with_value(|handles| {
                for (point, handle) in chain.markers().iter().zip(handles) {
                    if let Some(el) = handle.get_untracked() {
                        set_style(&el, "transform", &marker_transform(*point));
                    }
                }
            })
        })
    };

    let snap_to_pointer = move || {
        let live = tracker.with_value(|t| t.live());
        chain.update_value(|c| c.snap(live));
        paint_chain();
    };

    let pointer_moved = move |point: Point| {
        let Some(update) = tracker.try_update_value(|t| t.on_pointer_move(point)) else {
            return;
        };
        set_pose.set(update.pose);
        if !seen.get_untracked() {
            set_seen.set(true);
        }
        if update.reentered {
            snap_to_pointer();
        }
    };

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        pointer_moved(mouse_point(&ev))
    });
    let _ = use_event_listener(use_window(), ev::touchmove, move |ev| {
        if let Some(point) = touch_point(&ev) {
            pointer_moved(point);
        }
    });
    let _ = use_event_listener(use_window(), ev::mouseout, move |ev| {
        if ev.related_target().is_none() {
            tracker.update_value(|t| t.on_pointer_leave());
        }
    });

    let visibility = use_document_visibility();
    Effect::watch(
        move || visibility.get(),
        move |state, _, _| {
            if *state == VisibilityState::Visible {
                snap_to_pointer();
            }
        },
        false,
    );

    let Pausable { pause, .. } = use_raf_fn(move |_| {
        let target = tracker.with_value(|t| t.live());
        chain.update_value(|c| c.tick(target));
        paint_chain();
    });
    on_cleanup(move || {
        pause();
        log::debug!("cursor trail loop stopped");
    });

    Effect::new(move |_| {
        let Some(root) = root_element() else {
            return;
        };
        let previous = root
            .style()
            .get_property_value("cursor")
            .unwrap_or_default();
        set_style(&root, "cursor", "none");
        on_cleanup(move || {
            if let Some(root) = root_element() {
                set_style(&root, "cursor", &previous);
            }
        });
    });

    let glyph_style = move || {
        let GlyphPose { position, .. } = pose.get();
        format!(
            "position: fixed; top: {}px; left: {}px; transform: {}; transform-origin: {TIP_OFFSET_X}px {TIP_OFFSET_Y}px; transition: transform 12ms linear; z-index: 9999; visibility: {};",
            position.y,
            position.x,
            pose.get().transform(),
            if seen.get() { "visible" } else { "hidden" },
        )
    };

    view! {
        {marker_refs
            .into_iter()
            .enumerate()
            .map(|(i, node_ref)| {
                let size = if i == 0 { "0px" } else { "6px" };
                let color = if i == 0 { "transparent" } else { "white" };
                let style = format!(
                    "width: {size}; height: {size}; background-color: {color}; transform: translate3d(0, 0, 0); transition: none; opacity: {:.2}; z-index: 9998;",
                    marker_opacity(i, TRAIL_LEN),
                );
                view! {
                    <div
                        node_ref=node_ref
                        class="fixed top-0 left-0 pointer-events-none rounded-full flex items-center justify-center"
                        style=style
                    ></div>
                }
            })
            .collect_view()}
        <svg
            width="28"
            height="28"
            viewBox="0 0 28 28"
            class="pointer-events-none select-none"
            style=glyph_style
        >
            <polygon fill="#FFF" points="8,21 8,5 20,17 13,17 12.5,16.8" />
            <polygon fill="#FFF" points="17,22 14,23 9,12 13,10.5" />
            <rect
                x="12.5"
                y="14"
                transform="rotate(-22 13.5 18)"
                width="2"
                height="8"
                fill="#FFF"
            />
            <polygon fill="#FFF" points="9.5,7.5 9.5,18.5 12.5,15.5 12.5,15 17,15" />
        </svg>
    }
}
