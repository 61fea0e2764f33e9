//! Scroll-driven state for the navigation bar and the scrubbed section
//! animations (hero clip circle, about mask).

/// Probe line for section tracking, as a fraction of the viewport height.
pub const SECTION_PROBE_FRACTION: f64 = 0.3;
/// How far the hidden navigation bar is pushed up.
pub const NAV_HIDDEN_OFFSET_PX: f64 = -100.0;
pub const ABOUT_SCROLL_DESKTOP_PX: f64 = 800.0;
pub const ABOUT_SCROLL_MOBILE_PX: f64 = 400.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Hide-on-scroll-down, show-on-scroll-up navigation bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    last_y: f64,
    visible: bool,
    floating: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            last_y: 0.0,
            visible: true,
            floating: false,
        }
    }
}

impl NavState {
    pub fn on_scroll(&mut self, y: f64) {
        if y <= 0.0 {
            self.visible = true;
            self.floating = false;
        } else if y > self.last_y {
            self.visible = false;
            self.floating = true;
        } else if y < self.last_y {
            self.visible = true;
            self.floating = true;
        }
        self.last_y = y;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Detached from the top of the page; gets the floating backdrop.
    pub fn floating(&self) -> bool {
        self.floating
    }

    pub fn offset_y(&self) -> f64 {
        if self.visible {
            0.0
        } else {
            NAV_HIDDEN_OFFSET_PX
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// Section spanning the probe line. Later sections win when several do.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], viewport_height: f64) -> Option<&'a str> {
    let probe = viewport_height * SECTION_PROBE_FRACTION;
    sections
        .iter()
        .rev()
        .find(|s| s.top <= probe && s.bottom >= probe)
        .map(|s| s.id)
}

/// Linear position of `position` between `start` and `end`, clamped to [0, 1].
pub fn scrub_progress(start: f64, end: f64, position: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 {
        return if position >= end { 1.0 } else { 0.0 };
    }
    ((position - start) / span).clamp(0.0, 1.0)
}

pub fn ease_power3_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn ease_power1_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `circle(<radius>% at <x>% <y>%)` clip path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipCircle {
    pub radius_pct: f64,
    pub x_pct: f64,
    pub y_pct: f64,
}

pub const HERO_CLIP_START: ClipCircle = ClipCircle {
    radius_pct: 110.0,
    x_pct: 30.0,
    y_pct: 50.0,
};
pub const HERO_CLIP_END: ClipCircle = ClipCircle {
    radius_pct: 40.0,
    x_pct: 30.0,
    y_pct: 20.0,
};

impl ClipCircle {
    pub fn lerp(self, to: ClipCircle, t: f64) -> ClipCircle {
        ClipCircle {
            radius_pct: lerp(self.radius_pct, to.radius_pct, t),
            x_pct: lerp(self.x_pct, to.x_pct, t),
            y_pct: lerp(self.y_pct, to.y_pct, t),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "circle({}% at {}% {}%)",
            self.radius_pct, self.x_pct, self.y_pct
        )
    }
}

/// Scrub range of the hero: from its top reaching 10% of the viewport down
/// to its bottom leaving through the top edge.
pub fn hero_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    scrub_progress(-0.1 * viewport_height, height, -top)
}

pub fn hero_clip(progress: f64) -> ClipCircle {
    HERO_CLIP_START.lerp(HERO_CLIP_END, ease_power3_in_out(progress))
}

/// Size of the about-section video mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskFrame {
    pub width_vw: f64,
    pub height_svh: f64,
    pub radius_px: f64,
}

pub const MASK_START: MaskFrame = MaskFrame {
    width_vw: 40.0,
    height_svh: 60.0,
    radius_px: 24.0,
};
pub const MASK_END: MaskFrame = MaskFrame {
    width_vw: 100.0,
    height_svh: 100.0,
    radius_px: 0.0,
};

impl MaskFrame {
    pub fn at(progress: f64) -> MaskFrame {
        let t = ease_power1_out(progress);
        MaskFrame {
            width_vw: lerp(MASK_START.width_vw, MASK_END.width_vw, t),
            height_svh: lerp(MASK_START.height_svh, MASK_END.height_svh, t),
            radius_px: lerp(MASK_START.radius_px, MASK_END.radius_px, t),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "width: {}vw; height: {}svh; border-radius: {}px;",
            self.width_vw, self.height_svh, self.radius_px
        )
    }
}

pub fn about_scroll_distance(viewport_width: f64) -> f64 {
    if viewport_width < MOBILE_BREAKPOINT_PX {
        ABOUT_SCROLL_MOBILE_PX
    } else {
        ABOUT_SCROLL_DESKTOP_PX
    }
}

/// Starts once the clip block's center meets the viewport center.
pub fn about_progress(top: f64, height: f64, viewport_height: f64, distance: f64) -> f64 {
    let travelled = viewport_height / 2.0 - (top + height / 2.0);
    scrub_progress(0.0, distance, travelled)
}

/// Tilt stays on until the clip block has left through the top edge.
pub fn about_tilt_enabled(bottom: f64) -> bool {
    bottom > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_starts_visible() {
        let nav = NavState::default();
        assert!(nav.visible());
        assert!(!nav.floating());
        assert_eq!(nav.offset_y(), 0.0);
    }

    #[test]
    fn test_nav_hides_on_scroll_down_and_returns_on_scroll_up() {
        let mut nav = NavState::default();
        nav.on_scroll(120.0);
        assert!(!nav.visible());
        assert!(nav.floating());
        assert_eq!(nav.offset_y(), NAV_HIDDEN_OFFSET_PX);

        nav.on_scroll(80.0);
        assert!(nav.visible());
        assert!(nav.floating());

        // no movement keeps the current state
        nav.on_scroll(80.0);
        assert!(nav.visible());

        nav.on_scroll(0.0);
        assert!(nav.visible());
        assert!(!nav.floating());
    }

    #[test]
    fn test_active_section_uses_probe_line() {
        let sections = [
            SectionBounds {
                id: "home",
                top: -900.0,
                bottom: 100.0,
            },
            SectionBounds {
                id: "about",
                top: 100.0,
                bottom: 1100.0,
            },
            SectionBounds {
                id: "skills",
                top: 1100.0,
                bottom: 2100.0,
            },
        ];
        // probe at 300
        assert_eq!(active_section(&sections, 1000.0), Some("about"));
        assert_eq!(active_section(&sections[2..], 1000.0), None);
    }

    #[test]
    fn test_active_section_last_match_wins() {
        let sections = [
            SectionBounds {
                id: "outer",
                top: 0.0,
                bottom: 1000.0,
            },
            SectionBounds {
                id: "inner",
                top: 200.0,
                bottom: 400.0,
            },
        ];
        assert_eq!(active_section(&sections, 1000.0), Some("inner"));
    }

    #[test]
    fn test_scrub_progress() {
        assert_eq!(scrub_progress(0.0, 100.0, -5.0), 0.0);
        assert_eq!(scrub_progress(0.0, 100.0, 25.0), 0.25);
        assert_eq!(scrub_progress(0.0, 100.0, 500.0), 1.0);
        assert_eq!(scrub_progress(10.0, 10.0, 10.0), 1.0);
        assert_eq!(scrub_progress(10.0, 10.0, 9.0), 0.0);
    }

    #[test]
    fn test_power3_in_out() {
        assert_eq!(ease_power3_in_out(0.0), 0.0);
        assert_eq!(ease_power3_in_out(0.5), 0.5);
        assert_eq!(ease_power3_in_out(1.0), 1.0);
        assert!(ease_power3_in_out(0.25) < 0.25);
        assert!(ease_power3_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_hero_clip_endpoints() {
        assert_eq!(hero_clip(0.0), HERO_CLIP_START);
        assert_eq!(hero_clip(1.0), HERO_CLIP_END);
        assert_eq!(hero_clip(0.0).css(), "circle(110% at 30% 50%)");
        assert_eq!(hero_clip(1.0).css(), "circle(40% at 30% 20%)");
    }

    #[test]
    fn test_hero_progress_range() {
        // top at 10% of a 1000px viewport: start of the scrub
        assert_eq!(hero_progress(100.0, 1000.0, 1000.0), 0.0);
        // bottom at the top edge: end of the scrub
        assert_eq!(hero_progress(-1000.0, 1000.0, 1000.0), 1.0);
        let mid = hero_progress(-450.0, 1000.0, 1000.0);
        assert!((mid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mask_frame() {
        assert_eq!(MaskFrame::at(0.0), MASK_START);
        assert_eq!(MaskFrame::at(1.0), MASK_END);
        assert_eq!(
            MASK_END.css(),
            "width: 100vw; height: 100svh; border-radius: 0px;"
        );
    }

    #[test]
    fn test_about_scroll() {
        assert_eq!(about_scroll_distance(500.0), ABOUT_SCROLL_MOBILE_PX);
        assert_eq!(about_scroll_distance(1440.0), ABOUT_SCROLL_DESKTOP_PX);
        // centered block
        assert_eq!(about_progress(0.0, 1000.0, 1000.0, 800.0), 0.0);
        assert_eq!(about_progress(-400.0, 1000.0, 1000.0, 800.0), 0.5);
        assert!(about_tilt_enabled(10.0));
        assert!(!about_tilt_enabled(0.0));
    }
}
