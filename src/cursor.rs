//! Pointer tracking and trailing-dot math for the custom cursor.
//!
//! Everything in here is plain data so it can be driven from browser events
//! in `app::cursor` and exercised natively in tests.

use std::collections::VecDeque;

/// Number of raw pointer positions kept for heading smoothing.
pub const MAX_HISTORY: usize = 30;
/// Number of markers in the trailing chain (marker 0 is the invisible head).
pub const TRAIL_LEN: usize = 20;
/// Fraction of the remaining distance a marker covers per frame.
pub const TRAIL_EASE: f64 = 0.25;
/// The glyph is drawn pointing up, heading 0° points east.
pub const GLYPH_ALIGN_DEG: f64 = 90.0;
/// Location of the glyph tip inside its 28x28 viewbox.
pub const TIP_OFFSET_X: f64 = 12.0;
pub const TIP_OFFSET_Y: f64 = 11.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `factor` of the way from `self` toward `target`.
    pub fn lerp(self, target: Point, factor: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * factor,
            y: self.y + (target.y - self.y) * factor,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Arithmetic mean of the given points, `None` when there are none.
pub fn centroid<'a, I>(points: I) -> Option<Point>
where
    I: IntoIterator<Item = &'a Point>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Point::default(), 0usize), |(acc, n), p| {
            (Point::new(acc.x + p.x, acc.y + p.y), n + 1)
        });
    if count == 0 {
        return None;
    }
    Some(Point::new(sum.x / count as f64, sum.y / count as f64))
}

/// Angle in degrees of the vector `reference -> point`, screen coordinates
/// (y grows downward, so "south" is +90°).
pub fn heading_deg(reference: Point, point: Point) -> f64 {
    (point.y - reference.y).atan2(point.x - reference.x).to_degrees()
}

/// Rotation to apply to the up-pointing glyph so it faces the travel direction.
pub fn glyph_rotation_deg(reference: Point, point: Point) -> f64 {
    heading_deg(reference, point) + GLYPH_ALIGN_DEG
}

/// Bounded FIFO of recent raw pointer positions.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    points: VecDeque<Point>,
    capacity: usize,
}

impl PositionHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<Point> {
        self.points.back().copied()
    }

    /// Centroid of every entry except the newest one. Falls back to the
    /// newest entry while fewer than two points are recorded.
    pub fn reference_point(&self) -> Option<Point> {
        let latest = self.latest()?;
        if self.points.len() < 2 {
            return Some(latest);
        }
        centroid(self.points.iter().take(self.points.len() - 1))
    }
}

/// Position and rotation of the directional glyph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphPose {
    pub position: Point,
    pub rotation_deg: f64,
}

impl GlyphPose {
    /// CSS transform that moves the tip (not the top-left corner) onto the
    /// pointer. Pair with `top`/`left` set to the pointer position.
    pub fn transform(&self) -> String {
        format!(
            "translate(-{TIP_OFFSET_X}px, -{TIP_OFFSET_Y}px) rotate({}deg)",
            self.rotation_deg
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerUpdate {
    pub pose: GlyphPose,
    /// First move after the pointer left the viewport.
    pub reentered: bool,
}

/// Records pointer input and exposes the live position read by the frame loop.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    history: PositionHistory,
    live: Point,
    left_viewport: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

impl PointerTracker {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: PositionHistory::new(history_capacity),
            live: Point::default(),
            left_viewport: false,
        }
    }

    pub fn on_pointer_move(&mut self, point: Point) -> PointerUpdate {
        self.history.push(point);
        let reference = self.history.reference_point().unwrap_or(point);
        self.live = point;
        let reentered = std::mem::take(&mut self.left_viewport);
        PointerUpdate {
            pose: GlyphPose {
                position: point,
                rotation_deg: glyph_rotation_deg(reference, point),
            },
            reentered,
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.left_viewport = true;
    }

    pub fn live(&self) -> Point {
        self.live
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }
}

/// Fixed-size chain of markers, each easing toward its predecessor.
#[derive(Debug, Clone)]
pub struct TrailChain {
    markers: Vec<Point>,
    ease: f64,
}

impl Default for TrailChain {
    fn default() -> Self {
        Self::new(TRAIL_LEN)
    }
}

impl TrailChain {
    pub fn new(count: usize) -> Self {
        Self {
            markers: vec![Point::default(); count],
            ease: TRAIL_EASE,
        }
    }

    /// One frame: marker 0 eases toward `target`, every following marker
    /// eases toward the freshly updated position of the one before it.
    pub fn tick(&mut self, target: Point) {
        let mut target = target;
        for marker in self.markers.iter_mut() {
            *marker = marker.lerp(target, self.ease);
            target = *marker;
        }
    }

    /// Collapse the whole chain onto `target` without easing.
    pub fn snap(&mut self, target: Point) {
        self.markers.fill(target);
    }

    pub fn markers(&self) -> &[Point] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn opacity(&self, index: usize) -> f64 {
        marker_opacity(index, self.markers.len())
    }
}

/// Linear falloff along the chain: the head is opaque, the tail fades out.
pub fn marker_opacity(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (1.0 - index as f64 / count as f64).clamp(0.0, 1.0)
}

pub fn marker_transform(point: Point) -> String {
    format!("translate3d({}px, {}px, 0)", point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{a} != {b}");
    }

    #[test]
    fn test_history_is_bounded_fifo() {
        let mut history = PositionHistory::new(3);
        for i in 0..10 {
            history.push(Point::new(i as f64, 0.0));
            assert!(history.len() <= 3);
        }
        let xs: Vec<f64> = history.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_history_burst_never_exceeds_capacity() {
        let mut tracker = PointerTracker::default();
        for i in 0..1000 {
            tracker.on_pointer_move(Point::new(i as f64, (i * 2) as f64));
        }
        assert_eq!(tracker.history().len(), MAX_HISTORY);
        // oldest entries were dropped
        assert_eq!(
            tracker.history().iter().next().copied(),
            Some(Point::new(970.0, 1940.0))
        );
    }

    #[test]
    fn test_reference_point_excludes_latest() {
        let mut history = PositionHistory::new(30);
        assert_eq!(history.reference_point(), None);

        history.push(Point::new(5.0, 5.0));
        // single entry falls back to itself
        assert_eq!(history.reference_point(), Some(Point::new(5.0, 5.0)));

        history.push(Point::new(15.0, 5.0));
        history.push(Point::new(100.0, 100.0));
        assert_eq!(history.reference_point(), Some(Point::new(10.0, 5.0)));
    }

    #[test]
    fn test_centroid() {
        let none: [Point; 0] = [];
        assert_eq!(centroid(&none), None);
        let pts = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 6.0)];
        assert_eq!(centroid(&pts), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_heading_quadrants() {
        let origin = Point::new(10.0, 10.0);
        assert_close(heading_deg(origin, Point::new(20.0, 10.0)), 0.0);
        assert_close(heading_deg(origin, Point::new(10.0, 20.0)), 90.0);
        assert_close(heading_deg(origin, Point::new(0.0, 10.0)), 180.0);
        assert_close(heading_deg(origin, Point::new(10.0, 0.0)), -90.0);
        assert_close(heading_deg(origin, Point::new(20.0, 20.0)), 45.0);
    }

    #[test]
    fn test_glyph_rotation_adds_alignment() {
        let origin = Point::default();
        // moving east turns the up-pointing glyph to face right
        assert_close(glyph_rotation_deg(origin, Point::new(1.0, 0.0)), 90.0);
        // moving north leaves it upright
        assert_close(glyph_rotation_deg(origin, Point::new(0.0, -1.0)), 0.0);
    }

    #[test]
    fn test_first_move_has_no_heading() {
        let mut tracker = PointerTracker::default();
        let update = tracker.on_pointer_move(Point::new(40.0, 60.0));
        // reference == point, atan2(0, 0) == 0
        assert_close(update.pose.rotation_deg, GLYPH_ALIGN_DEG);
        assert_eq!(update.pose.position, Point::new(40.0, 60.0));
        assert_eq!(tracker.live(), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_tracker_heading_follows_motion() {
        let mut tracker = PointerTracker::default();
        tracker.on_pointer_move(Point::new(0.0, 0.0));
        tracker.on_pointer_move(Point::new(0.0, 10.0));
        let update = tracker.on_pointer_move(Point::new(0.0, 20.0));
        // reference is (0, 5): travelling straight down
        assert_close(update.pose.rotation_deg, 180.0);
    }

    #[test]
    fn test_reentry_reported_once() {
        let mut tracker = PointerTracker::default();
        assert!(!tracker.on_pointer_move(Point::new(1.0, 1.0)).reentered);
        tracker.on_pointer_leave();
        assert!(tracker.on_pointer_move(Point::new(2.0, 2.0)).reentered);
        assert!(!tracker.on_pointer_move(Point::new(3.0, 3.0)).reentered);
    }

    #[test]
    fn test_glyph_transform() {
        let pose = GlyphPose {
            position: Point::new(1.0, 2.0),
            rotation_deg: 45.0,
        };
        assert_eq!(pose.transform(), "translate(-12px, -11px) rotate(45deg)");
    }

    #[test]
    fn test_chain_length_is_fixed() {
        let mut chain = TrailChain::default();
        assert_eq!(chain.len(), TRAIL_LEN);
        for i in 0..50 {
            chain.tick(Point::new(i as f64 * 3.0, -(i as f64)));
            assert_eq!(chain.len(), TRAIL_LEN);
        }
        chain.snap(Point::new(1.0, 1.0));
        assert_eq!(chain.len(), TRAIL_LEN);
    }

    #[test]
    fn test_tick_applies_exact_recurrence() {
        let mut chain = TrailChain::new(4);
        chain.snap(Point::new(0.0, 0.0));
        chain.tick(Point::new(8.0, 16.0));

        let before = chain.markers().to_vec();
        let target = Point::new(100.0, -40.0);
        chain.tick(target);

        let mut expected_target = target;
        for (prior, now) in before.iter().zip(chain.markers()) {
            let expected = Point::new(
                prior.x + 0.25 * (expected_target.x - prior.x),
                prior.y + 0.25 * (expected_target.y - prior.y),
            );
            assert_eq!(*now, expected);
            expected_target = *now;
        }
    }

    #[test]
    fn test_chain_converges_on_stationary_target() {
        let mut chain = TrailChain::default();
        let target = Point::new(300.0, 200.0);
        let mut prev: Vec<f64> = chain.markers().iter().map(|m| m.distance(target)).collect();
        for _ in 0..400 {
            chain.tick(target);
            let now: Vec<f64> = chain.markers().iter().map(|m| m.distance(target)).collect();
            for (p, n) in prev.iter().zip(now.iter()) {
                if *p > 1e-6 {
                    assert!(n < p, "distance should shrink: {n} >= {p}");
                }
            }
            prev = now;
        }
        for marker in chain.markers() {
            assert!(marker.distance(target) < 1e-3);
        }
    }

    #[test]
    fn test_head_leads_tail() {
        let mut chain = TrailChain::default();
        let target = Point::new(100.0, 0.0);
        for _ in 0..5 {
            chain.tick(target);
        }
        let xs: Vec<f64> = chain.markers().iter().map(|m| m.x).collect();
        assert!(xs.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_snap_has_zero_residual() {
        let mut chain = TrailChain::default();
        for i in 0..10 {
            chain.tick(Point::new(i as f64 * 50.0, 10.0));
        }
        let live = Point::new(640.0, 360.0);
        chain.snap(live);
        assert!(chain.markers().iter().all(|m| *m == live));
    }

    #[test]
    fn test_opacity_falloff() {
        let chain = TrailChain::new(20);
        assert_close(chain.opacity(0), 1.0);
        assert_close(chain.opacity(10), 0.5);
        assert_close(chain.opacity(19), 0.05);
        assert_close(marker_opacity(3, 0), 0.0);
    }

    #[test]
    fn test_marker_transform() {
        assert_eq!(
            marker_transform(Point::new(1.5, -2.0)),
            "translate3d(1.5px, -2px, 0)"
        );
    }
}
