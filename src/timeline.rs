//! Scroll position to timeline progress mapping for the experience section.

/// Fraction of the viewport height where a card counts as reached.
pub const ACTIVATION_FRACTION: f64 = 0.6;
/// Portion of the viewport subtracted from the container height.
pub const TAIL_FRACTION: f64 = 0.4;
/// Extra scroll needed before progress starts moving.
pub const LEAD_OFFSET_PX: f64 = 100.0;

/// Viewport-relative geometry of the scrolled container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    /// `getBoundingClientRect().top` of the container.
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

/// How far through the container the reader is, clamped to `[0, 1]`.
pub fn scroll_progress(geometry: ScrollGeometry) -> f64 {
    let activation = geometry.viewport_height * ACTIVATION_FRACTION;
    let scrollable = geometry.container_height - geometry.viewport_height * TAIL_FRACTION;
    let distance = activation - geometry.container_top - LEAD_OFFSET_PX;
    if scrollable <= 0.0 {
        return if distance > 0.0 { 1.0 } else { 0.0 };
    }
    (distance / scrollable).clamp(0.0, 1.0)
}

/// Layout box of a timeline node relative to its offset parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeBox {
    pub offset_top: f64,
    pub offset_height: f64,
}

impl NodeBox {
    pub fn center(&self) -> f64 {
        self.offset_top + self.offset_height / 2.0
    }
}

/// Height of the progress fill: from the top of the wrapper down to a point
/// between the first and last node centers.
pub fn fill_height(progress: f64, first: NodeBox, last: NodeBox) -> f64 {
    let start = first.center();
    let end = last.center();
    start + (end - start) * progress.clamp(0.0, 1.0)
}

/// Index of the furthest reached entry, `None` when there are no entries.
pub fn active_index(progress: f64, count: usize) -> Option<usize> {
    let last = count.checked_sub(1)?;
    let index = (progress.clamp(0.0, 1.0) * count as f64).floor() as usize;
    Some(index.min(last))
}

/// Entries up to and including the active one are highlighted.
pub fn is_active(index: usize, active: Option<usize>) -> bool {
    active.is_some_and(|a| index <= a)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineFrame {
    pub progress: f64,
    pub fill_height: f64,
    pub active_index: Option<usize>,
}

impl TimelineFrame {
    /// Everything the timeline renders for one scroll position. `None` when
    /// there are no nodes to measure.
    pub fn compute(geometry: ScrollGeometry, nodes: &[NodeBox]) -> Option<Self> {
        let first = *nodes.first()?;
        let last = *nodes.last()?;
        let progress = scroll_progress(geometry);
        Some(Self {
            progress,
            fill_height: fill_height(progress, first, last),
            active_index: active_index(progress, nodes.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(top: f64) -> ScrollGeometry {
        ScrollGeometry {
            container_top: top,
            container_height: 2000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_progress_bounds() {
        // container still far below the activation line
        assert_eq!(scroll_progress(geometry(5000.0)), 0.0);
        // container scrolled far past
        assert_eq!(scroll_progress(geometry(-10000.0)), 1.0);
        // activation 600, scrollable 1600, top -300 => distance 800
        assert!((scroll_progress(geometry(-300.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_progress_monotonic_while_scrolling_down() {
        let mut last = 0.0;
        // scrolling down moves the container up the viewport
        for step in 0..400 {
            let top = 2000.0 - step as f64 * 15.0;
            let p = scroll_progress(geometry(top));
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last, "progress went backwards at top={top}");
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_progress_short_container() {
        let g = ScrollGeometry {
            container_top: 0.0,
            container_height: 100.0,
            viewport_height: 1000.0,
        };
        // scrollable distance is negative, distance is positive
        assert_eq!(scroll_progress(g), 1.0);
        let g = ScrollGeometry {
            container_top: 900.0,
            ..g
        };
        assert_eq!(scroll_progress(g), 0.0);
    }

    #[test]
    fn test_fill_height_spans_node_centers() {
        let first = NodeBox {
            offset_top: 0.0,
            offset_height: 40.0,
        };
        let last = NodeBox {
            offset_top: 480.0,
            offset_height: 40.0,
        };
        assert_eq!(fill_height(0.0, first, last), 20.0);
        assert_eq!(fill_height(1.0, first, last), 500.0);
        assert_eq!(fill_height(0.5, first, last), 260.0);
        assert_eq!(fill_height(7.0, first, last), 500.0);
    }

    #[test]
    fn test_active_index() {
        assert_eq!(active_index(0.5, 0), None);
        assert_eq!(active_index(0.0, 5), Some(0));
        assert_eq!(active_index(0.19, 5), Some(0));
        assert_eq!(active_index(0.2, 5), Some(1));
        assert_eq!(active_index(0.99, 5), Some(4));
        // floor(1.0 * 5) == 5 is clamped to the last entry
        assert_eq!(active_index(1.0, 5), Some(4));
    }

    #[test]
    fn test_is_active_is_cumulative() {
        let active = Some(2);
        let flags: Vec<bool> = (0..5).map(|i| is_active(i, active)).collect();
        assert_eq!(flags, vec![true, true, true, false, false]);
        assert!(!is_active(0, None));
    }

    #[test]
    fn test_frame_requires_nodes() {
        assert_eq!(TimelineFrame::compute(geometry(0.0), &[]), None);

        let nodes: Vec<NodeBox> = (0..5)
            .map(|i| NodeBox {
                offset_top: i as f64 * 120.0,
                offset_height: 40.0,
            })
            .collect();
        let frame = TimelineFrame::compute(geometry(-10000.0), &nodes).unwrap();
        assert_eq!(frame.progress, 1.0);
        assert_eq!(frame.fill_height, 500.0);
        assert_eq!(frame.active_index, Some(4));
    }
}
