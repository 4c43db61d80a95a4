//! Render output
//!
//! A [`ScrollbarFrame`] is the complete visual state the host needs to draw the
//! scrollbar: where the wrapper sits, the track and thumb boxes, and the state
//! markers that drive styling.

use thumbrail_core::{Axis, AxisPair, Point, Rect};

use crate::geometry::{Geometry, TrackStyle};

/// Boolean styling markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StateMarkers {
    pub active_x: bool,
    pub active_y: bool,
    pub hover: bool,
    pub scrolling_x: bool,
    pub scrolling_y: bool,
}

impl StateMarkers {
    pub fn is_active(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.active_x,
            Axis::Vertical => self.active_y,
        }
    }

    pub fn is_scrolling(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.scrolling_x,
            Axis::Vertical => self.scrolling_y,
        }
    }

    pub(crate) fn set_scrolling(&mut self, axis: Axis, scrolling: bool) {
        match axis {
            Axis::Horizontal => self.scrolling_x = scrolling,
            Axis::Vertical => self.scrolling_y = scrolling,
        }
    }
}

/// Derived visual state of the scrollbar
///
/// Track rects are relative to the wrapper origin, thumb rects to their track.
/// Track rects exclude margins: the host applies its own track margins on top.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollbarFrame {
    /// Wrapper position in the host's scrolled content coordinates
    pub origin: Point,
    pub track_x: Rect,
    pub thumb_x: Rect,
    pub track_y: Rect,
    pub thumb_y: Rect,
    pub markers: StateMarkers,
}

impl ScrollbarFrame {
    /// Lay out the wrapper, tracks and thumbs for the current geometry
    ///
    /// The wrapper follows the host's native scroll offset so it stays pinned
    /// over the visible container. `track_offsets` shifts the horizontal track
    /// down and the vertical track right.
    pub fn build(
        geometry: &Geometry,
        styles: &AxisPair<TrackStyle>,
        host_scroll: Point,
        track_offsets: AxisPair<f64>,
        mut markers: StateMarkers,
    ) -> Self {
        let container = geometry.container();
        let x = geometry.axis(Axis::Horizontal);
        let y = geometry.axis(Axis::Vertical);
        let x_thickness = styles.horizontal.thickness;
        let y_thickness = styles.vertical.thickness;

        markers.active_x = x.active;
        markers.active_y = y.active;

        Self {
            origin: Point::new(host_scroll.x + container.left, host_scroll.y + container.top),
            track_x: Rect::new(
                0.0,
                container.height - x_thickness + track_offsets.horizontal,
                x.track_size,
                x_thickness,
            ),
            thumb_x: Rect::new(x.thumb_position, 0.0, x.thumb_size, x_thickness),
            track_y: Rect::new(
                container.width - y_thickness + track_offsets.vertical,
                0.0,
                y_thickness,
                y.track_size,
            ),
            thumb_y: Rect::new(0.0, y.thumb_position, y_thickness, y.thumb_size),
            markers,
        }
    }

    pub fn track(&self, axis: Axis) -> Rect {
        match axis {
            Axis::Horizontal => self.track_x,
            Axis::Vertical => self.track_y,
        }
    }

    pub fn thumb(&self, axis: Axis) -> Rect {
        match axis {
            Axis::Horizontal => self.thumb_x,
            Axis::Vertical => self.thumb_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryInput;
    use thumbrail_core::Size;

    fn geometry() -> Geometry {
        let mut geometry = Geometry::compute(&GeometryInput {
            container: Rect::new(10.0, 20.0, 200.0, 100.0),
            content: Size::new(800.0, 100.0),
            enabled: AxisPair::splat(true),
            track_styles: AxisPair::splat(TrackStyle::default()),
            activation_epsilon: 0.5,
        });
        geometry.set_offsets(AxisPair::new(300.0, 0.0));
        geometry
    }

    #[test]
    fn test_layout_follows_geometry() {
        let styles = AxisPair::splat(TrackStyle::new(0.0, 0.0, 6.0));
        let frame = ScrollbarFrame::build(
            &geometry(),
            &styles,
            Point::new(5.0, 7.0),
            AxisPair::new(3.0, -2.0),
            StateMarkers::default(),
        );

        assert_eq!(frame.origin, Point::new(15.0, 27.0));
        assert_eq!(frame.track_x, Rect::new(0.0, 97.0, 200.0, 6.0));
        assert_eq!(frame.thumb_x, Rect::new(75.0, 0.0, 50.0, 6.0));
        assert_eq!(frame.track_y, Rect::new(192.0, 0.0, 6.0, 0.0));
        assert_eq!(frame.thumb(Axis::Vertical).height, 0.0);
    }

    #[test]
    fn test_active_markers_come_from_geometry() {
        let markers = StateMarkers {
            active_y: true,
            hover: true,
            ..Default::default()
        };
        let frame = ScrollbarFrame::build(
            &geometry(),
            &AxisPair::default(),
            Point::ZERO,
            AxisPair::default(),
            markers,
        );

        assert!(frame.markers.is_active(Axis::Horizontal));
        assert!(!frame.markers.is_active(Axis::Vertical));
        assert!(frame.markers.hover);
        assert!(!frame.markers.is_scrolling(Axis::Horizontal));
    }
}
