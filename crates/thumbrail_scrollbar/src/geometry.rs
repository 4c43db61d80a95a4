//! Scrollbar geometry
//!
//! Pure derivation of track and thumb sizes from container size, content size
//! and track styling. Nothing here touches the host; the widget feeds inputs in
//! and reads the result back when it renders.

use thumbrail_core::{Axis, AxisPair, Rect, Size};

/// Track styling read from the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackStyle {
    /// Leading margin along the track axis (left for X, top for Y)
    pub margin_start: f64,
    /// Trailing margin along the track axis (right for X, bottom for Y)
    pub margin_end: f64,
    /// Rendered thickness across the track axis
    pub thickness: f64,
}

impl TrackStyle {
    pub fn new(margin_start: f64, margin_end: f64, thickness: f64) -> Self {
        Self {
            margin_start,
            margin_end,
            thickness,
        }
    }

    pub fn margins(&self) -> f64 {
        self.margin_start + self.margin_end
    }
}

/// Everything the geometry depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryInput {
    pub container: Rect,
    pub content: Size,
    pub enabled: AxisPair<bool>,
    pub track_styles: AxisPair<TrackStyle>,
    pub activation_epsilon: f64,
}

/// Derived geometry for one axis
///
/// Inactive axes have every size set to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisGeometry {
    pub active: bool,
    pub track_size: f64,
    pub thumb_size: f64,
    pub thumb_position: f64,
}

impl AxisGeometry {
    /// Room the thumb can travel within the track
    pub fn travel(&self) -> f64 {
        (self.track_size - self.thumb_size).max(0.0)
    }
}

/// Derived geometry for both axes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    container: Rect,
    content: Size,
    axes: AxisPair<AxisGeometry>,
}

impl Geometry {
    /// Derive activation, track and thumb sizes. Thumb positions start at 0;
    /// see [`Geometry::set_offsets`].
    pub fn compute(input: &GeometryInput) -> Self {
        let axis_geometry = |axis: Axis| {
            let container = input.container.size().along(axis).max(0.0);
            let content = input.content.along(axis);
            let active =
                *input.enabled.get(axis) && content > container + input.activation_epsilon;
            if !active {
                return AxisGeometry::default();
            }

            let track_size = (container - input.track_styles.get(axis).margins()).max(0.0);
            AxisGeometry {
                active,
                track_size,
                thumb_size: track_size * container / content,
                thumb_position: 0.0,
            }
        };

        Self {
            container: input.container,
            content: input.content,
            axes: AxisPair::new(
                axis_geometry(Axis::Horizontal),
                axis_geometry(Axis::Vertical),
            ),
        }
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn content(&self) -> Size {
        self.content
    }

    pub fn axis(&self, axis: Axis) -> &AxisGeometry {
        self.axes.get(axis)
    }

    pub fn is_active(&self, axis: Axis) -> bool {
        self.axes.get(axis).active
    }

    pub fn active(&self) -> AxisPair<bool> {
        AxisPair::new(
            self.is_active(Axis::Horizontal),
            self.is_active(Axis::Vertical),
        )
    }

    /// Largest valid offset on an axis
    pub fn max_offset(&self, axis: Axis) -> f64 {
        self.scrollable(axis).max(0.0)
    }

    /// Content pixels moved per pixel of thumb travel, if the thumb can move
    pub fn scroll_ratio(&self, axis: Axis) -> Option<f64> {
        let travel = self.axis(axis).travel();
        (travel > 0.0).then(|| self.scrollable(axis) / travel)
    }

    /// Place both thumbs for the given offsets
    pub fn set_offsets(&mut self, offsets: AxisPair<f64>) {
        for axis in Axis::ALL {
            let scrollable = self.scrollable(axis);
            let geometry = self.axes.get_mut(axis);
            if !geometry.active || scrollable <= 0.0 {
                geometry.thumb_position = 0.0;
                continue;
            }

            let travel = geometry.track_size - geometry.thumb_size;
            let position = *offsets.get(axis) * travel / scrollable;
            geometry.thumb_position = position.min(travel).max(0.0);
        }
    }

    fn scrollable(&self, axis: Axis) -> f64 {
        self.content.along(axis) - self.container.size().along(axis)
    }
}
