// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the items container around the control.

use core::fmt;

use kurbo::Rect;

/// Distances from a control to the viewport edges, plus the control's size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Boundaries {
    /// Distance from the viewport top to the control's top edge.
    pub top: f64,
    /// Distance from the control's bottom edge to the viewport bottom.
    pub bottom: f64,
    /// Distance from the viewport left to the control's left edge.
    pub left: f64,
    /// Distance from the control's right edge to the viewport right.
    pub right: f64,
    /// Control width.
    pub width: f64,
    /// Control height.
    pub height: f64,
}

impl Boundaries {
    /// Measure `element` against `viewport`. Both rects must share a coordinate space.
    pub fn new(viewport: Rect, element: Rect) -> Self {
        Self {
            top: element.y0 - viewport.y0,
            bottom: viewport.y1 - element.y1,
            left: element.x0 - viewport.x0,
            right: viewport.x1 - element.x1,
            width: element.width(),
            height: element.height(),
        }
    }
}

/// Vertical side of the control the items container opens towards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum YAxis {
    /// Above the control.
    Top,
    /// Below the control.
    #[default]
    Bottom,
}

impl YAxis {
    /// Attribute-style name (`"top"` or `"bottom"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Positioning scheme of the items container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Relative to the control.
    #[default]
    Absolute,
    /// Relative to the viewport.
    Fixed,
}

impl Position {
    /// CSS-style name (`"absolute"` or `"fixed"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
        }
    }
}

/// One edge offset of the items container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Inset {
    /// No offset on this edge.
    #[default]
    Unset,
    /// Offset in pixels.
    Px(f64),
    /// Offset as a percentage of the containing block.
    Percent(f64),
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Where and how large the items container should render.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    /// Side the container opens towards.
    pub y_axis: YAxis,
    /// Maximum container height: the larger free distance.
    pub max_height: f64,
    /// Positioning scheme.
    pub position: Position,
    /// Top edge offset.
    pub top: Inset,
    /// Bottom edge offset.
    pub bottom: Inset,
    /// Left edge offset.
    pub left: Inset,
    /// Right edge offset.
    pub right: Inset,
}

impl Placement {
    /// Compute the placement for a control measured at `b`.
    ///
    /// Opens upward only when there is strictly more room above than below.
    pub fn compute(b: &Boundaries, fixed_position: bool) -> Self {
        let y_axis = if b.top > b.bottom {
            YAxis::Top
        } else {
            YAxis::Bottom
        };
        let max_height = b.top.max(b.bottom);

        if fixed_position {
            let (top, bottom) = match y_axis {
                YAxis::Top => (Inset::Unset, Inset::Px(b.bottom + b.height)),
                YAxis::Bottom => (Inset::Px(b.top + b.height), Inset::Unset),
            };
            Self {
                y_axis,
                max_height,
                position: Position::Fixed,
                top,
                bottom,
                left: Inset::Px(b.left),
                right: Inset::Px(b.right),
            }
        } else {
            let (top, bottom) = match y_axis {
                YAxis::Top => (Inset::Unset, Inset::Percent(100.0)),
                YAxis::Bottom => (Inset::Percent(100.0), Inset::Unset),
            };
            Self {
                y_axis,
                max_height,
                position: Position::Absolute,
                top,
                bottom,
                left: Inset::Px(0.0),
                right: Inset::Px(0.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn measures_edge_distances() {
        let b = Boundaries::new(viewport(), Rect::new(100.0, 400.0, 300.0, 440.0));
        assert_eq!(b.top, 400.0);
        assert_eq!(b.bottom, 160.0);
        assert_eq!(b.left, 100.0);
        assert_eq!(b.right, 500.0);
        assert_eq!(b.height, 40.0);
        assert_eq!(b.width, 200.0);
    }

    #[test]
    fn ties_open_downward() {
        let b = Boundaries::new(viewport(), Rect::new(0.0, 280.0, 100.0, 320.0));
        assert_eq!(b.top, b.bottom);
        let p = Placement::compute(&b, false);
        assert_eq!(p.y_axis, YAxis::Bottom);
        assert_eq!(p.max_height, 280.0);
    }

    #[test]
    fn fixed_placement_near_bottom_opens_upward() {
        let b = Boundaries::new(viewport(), Rect::new(100.0, 400.0, 300.0, 440.0));
        let p = Placement::compute(&b, true);
        assert_eq!(p.y_axis, YAxis::Top);
        assert_eq!(p.position, Position::Fixed);
        assert_eq!(p.max_height, 400.0);
        assert_eq!(p.top, Inset::Unset);
        // Anchored at the control's top edge, measured from the viewport bottom.
        assert_eq!(p.bottom, Inset::Px(200.0));
        assert_eq!(p.left, Inset::Px(100.0));
        assert_eq!(p.right, Inset::Px(500.0));
    }

    #[test]
    fn fixed_placement_near_top_opens_downward() {
        let b = Boundaries::new(viewport(), Rect::new(0.0, 50.0, 100.0, 80.0));
        let p = Placement::compute(&b, true);
        assert_eq!(p.y_axis, YAxis::Bottom);
        assert_eq!(p.top, Inset::Px(80.0));
        assert_eq!(p.bottom, Inset::Unset);
    }

    #[test]
    fn absolute_placement_uses_full_offsets() {
        let b = Boundaries::new(viewport(), Rect::new(0.0, 500.0, 100.0, 550.0));
        let p = Placement::compute(&b, false);
        assert_eq!(p.position, Position::Absolute);
        assert_eq!(p.bottom, Inset::Percent(100.0));
        assert_eq!(p.top, Inset::Unset);
        assert_eq!((p.left, p.right), (Inset::Px(0.0), Inset::Px(0.0)));
    }

    #[test]
    fn insets_render_as_css_values() {
        assert_eq!(Inset::Px(12.5).to_string(), "12.5px");
        assert_eq!(Inset::Percent(100.0).to_string(), "100%");
        assert_eq!(Inset::Unset.to_string(), "unset");
    }
}
