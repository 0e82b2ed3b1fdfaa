//! Core geometry types for the orbit engine

use serde::{Deserialize, Serialize};

/// A point in page coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Widths of the four edges of a CSS box (padding or border)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxEdges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BoxEdges {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same width on every edge
    pub fn uniform(width: f64) -> Self {
        Self::new(width, width, width, width)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Snapshot of an element's box as measured by the host.
///
/// `page_x`/`page_y` locate the top-left corner of the border box in document
/// coordinates. `width`/`height` are the content size; padding and border are
/// kept separately because only centering takes them into account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(rename = "x")]
    pub page_x: f64,
    #[serde(rename = "y")]
    pub page_y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: BoxEdges,
    #[serde(default)]
    pub border: BoxEdges,
}

impl Rect {
    pub fn new(page_x: f64, page_y: f64, width: f64, height: f64) -> Self {
        Self {
            page_x,
            page_y,
            width,
            height,
            padding: BoxEdges::default(),
            border: BoxEdges::default(),
        }
    }

    /// A rectangle of the given size at the page origin
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn with_padding(mut self, padding: BoxEdges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: BoxEdges) -> Self {
        self.border = border;
        self
    }

    /// Width including padding and border
    pub fn outer_width(&self) -> f64 {
        self.width + self.padding.horizontal() + self.border.horizontal()
    }

    /// Height including padding and border
    pub fn outer_height(&self) -> f64 {
        self.height + self.padding.vertical() + self.border.vertical()
    }

    /// Page-space center, snapped to whole pixels from the top-left corner.
    ///
    /// Border widths count as extra padding here and nowhere else.
    pub fn center(&self) -> Point {
        Point {
            x: self.page_x + (self.outer_width() / 2.0).round(),
            y: self.page_y + (self.outer_height() / 2.0).round(),
        }
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// True when either content dimension is zero, negative or not a number
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// The side of the anchor a tooltip is placed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Top and bottom slide along x; left and right slide along y
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// A corner of the anchor rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Direction (+1 or -1) of travel along the tangential axis of `side`
    /// when sliding toward this corner.
    ///
    /// x grows to the right and y grows downward, so heading for a right-hand
    /// corner along a horizontal side is positive, and heading for a bottom
    /// corner along a vertical side is positive.
    pub fn sign_along(self, side: Side) -> f64 {
        let positive = if side.is_horizontal() {
            matches!(self, Corner::TopRight | Corner::BottomRight)
        } else {
            matches!(self, Corner::BottomRight | Corner::BottomLeft)
        };
        if positive {
            1.0
        } else {
            -1.0
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomRight => "bottom-right",
            Corner::BottomLeft => "bottom-left",
        }
    }
}
