use crate::foundation::error::{TextplateError, TextplateResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Integer pixel coordinate in image space; components may be negative.
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Construct a point from its components.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Axis-aligned integer rectangle; `bottom_right >= top_left` component-wise.
pub struct Rect {
    /// Top-left corner.
    pub top_left: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
}

impl Rect {
    /// Construct a rectangle from its corners.
    pub fn new(top_left: Point, bottom_right: Point) -> TextplateResult<Self> {
        if bottom_right.x < top_left.x || bottom_right.y < top_left.y {
            return Err(TextplateError::validation(
                "Rect bottom_right must be >= top_left",
            ));
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Construct a rectangle from its top-left corner and non-negative extents.
    ///
    /// Negative extents are clamped to zero.
    pub fn from_min_size(top_left: Point, width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            top_left,
            bottom_right: Point::new(top_left.x + width, top_left.y + height),
        }
    }

    /// Left edge.
    pub fn left(self) -> i32 {
        self.top_left.x
    }

    /// Top edge.
    pub fn top(self) -> i32 {
        self.top_left.y
    }

    /// Right edge (exclusive).
    pub fn right(self) -> i32 {
        self.bottom_right.x
    }

    /// Bottom edge (exclusive).
    pub fn bottom(self) -> i32 {
        self.bottom_right.y
    }

    /// Horizontal extent; never negative.
    pub fn width(self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Vertical extent; never negative.
    pub fn height(self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            top_left: Point::new(
                self.top_left.x.min(other.top_left.x),
                self.top_left.y.min(other.top_left.y),
            ),
            bottom_right: Point::new(
                self.bottom_right.x.max(other.bottom_right.x),
                self.bottom_right.y.max(other.bottom_right.y),
            ),
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
/// Straight-alpha RGBA8 color (r, g, b not premultiplied by a).
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Construct a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}
