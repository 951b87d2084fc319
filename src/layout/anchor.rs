use crate::foundation::core::{Point, Rect};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
/// Horizontal placement of a text block relative to its anchor.
pub enum HorizontalAlign {
    /// Left edge sits on the anchor.
    #[default]
    Left,
    /// Block is centered on the anchor.
    Center,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
/// Vertical placement of a text block relative to its anchor.
pub enum VerticalAlign {
    /// Top edge sits on the anchor.
    #[default]
    Top,
    /// Block is centered on the anchor.
    Center,
}

/// Compute the absolute rectangle a `width` x `height` block occupies when
/// placed at `anchor` with the given alignment pair.
///
/// Center alignment uses truncating integer division. The result is never
/// clamped; it may have negative coordinates or extend past any image —
/// clamping is the compositor's concern.
pub fn resolve_rect(
    anchor: Point,
    width: i32,
    height: i32,
    v_align: VerticalAlign,
    h_align: HorizontalAlign,
) -> Rect {
    let left = match h_align {
        HorizontalAlign::Left => anchor.x,
        HorizontalAlign::Center => anchor.x - width / 2,
    };
    let top = match v_align {
        VerticalAlign::Top => anchor.y,
        VerticalAlign::Center => anchor.y - height / 2,
    };
    Rect::from_min_size(Point::new(left, top), width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anchor.rs"]
mod tests;
