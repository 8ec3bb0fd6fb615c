use gpui::{prelude::*, *};

use crate::placement::{PointerDirection, POINTER_HEIGHT, POINTER_WIDTH};

/// Triangle pointing from the popover toward its anchor (not an Entity - painted in place)
pub struct PointerGlyph {
    direction: PointerDirection,
    color: Hsla,
}

impl PointerGlyph {
    pub fn new(direction: PointerDirection, color: impl Into<Hsla>) -> Self {
        Self {
            direction,
            color: color.into(),
        }
    }
}

/// Apex first, then the two base corners
pub fn triangle_points(
    bounds: Bounds<Pixels>,
    direction: PointerDirection,
) -> [Point<Pixels>; 3] {
    let left = bounds.left();
    let right = bounds.right();
    let top = bounds.top();
    let bottom = bounds.bottom();
    let mid = left + bounds.size.width / 2.0;

    match direction {
        PointerDirection::Up => [point(mid, top), point(right, bottom), point(left, bottom)],
        PointerDirection::Down => [point(mid, bottom), point(left, top), point(right, top)],
    }
}

fn triangle_path(bounds: Bounds<Pixels>, direction: PointerDirection) -> Option<Path<Pixels>> {
    let [apex, first, second] = triangle_points(bounds, direction);
    let mut builder = PathBuilder::fill();
    builder.move_to(apex);
    builder.line_to(first);
    builder.line_to(second);
    builder.close();
    builder.build().ok()
}

impl IntoElement for PointerGlyph {
    type Element = AnyElement;

    fn into_element(self) -> Self::Element {
        let direction = self.direction;
        let color = self.color;

        div()
            .w(px(POINTER_WIDTH))
            .h(px(POINTER_HEIGHT))
            .child(
                canvas(
                    |_, _, _| {},
                    move |bounds, _, window, _| {
                        if let Some(path) = triangle_path(bounds, direction) {
                            window.paint_path(path, color);
                        }
                    },
                )
                .size_full(),
            )
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::prelude::v1::test;

    fn glyph_bounds() -> Bounds<Pixels> {
        Bounds::new(point(px(92.0), px(687.0)), size(px(16.0), px(16.0)))
    }

    #[test]
    fn up_pointer_apex_is_on_top() {
        let [apex, a, b] = triangle_points(glyph_bounds(), PointerDirection::Up);
        assert_eq!(apex, point(px(100.0), px(687.0)));
        assert_eq!(a.y, px(703.0));
        assert_eq!(b.y, px(703.0));
    }

    #[test]
    fn down_pointer_apex_is_on_bottom() {
        let [apex, a, b] = triangle_points(glyph_bounds(), PointerDirection::Down);
        assert_eq!(apex, point(px(100.0), px(703.0)));
        assert_eq!(a, point(px(92.0), px(687.0)));
        assert_eq!(b, point(px(108.0), px(687.0)));
    }
}
