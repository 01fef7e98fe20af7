//! Scene composition: badge plus side-text lines, ready to blit.
//!
//! Combines [`resolve`](crate::resolve) and
//! [`plan_text_region`](crate::plan_text_region) with the two opaque
//! collaborators (text rasterizer, window surface) into a [`Scene`]: the
//! badge rectangle and the ordered, restacked text lines. A composed scene
//! redraws by re-blitting only — no recomputation, no rasterizer calls.

use alloc::vec::Vec;

use crate::placement::{
    DEFAULT_TEXT_MARGIN, Location, Rect, Rgb, Size, TextFlow, plan_text_region, resolve,
};

/// One rasterized text line paired with its rectangle.
///
/// Produced by the rasterizer in reading order (top line first), already
/// left-aligned within the planned region width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line<I> {
    pub image: I,
    pub rect: Rect,
}

/// Where the rasterizer aligns wrapped lines within the planned bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineAlign {
    TopLeft,
    BottomLeft,
    Center,
}

/// Window surface collaborator: bounding rect query plus a top-left blit.
pub trait Surface {
    /// Opaque image handle the surface draws.
    type Image;

    /// The surface's bounding rectangle.
    fn bounds(&self) -> Rect;

    /// Draw `image` with its top-left corner at `top_left`.
    fn blit(&mut self, image: &Self::Image, top_left: (i32, i32));
}

/// Text rasterizer collaborator.
///
/// Wraps `text` within `bounds` and returns one [`Line`] per wrapped line,
/// stacked according to `align`, in reading order.
pub trait TextRasterizer {
    type Image;

    fn rasterize(
        &mut self,
        text: &str,
        color: Rgb,
        bounds: Rect,
        align: LineAlign,
    ) -> Vec<Line<Self::Image>>;
}

/// Restack lines into a contiguous downward run starting at `top`.
///
/// Each line's top edge is set to the previous line's bottom edge; order and
/// horizontal positions are untouched, so the result has no gaps and no
/// overlap.
pub fn stack_below<I>(lines: &mut [Line<I>], top: i32) {
    let mut last_bottom = top;
    for line in lines {
        line.rect.set_top(last_bottom);
        last_bottom = line.rect.bottom();
    }
}

/// A composed badge scene: everything needed to draw, cached for redraw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene<I> {
    /// The badge image handle.
    pub image: I,
    /// Resolved badge rectangle.
    pub image_rect: Rect,
    /// Side-text lines in drawing order. Empty when no side text is set.
    pub lines: Vec<Line<I>>,
    /// Whether lines were restacked below the badge.
    pub text_bottom: bool,
}

impl<I> Scene<I> {
    /// Compose a scene for one UI state.
    ///
    /// Resolves the badge rect, and — only when `side_text` is non-empty —
    /// plans the text region, rasterizes the lines bottom-left aligned, and
    /// restacks them from the badge's bottom edge when the plan calls for it.
    /// An empty `side_text` never touches the rasterizer.
    #[allow(clippy::too_many_arguments)]
    pub fn compose<R>(
        window: Rect,
        image: I,
        image_size: Size,
        location: Location,
        offset: (u32, u32),
        side_text: &str,
        flow: TextFlow,
        text_color: Rgb,
        rasterizer: &mut R,
    ) -> Self
    where
        R: TextRasterizer<Image = I>,
    {
        let image_rect = resolve(window, image_size, location, offset);

        let mut lines = Vec::new();
        let mut text_bottom = false;
        if !side_text.is_empty() {
            let region = plan_text_region(window, image_rect, location, flow, DEFAULT_TEXT_MARGIN);
            lines = rasterizer.rasterize(side_text, text_color, region.rect, LineAlign::BottomLeft);
            text_bottom = region.text_bottom;
            if text_bottom {
                stack_below(&mut lines, image_rect.bottom());
            }
        }

        Self {
            image,
            image_rect,
            lines,
            text_bottom,
        }
    }

    /// Blit the badge, then each line in reading order.
    ///
    /// Pure re-blit: drawing the same scene twice issues identical calls.
    pub fn draw<S>(&self, surface: &mut S)
    where
        S: Surface<Image = I>,
    {
        surface.blit(&self.image, self.image_rect.top_left());
        for line in &self.lines {
            surface.blit(&line.image, line.rect.top_left());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rasterizer stub: fixed-height lines stacked per the alignment hint,
    /// counting invocations.
    struct FakeRasterizer {
        line_count: usize,
        line_height: u32,
        calls: usize,
    }

    impl TextRasterizer for FakeRasterizer {
        type Image = u8;

        fn rasterize(
            &mut self,
            _text: &str,
            _color: Rgb,
            bounds: Rect,
            align: LineAlign,
        ) -> Vec<Line<u8>> {
            self.calls += 1;
            let n = self.line_count as i32;
            let h = self.line_height as i32;
            (0..self.line_count)
                .map(|i| {
                    let top = match align {
                        LineAlign::TopLeft => bounds.top() + i as i32 * h,
                        // Stack upward so the block ends at the bounds bottom.
                        LineAlign::BottomLeft => bounds.bottom() - (n - i as i32) * h,
                        LineAlign::Center => bounds.center_y() + (i as i32 - n / 2) * h,
                    };
                    Line {
                        image: i as u8,
                        rect: Rect::new(bounds.left(), top, bounds.width, self.line_height),
                    }
                })
                .collect()
        }
    }

    struct RecordingSurface {
        bounds: Rect,
        blits: Vec<(u8, (i32, i32))>,
    }

    impl Surface for RecordingSurface {
        type Image = u8;

        fn bounds(&self) -> Rect {
            self.bounds
        }

        fn blit(&mut self, image: &u8, top_left: (i32, i32)) {
            self.blits.push((*image, top_left));
        }
    }

    const WIN: Rect = Rect::new(0, 0, 800, 600);

    // ── stack_below ─────────────────────────────────────────────────────

    #[test]
    fn stack_below_is_contiguous_and_ordered() {
        let mut lines: Vec<Line<u8>> = (0..4)
            .map(|i| Line {
                image: i,
                rect: Rect::new(30, 100 - i as i32 * 17, 120, 24),
            })
            .collect();
        stack_below(&mut lines, 560);

        let mut expected_top = 560;
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.image, i as u8);
            assert_eq!(line.rect.top(), expected_top);
            assert_eq!(line.rect.left(), 30);
            expected_top = line.rect.bottom();
        }
    }

    #[test]
    fn stack_below_empty_is_noop() {
        let mut lines: Vec<Line<u8>> = Vec::new();
        stack_below(&mut lines, 0);
        assert!(lines.is_empty());
    }

    // ── Scene::compose ──────────────────────────────────────────────────

    #[test]
    fn empty_side_text_never_calls_rasterizer() {
        let mut raster = FakeRasterizer {
            line_count: 3,
            line_height: 24,
            calls: 0,
        };
        let scene = Scene::compose(
            WIN,
            7u8,
            Size::new(150, 150),
            Location::BottomLeft,
            (20, 40),
            "",
            TextFlow::LeftRight,
            Rgb::white(),
            &mut raster,
        );
        assert_eq!(raster.calls, 0);
        assert!(scene.lines.is_empty());
        assert!(!scene.text_bottom);
    }

    #[test]
    fn top_location_restacks_lines_from_badge_bottom() {
        let mut raster = FakeRasterizer {
            line_count: 3,
            line_height: 24,
            calls: 0,
        };
        let scene = Scene::compose(
            WIN,
            7u8,
            Size::new(150, 150),
            Location::TopLeft,
            (20, 40),
            "scan\nme\nnow",
            TextFlow::TopBottom,
            Rgb::white(),
            &mut raster,
        );
        assert_eq!(raster.calls, 1);
        assert!(scene.text_bottom);

        let mut expected_top = scene.image_rect.bottom();
        for line in &scene.lines {
            assert_eq!(line.rect.top(), expected_top);
            expected_top = line.rect.bottom();
        }
    }

    #[test]
    fn bottom_location_keeps_rasterizer_stacking() {
        let mut raster = FakeRasterizer {
            line_count: 2,
            line_height: 24,
            calls: 0,
        };
        let scene = Scene::compose(
            WIN,
            7u8,
            Size::new(150, 150),
            Location::BottomLeft,
            (20, 40),
            "scan me",
            TextFlow::LeftRight,
            Rgb::white(),
            &mut raster,
        );
        assert!(!scene.text_bottom);
        // Lines stay where the rasterizer put them: beside the badge,
        // ending at the region's bottom edge.
        assert_eq!(scene.lines[1].rect.bottom(), scene.image_rect.bottom());
        assert_eq!(scene.lines[0].rect.left(), scene.image_rect.right() + 10);
    }

    // ── Scene::draw ─────────────────────────────────────────────────────

    #[test]
    fn draw_blits_badge_then_lines_in_order() {
        let mut raster = FakeRasterizer {
            line_count: 2,
            line_height: 24,
            calls: 0,
        };
        let scene = Scene::compose(
            WIN,
            9u8,
            Size::new(150, 150),
            Location::TopRight,
            (20, 40),
            "hello",
            TextFlow::TopBottom,
            Rgb::white(),
            &mut raster,
        );
        let mut surface = RecordingSurface {
            bounds: WIN,
            blits: Vec::new(),
        };
        scene.draw(&mut surface);

        assert_eq!(surface.blits.len(), 3);
        assert_eq!(surface.blits[0], (9, scene.image_rect.top_left()));
        assert_eq!(surface.blits[1].0, 0);
        assert_eq!(surface.blits[2].0, 1);
    }

    #[test]
    fn draw_twice_is_idempotent() {
        let mut raster = FakeRasterizer {
            line_count: 3,
            line_height: 24,
            calls: 0,
        };
        let scene = Scene::compose(
            WIN,
            1u8,
            Size::new(150, 150),
            Location::TopLeft,
            (20, 40),
            "a\nb\nc",
            TextFlow::TopBottom,
            Rgb::white(),
            &mut raster,
        );
        let mut surface = RecordingSurface {
            bounds: WIN,
            blits: Vec::new(),
        };
        scene.draw(&mut surface);
        scene.draw(&mut surface);

        let (first, second) = surface.blits.split_at(surface.blits.len() / 2);
        assert_eq!(first, second);
    }
}
