//! Badge placement: anchor resolution and side-text region planning.
//!
//! Translates a symbolic anchor location (corner / mid-edge, with a left or
//! right qualifier for the mid-edge variants) plus a pixel offset into a
//! concrete rectangle for the badge image, and plans the bounding region for
//! an adjacent multi-line text block. Pure geometry — no pixel operations,
//! no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use qrlayout::{Location, Rect, Size, resolve};
//!
//! let window = Rect::new(0, 0, 800, 600);
//! let badge = resolve(window, Size::new(150, 150), Location::BottomLeft, (20, 40));
//!
//! // Offset pushes the badge inward from the bottom-left corner.
//! assert_eq!(badge.bottom_left(), (20, 560));
//! assert_eq!(badge.top_left(), (20, 410));
//! ```

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with signed position and unsigned size.
///
/// Positions may go negative: placement never clamps to the container, a
/// location that pushes the rectangle partially outside is permitted.
///
/// Edges are exclusive on the far side (`right = x + width`,
/// `bottom = y + height`) and the horizontal midpoint uses floor division,
/// so anchor reads and writes round-trip exactly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rect's dimensions.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Construct a rect of the given size with the named anchor point at `pos`.
    pub fn anchored(size: Size, anchor: Primary, pos: (i32, i32)) -> Self {
        let mut rect = Self::new(0, 0, size.width, size.height);
        match anchor {
            Primary::TopLeft => rect.set_top_left(pos),
            Primary::TopRight => rect.set_top_right(pos),
            Primary::BottomLeft => rect.set_bottom_left(pos),
            Primary::BottomRight => rect.set_bottom_right(pos),
            Primary::MidTop => rect.set_mid_top(pos),
            Primary::MidBottom => rect.set_mid_bottom(pos),
        }
        rect
    }

    // ---- Edges ----

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Horizontal midpoint (floor).
    pub const fn center_x(&self) -> i32 {
        self.x + (self.width / 2) as i32
    }

    /// Vertical midpoint (floor).
    pub const fn center_y(&self) -> i32 {
        self.y + (self.height / 2) as i32
    }

    // ---- Named anchor points ----

    pub const fn top_left(&self) -> (i32, i32) {
        (self.left(), self.top())
    }

    pub const fn top_right(&self) -> (i32, i32) {
        (self.right(), self.top())
    }

    pub const fn bottom_left(&self) -> (i32, i32) {
        (self.left(), self.bottom())
    }

    pub const fn bottom_right(&self) -> (i32, i32) {
        (self.right(), self.bottom())
    }

    pub const fn mid_top(&self) -> (i32, i32) {
        (self.center_x(), self.top())
    }

    pub const fn mid_bottom(&self) -> (i32, i32) {
        (self.center_x(), self.bottom())
    }

    pub const fn center(&self) -> (i32, i32) {
        (self.center_x(), self.center_y())
    }

    // ---- Anchor setters (reposition, size preserved) ----

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width as i32;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height as i32;
    }

    pub fn set_center_x(&mut self, cx: i32) {
        self.x = cx - (self.width / 2) as i32;
    }

    pub fn set_center_y(&mut self, cy: i32) {
        self.y = cy - (self.height / 2) as i32;
    }

    pub fn set_top_left(&mut self, pos: (i32, i32)) {
        self.set_left(pos.0);
        self.set_top(pos.1);
    }

    pub fn set_top_right(&mut self, pos: (i32, i32)) {
        self.set_right(pos.0);
        self.set_top(pos.1);
    }

    pub fn set_bottom_left(&mut self, pos: (i32, i32)) {
        self.set_left(pos.0);
        self.set_bottom(pos.1);
    }

    pub fn set_bottom_right(&mut self, pos: (i32, i32)) {
        self.set_right(pos.0);
        self.set_bottom(pos.1);
    }

    pub fn set_mid_top(&mut self, pos: (i32, i32)) {
        self.set_center_x(pos.0);
        self.set_top(pos.1);
    }

    pub fn set_mid_bottom(&mut self, pos: (i32, i32)) {
        self.set_center_x(pos.0);
        self.set_bottom(pos.1);
    }

    pub fn set_center(&mut self, pos: (i32, i32)) {
        self.set_center_x(pos.0);
        self.set_center_y(pos.1);
    }
}

/// Opaque RGB color handed to the collaborators (QR encoder, text rasterizer).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White, the default QR foreground.
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Black, the default QR background.
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Formats as `#rrggbb`, the form QR encoding backends typically accept.
impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Symbolic anchor location for the badge.
///
/// Decomposes into a [`Primary`] anchor and, for the four mid-edge variants,
/// a [`Sub`] qualifier selecting which side of the midpoint the badge sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MidTopLeft,
    MidTopRight,
    MidBottomLeft,
    MidBottomRight,
}

impl Location {
    /// All valid locations, in config-documentation order.
    pub const ALL: [Location; 8] = [
        Location::TopLeft,
        Location::TopRight,
        Location::BottomLeft,
        Location::BottomRight,
        Location::MidTopLeft,
        Location::MidTopRight,
        Location::MidBottomLeft,
        Location::MidBottomRight,
    ];

    /// The corner or mid-edge component.
    pub const fn primary(&self) -> Primary {
        match self {
            Location::TopLeft => Primary::TopLeft,
            Location::TopRight => Primary::TopRight,
            Location::BottomLeft => Primary::BottomLeft,
            Location::BottomRight => Primary::BottomRight,
            Location::MidTopLeft | Location::MidTopRight => Primary::MidTop,
            Location::MidBottomLeft | Location::MidBottomRight => Primary::MidBottom,
        }
    }

    /// The left/right qualifier. Present only for the mid-edge variants.
    pub const fn sub(&self) -> Option<Sub> {
        match self {
            Location::MidTopLeft | Location::MidBottomLeft => Some(Sub::Left),
            Location::MidTopRight | Location::MidBottomRight => Some(Sub::Right),
            _ => None,
        }
    }

    /// The configuration spelling (`"midtop-left"` etc.).
    pub const fn name(&self) -> &'static str {
        match self {
            Location::TopLeft => "topleft",
            Location::TopRight => "topright",
            Location::BottomLeft => "bottomleft",
            Location::BottomRight => "bottomright",
            Location::MidTopLeft => "midtop-left",
            Location::MidTopRight => "midtop-right",
            Location::MidBottomLeft => "midbottom-left",
            Location::MidBottomRight => "midbottom-right",
        }
    }
}

/// The corner or mid-edge component of a [`Location`].
///
/// Determines which container anchor point seeds the resolution and the sign
/// of offset application (top adds dy, bottom subtracts; left adds dx,
/// everything else — including the mid edges — subtracts).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primary {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MidTop,
    MidBottom,
}

impl Primary {
    /// Read the matching named anchor point of `rect`.
    pub const fn point_on(&self, rect: &Rect) -> (i32, i32) {
        match self {
            Primary::TopLeft => rect.top_left(),
            Primary::TopRight => rect.top_right(),
            Primary::BottomLeft => rect.bottom_left(),
            Primary::BottomRight => rect.bottom_right(),
            Primary::MidTop => rect.mid_top(),
            Primary::MidBottom => rect.mid_bottom(),
        }
    }

    /// Whether the anchor sits on the top edge.
    pub const fn is_top(&self) -> bool {
        matches!(self, Primary::TopLeft | Primary::TopRight | Primary::MidTop)
    }

    /// Whether the anchor sits on the left edge.
    pub const fn is_left(&self) -> bool {
        matches!(self, Primary::TopLeft | Primary::BottomLeft)
    }
}

/// Left/right qualifier for mid-edge locations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sub {
    Left,
    Right,
}

/// How side text flows relative to the badge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextFlow {
    /// Text runs beside the badge, top-aligned to it.
    #[default]
    LeftRight,
    /// Text stacks above or below the badge.
    TopBottom,
}

impl TextFlow {
    /// All valid flow modes, in config-documentation order.
    pub const ALL: [TextFlow; 2] = [TextFlow::LeftRight, TextFlow::TopBottom];

    /// The configuration spelling.
    pub const fn name(&self) -> &'static str {
        match self {
            TextFlow::LeftRight => "left-right",
            TextFlow::TopBottom => "top-bottom",
        }
    }
}

/// Planned bounding region for the side-text block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextRegion {
    /// Bounds the rasterizer should wrap lines within.
    pub rect: Rect,
    /// True when lines must be restacked downward from the badge's bottom
    /// edge; false when the rasterizer's own alignment already stacked them.
    pub text_bottom: bool,
}

/// Default gap in pixels between the badge and its side text.
pub const DEFAULT_TEXT_MARGIN: u32 = 10;

/// Resolve the badge rectangle for a symbolic location within a container.
///
/// Reads the container anchor point named by the location's primary anchor,
/// pushes it inward by `offset` (top anchors add dy, bottom anchors subtract;
/// left anchors add dx, all others subtract), applies the mid-edge sub-anchor
/// shift (`-width/2` for left, `+width/2 + 2·dx` for right), and returns a
/// rect of `image` size with its *primary* anchor point at the result.
///
/// Total: no clamping, no failure modes. Out-of-container placements are the
/// caller's responsibility.
pub fn resolve(container: Rect, image: Size, location: Location, offset: (u32, u32)) -> Rect {
    let primary = location.primary();
    let (dx, dy) = (offset.0 as i32, offset.1 as i32);
    let (mut px, mut py) = primary.point_on(&container);

    if primary.is_top() {
        py += dy;
    } else {
        py -= dy;
    }
    if primary.is_left() {
        px += dx;
    } else {
        px -= dx;
    }

    // Mid-edge variants straddle the midpoint: the left qualifier pulls the
    // anchor half an image back, the right one pushes it half an image plus
    // twice the horizontal offset forward, keeping the pair gap-symmetric.
    if let Some(sub) = location.sub() {
        match sub {
            Sub::Left => px -= (image.width / 2) as i32,
            Sub::Right => px += (image.width / 2) as i32 + 2 * dx,
        }
    }

    Rect::anchored(image, primary, (px, py))
}

/// Plan the bounding region for the side-text block next to a resolved badge.
///
/// The region is always `container.width / 6` wide and as tall as the badge.
/// In [`TextFlow::LeftRight`] the region sits beside the badge, top-aligned:
/// left primaries put it to the badge's right, right primaries right-align it
/// against the badge's left edge, and mid-edge locations defer the choice to
/// their sub-anchor. In [`TextFlow::TopBottom`] the region is left-aligned to
/// the badge; top primaries hang it off the badge's bottom edge (setting
/// `text_bottom`), bottom primaries end it at the badge's top edge.
pub fn plan_text_region(
    container: Rect,
    image_rect: Rect,
    location: Location,
    flow: TextFlow,
    margin: u32,
) -> TextRegion {
    let mut rect = Rect::new(0, 0, container.width / 6, image_rect.height);
    let margin = margin as i32;
    let mut text_bottom = false;

    match flow {
        TextFlow::LeftRight => {
            rect.set_top(image_rect.top());
            let beside_right = match location.sub() {
                Some(Sub::Left) => false,
                Some(Sub::Right) => true,
                None => location.primary().is_left(),
            };
            if beside_right {
                rect.set_left(image_rect.right() + margin);
            } else {
                rect.set_right(image_rect.left() - margin);
            }
        }
        TextFlow::TopBottom => {
            rect.set_left(image_rect.left());
            if location.primary().is_top() {
                rect.set_top(image_rect.bottom());
                text_bottom = true;
            } else {
                rect.set_bottom(image_rect.top());
            }
        }
    }

    TextRegion { rect, text_bottom }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN: Rect = Rect::new(0, 0, 800, 600);
    const QR: Size = Size::new(150, 150);

    // ── Rect anchors ────────────────────────────────────────────────────

    #[test]
    fn rect_edges_exclusive() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.top_right(), (40, 20));
        assert_eq!(r.bottom_left(), (10, 60));
    }

    #[test]
    fn rect_mid_points_floor() {
        let r = Rect::new(0, 0, 151, 151);
        assert_eq!(r.mid_top(), (75, 0));
        assert_eq!(r.center(), (75, 75));
    }

    #[test]
    fn rect_anchor_set_preserves_size() {
        let mut r = Rect::new(0, 0, 30, 40);
        r.set_bottom_right((100, 100));
        assert_eq!(r, Rect::new(70, 60, 30, 40));
        r.set_mid_top((50, 0));
        assert_eq!(r, Rect::new(35, 0, 30, 40));
    }

    #[test]
    fn rect_anchor_roundtrip() {
        for primary in [
            Primary::TopLeft,
            Primary::TopRight,
            Primary::BottomLeft,
            Primary::BottomRight,
            Primary::MidTop,
            Primary::MidBottom,
        ] {
            let r = Rect::anchored(Size::new(33, 47), primary, (120, -5));
            assert_eq!(primary.point_on(&r), (120, -5), "{primary:?}");
            assert_eq!(r.size(), Size::new(33, 47));
        }
    }

    #[test]
    fn rect_negative_positions_allowed() {
        let r = Rect::anchored(Size::new(200, 50), Primary::MidTop, (40, 0));
        assert_eq!(r.left(), -60);
    }

    // ── resolve: corner anchors ─────────────────────────────────────────

    #[test]
    fn zero_offset_identity_on_corners() {
        for (loc, primary) in [
            (Location::TopLeft, Primary::TopLeft),
            (Location::TopRight, Primary::TopRight),
            (Location::BottomLeft, Primary::BottomLeft),
            (Location::BottomRight, Primary::BottomRight),
        ] {
            let r = resolve(WIN, QR, loc, (0, 0));
            assert_eq!(primary.point_on(&r), primary.point_on(&WIN), "{loc:?}");
        }
    }

    #[test]
    fn bottomleft_concrete_scenario() {
        // 800×600 container, 150×150 badge, offset (20, 40).
        let r = resolve(WIN, QR, Location::BottomLeft, (20, 40));
        assert_eq!(r.bottom_left(), (20, 560));
        assert_eq!(r.top_left(), (20, 410));
    }

    #[test]
    fn topright_offset_pushes_inward() {
        let r = resolve(WIN, QR, Location::TopRight, (20, 40));
        assert_eq!(r.top_right(), (780, 40));
    }

    #[test]
    fn offsets_monotonic_inward() {
        let near = resolve(WIN, QR, Location::BottomRight, (10, 10));
        let far = resolve(WIN, QR, Location::BottomRight, (25, 30));
        assert!(far.right() < near.right());
        assert!(far.bottom() < near.bottom());

        let near = resolve(WIN, QR, Location::TopLeft, (10, 10));
        let far = resolve(WIN, QR, Location::TopLeft, (25, 30));
        assert!(far.left() > near.left());
        assert!(far.top() > near.top());
    }

    // ── resolve: mid-edge anchors ───────────────────────────────────────

    #[test]
    fn midtop_right_concrete_scenario() {
        // Mid-top seed x = 400, horizontal offset -20, sub shift +75 + 2·20.
        let r = resolve(WIN, QR, Location::MidTopRight, (20, 40));
        assert_eq!(r.mid_top(), (495, 40));
        assert_eq!(r.left(), 420);
    }

    #[test]
    fn midtop_left_concrete_scenario() {
        let r = resolve(WIN, QR, Location::MidTopLeft, (20, 40));
        assert_eq!(r.mid_top(), (305, 40));
        assert_eq!(r.right(), 380);
    }

    #[test]
    fn mid_pair_symmetric_around_midpoint() {
        // left.right == right.left - 2·dx for every offset.
        for dx in [0u32, 5, 20, 33] {
            let l = resolve(WIN, QR, Location::MidTopLeft, (dx, 40));
            let r = resolve(WIN, QR, Location::MidTopRight, (dx, 40));
            assert_eq!(l.right(), r.left() - 2 * dx as i32, "dx={dx}");
        }
    }

    #[test]
    fn midbottom_offsets_subtract_vertically() {
        let r = resolve(WIN, QR, Location::MidBottomLeft, (20, 40));
        assert_eq!(r.bottom(), 560);
    }

    // ── plan_text_region: left-right flow ───────────────────────────────

    #[test]
    fn left_right_region_tracks_badge_top_and_height() {
        let qr = resolve(WIN, QR, Location::BottomLeft, (20, 40));
        let region = plan_text_region(WIN, qr, Location::BottomLeft, TextFlow::LeftRight, 10);
        assert_eq!(region.rect.top(), qr.top());
        assert_eq!(region.rect.height, qr.height);
        assert_eq!(region.rect.width, WIN.width / 6);
        assert!(!region.text_bottom);
    }

    #[test]
    fn left_primary_puts_text_right_of_badge() {
        let qr = resolve(WIN, QR, Location::TopLeft, (20, 40));
        let region = plan_text_region(WIN, qr, Location::TopLeft, TextFlow::LeftRight, 10);
        assert_eq!(region.rect.left(), qr.right() + 10);
    }

    #[test]
    fn right_primary_right_aligns_text_against_badge() {
        let qr = resolve(WIN, QR, Location::BottomRight, (20, 40));
        let region = plan_text_region(WIN, qr, Location::BottomRight, TextFlow::LeftRight, 10);
        assert_eq!(region.rect.right(), qr.left() - 10);
    }

    #[test]
    fn mid_sub_anchor_overrides_side_choice() {
        // Sub-anchor, not the primary, decides the side for mid locations.
        let qr = resolve(WIN, QR, Location::MidTopLeft, (20, 40));
        let region = plan_text_region(WIN, qr, Location::MidTopLeft, TextFlow::LeftRight, 10);
        assert_eq!(region.rect.right(), qr.left() - 10);

        let qr = resolve(WIN, QR, Location::MidTopRight, (20, 40));
        let region = plan_text_region(WIN, qr, Location::MidTopRight, TextFlow::LeftRight, 10);
        assert_eq!(region.rect.left(), qr.right() + 10);
    }

    // ── plan_text_region: top-bottom flow ───────────────────────────────

    #[test]
    fn top_primary_stacks_text_below() {
        for loc in [Location::TopLeft, Location::TopRight, Location::MidTopLeft] {
            let qr = resolve(WIN, QR, loc, (20, 40));
            let region = plan_text_region(WIN, qr, loc, TextFlow::TopBottom, 10);
            assert!(region.text_bottom, "{loc:?}");
            assert_eq!(region.rect.top(), qr.bottom());
            assert_eq!(region.rect.left(), qr.left());
        }
    }

    #[test]
    fn bottom_primary_ends_text_at_badge_top() {
        for loc in [
            Location::BottomLeft,
            Location::BottomRight,
            Location::MidBottomRight,
        ] {
            let qr = resolve(WIN, QR, loc, (20, 40));
            let region = plan_text_region(WIN, qr, loc, TextFlow::TopBottom, 10);
            assert!(!region.text_bottom, "{loc:?}");
            assert_eq!(region.rect.bottom(), qr.top());
            assert_eq!(region.rect.left(), qr.left());
        }
    }

    // ── Location / TextFlow vocabulary ──────────────────────────────────

    #[test]
    fn location_decomposition() {
        assert_eq!(Location::BottomLeft.primary(), Primary::BottomLeft);
        assert_eq!(Location::BottomLeft.sub(), None);
        assert_eq!(Location::MidBottomRight.primary(), Primary::MidBottom);
        assert_eq!(Location::MidBottomRight.sub(), Some(Sub::Right));
    }

    #[test]
    fn location_names_roundtrip_through_all() {
        let mut seen = [""; 8];
        for (i, loc) in Location::ALL.iter().enumerate() {
            seen[i] = loc.name();
        }
        assert!(seen.contains(&"midtop-left"));
        assert!(seen.contains(&"bottomright"));
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(format!("{}", Rgb::white()), "#ffffff");
        assert_eq!(format!("{}", Rgb::new(255, 0, 128)), "#ff0080");
    }
}
