use std::collections::BTreeMap;

use crate::geom::{Point, Rect};

/// The resolved, clipped screen-space area a node may draw into. This is the
/// record the render collaborator reads; the core only writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Visible rectangle in window coordinates, already clipped to the parent.
    pub rect: Rect,
    /// Width clipped away on the left edge.
    pub left_cut_off: u32,
    /// Height clipped away on the top edge.
    pub top_cut_off: u32,
    /// Effective visibility: own flag and every ancestor's.
    pub visible: bool,
    /// Resolved z order.
    pub z: i32,
}

impl Viewport {
    /// Does the viewport rectangle contain a window-space point?
    pub fn contains(&self, p: impl Into<Point>) -> bool {
        self.rect.contains_point(p)
    }

    /// Window-space origin of the node's unclipped content.
    pub fn content_origin(&self) -> Point {
        Point::new(
            self.rect.tl.x - self.left_cut_off as i32,
            self.rect.tl.y - self.top_cut_off as i32,
        )
    }
}

/// An RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Keys for a node's drawables. The fixed variants cover what every widget
/// kind needs; `Custom` is for genuinely per-instance extras.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpriteKey {
    /// Fill behind everything, sized to the node by the core.
    Background,
    /// Outline.
    Border,
    /// Main content.
    Content,
    /// Decoration drawn over the content.
    Overlay,
    /// Anything else.
    Custom(String),
}

/// A drawable owned by a node. Coordinates are local to the node's
/// unclipped content origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
    /// Area covered, in local coordinates.
    pub rect: Rect,
    /// Solid fill, if any.
    pub fill: Option<Color>,
    /// Text payload; shaping is the collaborator's job.
    pub text: Option<String>,
    /// Sprite-level visibility, combined with the viewport's by the renderer.
    pub visible: bool,
    /// Origin shift compensating for clipping, so content scrolls under the
    /// clip instead of being squashed into it.
    pub origin: Point,
}

impl Sprite {
    /// A visible solid rectangle.
    pub fn filled(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            fill: Some(color),
            text: None,
            visible: true,
            origin: Point::zero(),
        }
    }

    /// A visible text run.
    pub fn text(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            fill: None,
            text: Some(text.into()),
            visible: true,
            origin: Point::zero(),
        }
    }
}

/// Per-node drawable table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteSet {
    /// Sprites in key order, which is also draw order.
    sprites: BTreeMap<SpriteKey, Sprite>,
    /// Origin applied to every sprite inserted or compensated.
    origin: Point,
}

impl SpriteSet {
    /// Insert or replace a sprite. The current cut-off compensation is applied.
    pub fn set(&mut self, key: SpriteKey, mut sprite: Sprite) {
        sprite.origin = self.origin;
        self.sprites.insert(key, sprite);
    }

    /// Borrow a sprite.
    pub fn get(&self, key: &SpriteKey) -> Option<&Sprite> {
        self.sprites.get(key)
    }

    /// Mutably borrow a sprite.
    pub fn get_mut(&mut self, key: &SpriteKey) -> Option<&mut Sprite> {
        self.sprites.get_mut(key)
    }

    /// Remove a sprite.
    pub fn remove(&mut self, key: &SpriteKey) -> Option<Sprite> {
        self.sprites.remove(key)
    }

    /// Iterate in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (&SpriteKey, &Sprite)> {
        self.sprites.iter()
    }

    /// Number of sprites.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// True if there are no sprites.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// The compensation origin currently applied.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Shift every sprite's origin to compensate for left/top clipping.
    pub(crate) fn compensate(&mut self, left_cut_off: u32, top_cut_off: u32) {
        self.origin = Point::new(-(left_cut_off as i32), -(top_cut_off as i32));
        for sprite in self.sprites.values_mut() {
            sprite.origin = self.origin;
        }
    }

    /// Resize the background fill, if the node has one.
    pub(crate) fn fit_background(&mut self, w: u32, h: u32) {
        if let Some(bg) = self.sprites.get_mut(&SpriteKey::Background) {
            bg.rect = Rect::new(0, 0, w, h);
        }
    }
}
