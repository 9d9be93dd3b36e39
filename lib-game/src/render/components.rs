use std::borrow::Cow;

use macroquad::prelude::*;

use super::Margins;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct TextureKey(pub &'static str);

/// Places the entity on the virtual screen. The position is
/// the top-left corner of whatever gets drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub pos: Vec2,
}

impl Transform {
    pub const IDENTITY: Self = Self { pos: Vec2::ZERO };

    pub fn from_pos(pos: Vec2) -> Self {
        Self { pos }
    }
}

/// Tags the entity to be drawn with a certain color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Tint(pub Color);

/// Position of the entity in the draw sequence. Assigned by
/// [crate::Render::put], items are drawn in the order they were put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DrawOrder(pub u32);

/// Draws a texture, or a part of it.
///
/// Requires [Transform] to work. Can read [Tint], by default
/// the texture is drawn as is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub texture: TextureKey,
    /// Region of the texture. The whole texture when unset.
    pub source: Option<Rect>,
    /// Size on screen. The size of the source region when unset.
    pub size: Option<Vec2>,
}

impl Sprite {
    pub fn new(texture: TextureKey) -> Self {
        Self {
            texture,
            source: None,
            size: None,
        }
    }

    pub fn with_source(mut self, source: Rect) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }
}

/// Draws a texture region stretched as a nine-patch: the corners keep
/// their size, the edges stretch along one axis and the middle along both.
///
/// Requires [Transform] to work.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NinePatch {
    pub texture: TextureKey,
    pub source: Rect,
    pub margins: Margins,
    pub size: Vec2,
}

/// A filled rectangle with rounded corners. `roundness` goes from
/// 0.0 (sharp) to 1.0 (the short side becomes a half-circle).
///
/// Requires [Transform] to work.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub size: Vec2,
    pub roundness: f32,
}

/// A rectangle outline.
///
/// Requires [Transform] to work.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectLines {
    pub size: Vec2,
    pub thickness: f32,
}

/// Draws some text with the default font.
///
/// Requires [Transform] to work.
///
/// Can read [Tint], but it is optional. By default the text is
/// drawn as white.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphText {
    pub string: Cow<'static, str>,
    pub font_size: u16,
}
