mod components;
mod shapes;

use hashbrown::HashMap;
use hecs::{DynamicBundle, Entity, EntityBuilder, EntityRef, World};
use log::{info, warn};
use macroquad::prelude::*;
use quad_dbg::dump;

pub use components::*;
pub use shapes::*;

use crate::Letterbox;

const ROUNDED_RECT_SEGMENTS: usize = 16;

struct TextureVal {
    texture: Texture2D,
    size: Vec2,
}

/// Render does rendering stuff. All the data for a frame is taken
/// from its own world -- "export world". The game fills it with
/// [Render::put] and the items are drawn in the same order.
///
/// The frame is drawn into a fixed-size virtual screen which
/// then gets letterboxed onto the window.
///
/// It also provides a simple texture storage for quick access
/// for the rendering code callers.
pub struct Render {
    pub world: World,
    pub clear_color: Color,

    virtual_size: Vec2,
    next_order: u32,
    to_draw: Vec<(DrawOrder, Entity)>,
    target: Option<RenderTarget>,

    textures: HashMap<TextureKey, TextureVal>,
}

impl Render {
    pub fn new(virtual_size: Vec2) -> Self {
        Self {
            world: World::new(),
            clear_color: WHITE,
            virtual_size,
            next_order: 0,
            to_draw: Vec::new(),
            target: None,
            textures: HashMap::new(),
        }
    }

    pub fn add_texture(&mut self, key: TextureKey, texture: &Texture2D) {
        self.textures.insert(
            key,
            TextureVal {
                size: texture.size(),
                texture: texture.clone(),
            },
        );
    }

    /// Loads a texture from disk. If that fails, the key gets
    /// a blank texture so the game can go on.
    pub async fn load_texture(&mut self, key: TextureKey, path: &str) {
        match load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Linear);
                self.add_texture(key, &texture);
                info!("Loaded texture {:?}", key.0);
            }
            Err(e) => {
                warn!("Failed to load texture {path:?}: {e}");
                self.add_texture(key, &Texture2D::empty());
            }
        }
    }

    /// Size of a registered texture. Unknown textures are zero-sized.
    pub fn texture_size(&self, key: TextureKey) -> Vec2 {
        self.textures
            .get(&key)
            .map(|val| val.size)
            .unwrap_or(Vec2::ZERO)
    }

    /// Puts a drawable into the export world. It will be drawn after
    /// everything put before it during this frame.
    pub fn put(&mut self, bundle: impl DynamicBundle) -> Entity {
        let mut builder = EntityBuilder::new();
        builder.add_bundle(bundle);
        builder.add(DrawOrder(self.next_order));
        self.next_order += 1;

        self.world.spawn(builder.build())
    }

    pub fn new_frame(&mut self) {
        dump!("Render entities: {}", self.world.len());

        self.world.clear();
        self.next_order = 0;
    }

    pub fn render(&mut self, screen: &Letterbox) {
        let target = match &self.target {
            Some(target) => target.clone(),
            None => {
                let target = render_target(self.virtual_size.x as u32, self.virtual_size.y as u32);
                target.texture.set_filter(FilterMode::Linear);
                self.target = Some(target.clone());
                target
            }
        };

        let mut camera = Camera2D::from_display_rect(Rect::new(
            0.0,
            0.0,
            self.virtual_size.x,
            self.virtual_size.y,
        ));
        camera.render_target = Some(target.clone());
        set_camera(&camera);
        clear_background(self.clear_color);

        self.draw_world();

        set_default_camera();
        clear_background(BLACK);

        let dest = screen.dest_rect();
        draw_texture_ex(
            &target.texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(dest.size()),
                flip_y: true,
                ..Default::default()
            },
        );
    }

    fn draw_world(&mut self) {
        self.to_draw.clear();
        self.to_draw.extend(
            self.world
                .query_mut::<&DrawOrder>()
                .into_iter()
                .map(|(entity, order)| (*order, entity)),
        );
        self.to_draw.sort_unstable_by_key(|(order, _)| *order);

        for (_, entity) in &self.to_draw {
            let Ok(item) = self.world.entity(*entity) else {
                continue;
            };
            self.draw_item(item);
        }
    }

    fn draw_item(&self, item: EntityRef) {
        let pos = item
            .get::<&Transform>()
            .map(|tf| tf.pos)
            .unwrap_or(Vec2::ZERO);
        let tint = item.get::<&Tint>().map(|tint| tint.0).unwrap_or(WHITE);

        if let Some(sprite) = item.get::<&Sprite>() {
            self.draw_sprite(&sprite, pos, tint);
        }
        if let Some(patch) = item.get::<&NinePatch>() {
            self.draw_nine_patch(&patch, pos, tint);
        }
        if let Some(rect) = item.get::<&RoundedRect>() {
            Self::draw_rounded_rect(&rect, pos, tint);
        }
        if let Some(lines) = item.get::<&RectLines>() {
            draw_rectangle_lines(
                pos.x,
                pos.y,
                lines.size.x,
                lines.size.y,
                lines.thickness,
                tint,
            );
        }
        if let Some(text) = item.get::<&GlyphText>() {
            let dims = measure_text(&text.string, None, text.font_size, 1.0);
            draw_text(
                &text.string,
                pos.x,
                pos.y + dims.offset_y,
                text.font_size as f32,
                tint,
            );
        }
    }

    fn draw_sprite(&self, sprite: &Sprite, pos: Vec2, tint: Color) {
        let Some(TextureVal { texture, size }) = self.textures.get(&sprite.texture) else {
            warn!("No texture {:?}", sprite.texture.0);
            return;
        };
        let dest_size = sprite
            .size
            .or(sprite.source.map(|src| src.size()))
            .unwrap_or(*size);

        draw_texture_ex(
            texture,
            pos.x,
            pos.y,
            tint,
            DrawTextureParams {
                dest_size: Some(dest_size),
                source: sprite.source,
                ..Default::default()
            },
        );
    }

    fn draw_nine_patch(&self, patch: &NinePatch, pos: Vec2, tint: Color) {
        let Some(TextureVal { texture, .. }) = self.textures.get(&patch.texture) else {
            warn!("No texture {:?}", patch.texture.0);
            return;
        };
        let dest = Rect::new(pos.x, pos.y, patch.size.x, patch.size.y);

        for (src, dst) in nine_patch_slices(patch.source, patch.margins, dest) {
            if dst.w <= 0.0 || dst.h <= 0.0 {
                continue;
            }

            draw_texture_ex(
                texture,
                dst.x,
                dst.y,
                tint,
                DrawTextureParams {
                    dest_size: Some(dst.size()),
                    source: Some(src),
                    ..Default::default()
                },
            );
        }
    }

    fn draw_rounded_rect(rect: &RoundedRect, pos: Vec2, tint: Color) {
        let bounds = Rect::new(pos.x, pos.y, rect.size.x, rect.size.y);
        let center = bounds.center();
        let points = rounded_rect_points(bounds, rect.roundness, ROUNDED_RECT_SEGMENTS);

        // The outline is convex, so a fan from the center has no overlaps
        for (idx, a) in points.iter().enumerate() {
            let b = points[(idx + 1) % points.len()];
            draw_triangle(center, *a, b, tint);
        }
    }
}
