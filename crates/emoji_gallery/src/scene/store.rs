//! Sprite pool and layout application

use crate::foundation::math::Vec3;
use crate::layout::Arrangement;
use crate::render::TextureHandle;
use crate::scene::sprite::{RenderState, Sprite};
use rand::Rng;
use std::f32::consts::TAU;

/// Ordered, index-addressable pool of sprites
///
/// Sprites beyond the active count are hidden rather than destroyed.
/// Only [`SpriteStore::apply_arrangement`] writes base states.
#[derive(Debug, Default)]
pub struct SpriteStore {
    sprites: Vec<Sprite>,
}

impl SpriteStore {
    /// Create an empty pool
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the pool with one sprite per texture, reusing pooled
    /// entries where possible and hiding any surplus.
    pub fn populate(&mut self, textures: &[TextureHandle]) {
        for (index, texture) in textures.iter().enumerate() {
            if let Some(sprite) = self.sprites.get_mut(index) {
                sprite.texture = *texture;
                sprite.visible = true;
            } else {
                self.sprites.push(Sprite::new(*texture));
            }
        }
        for sprite in self.sprites.iter_mut().skip(textures.len()) {
            sprite.visible = false;
        }
    }

    /// Run the layout engine over the pool and refresh every base-state
    /// snapshot.
    ///
    /// The refresh is mandatory after any layout change: it re-draws the
    /// animation phase offsets, zeroes the spin accumulator and resets
    /// the render transform, so no stale animation base survives the
    /// switch. Sprites at `active_count` and beyond are hidden.
    pub fn apply_arrangement<R: Rng>(
        &mut self,
        arrangement: &Arrangement,
        active_count: usize,
        rng: &mut R,
    ) {
        for (index, sprite) in self.sprites.iter_mut().enumerate() {
            if index >= active_count {
                sprite.visible = false;
                continue;
            }
            let placement = arrangement.place(index, active_count);
            sprite.base.position = placement.position;
            sprite.base.rotation = placement.rotation;
            sprite.base.scale_val = placement.scale_val;
            sprite.base.scale = Vec3::new(
                placement.scale_val,
                placement.scale_val,
                placement.scale_val,
            );
            sprite.base.phase_offset = rng.gen_range(0.0..TAU);
            sprite.is_billboard = placement.billboard;
            sprite.visible = true;
            sprite.spin_deg = 0.0;
            sprite.render = RenderState::from_base(&sprite.base);
        }
    }

    /// All pooled sprites in index order
    #[must_use]
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Mutable access for the animation compositor
    pub fn sprites_mut(&mut self) -> &mut [Sprite] {
        &mut self.sprites
    }

    /// Number of pooled sprites, hidden ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the pool holds no sprites at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Number of currently visible sprites
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.sprites.iter().filter(|s| s.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Arrangement, SphereParams};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use slotmap::SlotMap;

    fn test_textures(count: usize) -> Vec<TextureHandle> {
        let mut keys: SlotMap<TextureHandle, ()> = SlotMap::with_key();
        (0..count).map(|_| keys.insert(())).collect()
    }

    fn sphere() -> Arrangement {
        Arrangement::Sphere(SphereParams {
            radius: 3.0,
            sprite_scale: 0.6,
        })
    }

    #[test]
    fn test_populate_reuses_pool_and_hides_surplus() {
        let mut store = SpriteStore::new();
        store.populate(&test_textures(8));
        assert_eq!(store.len(), 8);
        assert_eq!(store.visible_count(), 8);

        store.populate(&test_textures(3));
        assert_eq!(store.len(), 8, "pool entries are reused, not destroyed");
        assert_eq!(store.visible_count(), 3);
    }

    #[test]
    fn test_apply_arrangement_hides_sprites_beyond_active_count() {
        let mut store = SpriteStore::new();
        store.populate(&test_textures(10));
        let mut rng = StdRng::seed_from_u64(7);
        store.apply_arrangement(&sphere(), 6, &mut rng);
        assert_eq!(store.visible_count(), 6);
        assert!(store.sprites()[5].visible);
        assert!(!store.sprites()[6].visible);
    }

    #[test]
    fn test_identical_parameters_reproduce_identical_base_transforms() {
        let mut first = SpriteStore::new();
        first.populate(&test_textures(12));
        first.apply_arrangement(&sphere(), 12, &mut StdRng::seed_from_u64(42));

        let mut second = SpriteStore::new();
        second.populate(&test_textures(12));
        second.apply_arrangement(&sphere(), 12, &mut StdRng::seed_from_u64(42));

        for (a, b) in first.sprites().iter().zip(second.sprites()) {
            assert_eq!(a.base, b.base);
            assert_eq!(a.is_billboard, b.is_billboard);
        }
    }

    #[test]
    fn test_refresh_resets_spin_and_render_snapshot() {
        let mut store = SpriteStore::new();
        store.populate(&test_textures(4));
        let mut rng = StdRng::seed_from_u64(1);
        store.apply_arrangement(&sphere(), 4, &mut rng);

        store.sprites_mut()[2].spin_deg = 140.0;
        store.sprites_mut()[2].render.position.x += 9.0;

        store.apply_arrangement(&sphere(), 4, &mut rng);
        let sprite = &store.sprites()[2];
        assert_eq!(sprite.spin_deg, 0.0);
        assert_eq!(sprite.render, RenderState::from_base(&sprite.base));
    }

    #[test]
    fn test_phase_offsets_land_in_unit_circle_range() {
        let mut store = SpriteStore::new();
        store.populate(&test_textures(30));
        store.apply_arrangement(&sphere(), 30, &mut StdRng::seed_from_u64(3));
        for sprite in store.sprites() {
            assert!(sprite.base.phase_offset >= 0.0);
            assert!(sprite.base.phase_offset < TAU);
        }
    }
}
