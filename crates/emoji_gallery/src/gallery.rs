//! The gallery controller
//!
//! Owns the sprite pool, the animation configuration, the post-process
//! state and the texture catalog, and maps keyboard commands onto them.
//! Everything engine-facing goes through the [`RenderHost`] trait.

use crate::animation::{self, AnimationConfig};
use crate::assets::{load_emoji_filenames, TextureCatalog};
use crate::config::GalleryConfig;
use crate::input::Command;
use crate::layout::{
    Arrangement, ArrangementKind, GridParams, SphereParams, SwirlParams, TorusParams,
};
use crate::postfx::{PostProcessState, SEPIA_STEP};
use crate::render::{RenderHost, TextureHandle};
use crate::scene::SpriteStore;

/// Camera yaw rate while a 3D arrangement is on display
const CAMERA_ORBIT_DEG_PER_SEC: f32 = 7.0;

/// Interactive emoji billboard gallery
pub struct EmojiGallery {
    config: GalleryConfig,
    store: SpriteStore,
    textures: TextureCatalog,
    animation: AnimationConfig,
    postfx: PostProcessState,
    arrangement: ArrangementKind,
    running: bool,
}

impl EmojiGallery {
    /// Load assets, build the sprite pool and apply the startup
    /// arrangement.
    ///
    /// Asset problems never fail construction: a missing or malformed
    /// set file leaves a single fallback sprite, and each missing
    /// texture file becomes a distinct-color marker.
    pub fn new(config: GalleryConfig, host: &mut dyn RenderHost) -> Self {
        let mut textures = TextureCatalog::new(
            config.assets.texture_base.clone(),
            config.assets.resolution_folder.clone(),
        );

        let filenames = match load_emoji_filenames(&config.assets.set_path(), &config.assets.group) {
            Ok(filenames) => filenames,
            Err(e) => {
                log::warn!("Emoji set unavailable ({e}), falling back to a placeholder sprite");
                Vec::new()
            }
        };

        let handles: Vec<TextureHandle> = if filenames.is_empty() {
            vec![textures.fallback_marker(host)]
        } else {
            // Cycle with wraparound when there are fewer images than
            // sprite slots.
            (0..config.sprite_count)
                .map(|i| textures.load_or_fallback(host, &filenames[i % filenames.len()]))
                .collect()
        };

        let mut store = SpriteStore::new();
        store.populate(&handles);
        log::info!(
            "Gallery ready: {} sprite(s), {} texture(s) loaded",
            store.len(),
            textures.loaded_count()
        );

        let mut gallery = Self {
            animation: config.animation,
            config,
            store,
            textures,
            postfx: PostProcessState::default(),
            arrangement: ArrangementKind::Sphere,
            running: true,
        };
        gallery.apply_arrangement(ArrangementKind::Sphere);
        gallery
    }

    /// Preset shape parameters for each arrangement family
    fn arrangement_preset(kind: ArrangementKind) -> Arrangement {
        match kind {
            ArrangementKind::Grid => Arrangement::Grid(GridParams::default()),
            ArrangementKind::Swirl => Arrangement::Swirl(SwirlParams::default()),
            ArrangementKind::Torus => Arrangement::Torus(TorusParams::default()),
            ArrangementKind::Sphere => Arrangement::Sphere(SphereParams::default()),
        }
    }

    /// Re-run the layout engine and refresh every base state
    fn apply_arrangement(&mut self, kind: ArrangementKind) {
        let arrangement = Self::arrangement_preset(kind);
        let active = self.store.len().min(self.config.sprite_count);
        self.store
            .apply_arrangement(&arrangement, active, &mut rand::thread_rng());
        self.arrangement = kind;
        log::info!("Arrangement switched to {kind:?} ({active} sprites)");
    }

    /// Apply one keyboard command
    pub fn handle_command(&mut self, host: &mut dyn RenderHost, command: Command) {
        match command {
            Command::SelectArrangement(kind) => self.apply_arrangement(kind),
            Command::ToggleIdleRotation => {
                self.animation = self.animation.with_idle_rotation_toggled();
            }
            Command::ToggleIdleZoom => {
                self.animation = self.animation.with_idle_zoom_toggled();
            }
            Command::CycleNodeMode => {
                self.animation = self.animation.with_next_node_mode();
                log::info!("Node animation mode: {:?}", self.animation.node.mode);
            }
            Command::ToggleGrayscale => {
                self.postfx.toggle_grayscale();
                host.set_color_grade(self.postfx.active_grade());
            }
            Command::ToggleSepia => {
                self.postfx.toggle_sepia();
                host.set_color_grade(self.postfx.active_grade());
            }
            Command::SepiaIntensityUp => {
                self.postfx.adjust_sepia(SEPIA_STEP);
                host.set_color_grade(self.postfx.active_grade());
            }
            Command::SepiaIntensityDown => {
                self.postfx.adjust_sepia(-SEPIA_STEP);
                host.set_color_grade(self.postfx.active_grade());
            }
            Command::ToggleBloom => {
                self.postfx.bloom_enabled = !self.postfx.bloom_enabled;
                log::info!(
                    "Conceptual bloom: {} (no visual effect)",
                    if self.postfx.bloom_enabled { "on" } else { "off" }
                );
            }
            Command::ToggleAfterimage => {
                self.postfx.afterimage_enabled = !self.postfx.afterimage_enabled;
                log::info!(
                    "Conceptual afterimage: {} (no visual effect)",
                    if self.postfx.afterimage_enabled { "on" } else { "off" }
                );
            }
            Command::Quit => self.running = false,
        }
    }

    /// Per-frame update: animate every visible sprite, submit it to the
    /// host, and orbit the camera for 3D arrangements.
    pub fn update(&mut self, host: &mut dyn RenderHost, t: f32, dt: f32) {
        animation::animate(&mut self.store, &self.animation, t, dt);

        for (index, sprite) in self.store.sprites().iter().enumerate() {
            if !sprite.visible {
                continue;
            }
            host.submit_sprite(index, sprite.texture, &sprite.render, sprite.is_billboard);
        }

        if self.arrangement.orbits_camera() {
            host.orbit_camera(CAMERA_ORBIT_DEG_PER_SEC * dt);
        }
    }

    /// Whether escape has been pressed
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Currently active arrangement family
    #[must_use]
    pub const fn arrangement(&self) -> ArrangementKind {
        self.arrangement
    }

    /// The sprite pool
    #[must_use]
    pub const fn store(&self) -> &SpriteStore {
        &self.store
    }

    /// Current animation toggles
    #[must_use]
    pub const fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    /// Current post-processing requests
    #[must_use]
    pub const fn postfx(&self) -> &PostProcessState {
        &self.postfx
    }

    #[cfg(test)]
    pub(crate) fn postfx_mut(&mut self) -> &mut PostProcessState {
        &mut self.postfx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::NodeMode;
    use crate::assets::ImageData;
    use crate::input::{command_for, KeyInput};
    use crate::postfx::ColorGrade;
    use crate::scene::RenderState;
    use approx::assert_relative_eq;
    use slotmap::SlotMap;

    /// Records host calls so command handling is observable.
    struct RecordingHost {
        textures: SlotMap<TextureHandle, ()>,
        grades: Vec<ColorGrade>,
        submissions: usize,
        orbit_deg: f32,
    }

    impl RecordingHost {
        fn new() -> Self {
            Self {
                textures: SlotMap::with_key(),
                grades: Vec::new(),
                submissions: 0,
                orbit_deg: 0.0,
            }
        }
    }

    impl RenderHost for RecordingHost {
        fn upload_texture(&mut self, _image: &ImageData) -> TextureHandle {
            self.textures.insert(())
        }

        fn set_color_grade(&mut self, grade: ColorGrade) {
            self.grades.push(grade);
        }

        fn submit_sprite(
            &mut self,
            _index: usize,
            _texture: TextureHandle,
            _state: &RenderState,
            _billboard: bool,
        ) {
            self.submissions += 1;
        }

        fn orbit_camera(&mut self, degrees: f32) {
            self.orbit_deg += degrees;
        }
    }

    /// Config pointing at assets that do not exist.
    fn offline_config() -> GalleryConfig {
        let mut config = GalleryConfig::default();
        config.assets.set_base = "/nonexistent/sets".into();
        config.assets.texture_base = "/nonexistent/png".into();
        config
    }

    fn gallery(host: &mut RecordingHost) -> EmojiGallery {
        EmojiGallery::new(offline_config(), host)
    }

    #[test]
    fn test_missing_set_file_leaves_one_placeholder_sprite() {
        let mut host = RecordingHost::new();
        let gallery = gallery(&mut host);
        assert_eq!(gallery.store().len(), 1);
        assert_eq!(gallery.store().visible_count(), 1);
    }

    #[test]
    fn test_startup_arrangement_is_the_sphere() {
        let mut host = RecordingHost::new();
        let gallery = gallery(&mut host);
        assert_eq!(gallery.arrangement(), ArrangementKind::Sphere);
    }

    #[test]
    fn test_grayscale_then_sepia_binds_only_sepia() {
        let mut host = RecordingHost::new();
        let mut gallery = gallery(&mut host);

        gallery.handle_command(&mut host, Command::ToggleGrayscale);
        gallery.handle_command(&mut host, Command::ToggleSepia);
        assert_eq!(
            host.grades,
            vec![ColorGrade::Grayscale, ColorGrade::Sepia { amount: 1.0 }]
        );

        // Dropping sepia reactivates the still-requested grayscale.
        gallery.handle_command(&mut host, Command::ToggleSepia);
        assert_eq!(host.grades.last(), Some(&ColorGrade::Grayscale));
    }

    #[test]
    fn test_sepia_intensity_steps_rebind_the_shader() {
        let mut host = RecordingHost::new();
        let mut gallery = gallery(&mut host);
        gallery.postfx_mut().sepia_amount = 0.5;

        for command in [
            command_for(KeyInput::S, false),
            command_for(KeyInput::Up, true),
            command_for(KeyInput::Up, true),
        ] {
            gallery.handle_command(&mut host, command.expect("bound key"));
        }

        let last = host.grades.last().expect("grade bound");
        match last {
            ColorGrade::Sepia { amount } => assert_relative_eq!(*amount, 0.7),
            other => panic!("expected sepia, got {other:?}"),
        }
        assert_eq!(host.grades.len(), 3, "every step pushes the uniform again");
    }

    #[test]
    fn test_node_mode_cycles_through_all_four() {
        let mut host = RecordingHost::new();
        let mut gallery = gallery(&mut host);
        assert_eq!(gallery.animation().node.mode, NodeMode::WavePosition);

        let mut seen = vec![gallery.animation().node.mode];
        for _ in 0..3 {
            gallery.handle_command(&mut host, Command::CycleNodeMode);
            seen.push(gallery.animation().node.mode);
        }
        assert_eq!(
            seen,
            vec![
                NodeMode::WavePosition,
                NodeMode::WaveZoom,
                NodeMode::WaveRotation,
                NodeMode::None
            ]
        );
    }

    #[test]
    fn test_update_submits_visible_sprites_and_orbits_3d() {
        let mut host = RecordingHost::new();
        let mut gallery = gallery(&mut host);

        gallery.update(&mut host, 0.0, 0.5);
        assert_eq!(host.submissions, gallery.store().visible_count());
        assert_relative_eq!(host.orbit_deg, 3.5);

        // The flat grid is viewed head-on.
        gallery.handle_command(&mut host, Command::SelectArrangement(ArrangementKind::Grid));
        gallery.update(&mut host, 0.5, 0.5);
        assert_relative_eq!(host.orbit_deg, 3.5);
    }

    #[test]
    fn test_escape_stops_the_gallery() {
        let mut host = RecordingHost::new();
        let mut gallery = gallery(&mut host);
        assert!(gallery.is_running());
        gallery.handle_command(&mut host, Command::Quit);
        assert!(!gallery.is_running());
    }

    #[test]
    fn test_inert_toggles_never_bind_a_grade() {
        let mut host = RecordingHost::new();
        let mut gallery = gallery(&mut host);
        gallery.handle_command(&mut host, Command::ToggleBloom);
        gallery.handle_command(&mut host, Command::ToggleAfterimage);
        assert!(host.grades.is_empty());
        assert!(gallery.postfx().bloom_enabled);
        assert!(gallery.postfx().afterimage_enabled);
    }
}
