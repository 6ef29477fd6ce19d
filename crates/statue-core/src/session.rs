//! The live hero: scene, camera, lights and every piece of per-frame state,
//! owned in one place and driven by the frontends.

use crate::animate::{Animator, FrameInput};
use crate::constants::{
    ENTRANCE_DELAY_SEC, ENTRANCE_DURATION_SEC, ENTRANCE_FROM_X, SKIN_METALNESS, SKIN_ROUGHNESS,
    STATUE_DEPTH,
};
use crate::layout::{self, Placement};
use crate::lights::LightRig;
use crate::scene::{hex_to_linear, Scene, SceneError};
use crate::state::{Camera, Clock, PointerState, ViewportState};
use crate::statue::{self, StatueHandles, SKIN_HEX};
use crate::tween::{Ease, MaterialTransition, SurfaceParams, Tween};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Clone, Copy, Debug)]
pub struct SessionParams {
    pub seed: u64,
    pub width: u32,
    pub height: u32,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            seed: 42,
            width: 1280,
            height: 720,
        }
    }
}

pub struct Session {
    pub scene: Scene,
    pub statue: StatueHandles,
    pub camera: Camera,
    pub lights: LightRig,
    pub viewport: ViewportState,
    pub pointer: PointerState,
    pub clock: Clock,
    placement: Placement,
    animator: Animator,
    transition: MaterialTransition,
    entrance: Option<Tween<f32>>,
}

impl Session {
    pub fn new(params: SessionParams) -> Result<Self, SceneError> {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut scene = Scene::new();
        let statue = statue::build(&mut scene, &mut rng)?;

        let viewport = ViewportState::new(params.width, params.height);
        let camera = Camera {
            aspect: viewport.aspect,
            ..Default::default()
        };
        let placement = layout::resolve(
            viewport.width,
            viewport.height,
            camera.fovy_radians.to_degrees(),
            STATUE_DEPTH,
        );
        layout::apply(&mut scene, statue.root, &placement);
        log::info!(
            "[layout] {}x{} -> {:?} (scale {})",
            viewport.width,
            viewport.height,
            placement.breakpoint,
            placement.scale
        );

        let rest = scene
            .material(statue.materials.skin)
            .map(SurfaceParams::of)
            .unwrap_or(SurfaceParams {
                color: hex_to_linear(SKIN_HEX),
                metalness: SKIN_METALNESS,
                roughness: SKIN_ROUGHNESS,
            });

        Ok(Self {
            scene,
            statue,
            camera,
            lights: LightRig::default(),
            viewport,
            pointer: PointerState::default(),
            clock: Clock::start(),
            placement,
            animator: Animator::new(),
            transition: MaterialTransition::new(rest),
            entrance: None,
        })
    }

    /// Seconds since the session was created.
    pub fn now(&self) -> f32 {
        self.clock.elapsed_secs()
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn transition(&self) -> &MaterialTransition {
        &self.transition
    }

    pub fn entrance_active(&self) -> bool {
        self.entrance.is_some()
    }

    /// Track a new viewport size and re-place the statue.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
        self.camera.aspect = self.viewport.aspect;
        let next = layout::resolve(
            width,
            height,
            self.camera.fovy_radians.to_degrees(),
            STATUE_DEPTH,
        );
        if next.breakpoint != self.placement.breakpoint {
            log::info!(
                "[layout] {:?} -> {:?} at {}x{}",
                self.placement.breakpoint,
                next.breakpoint,
                width,
                height
            );
        } else {
            log::debug!("[layout] resize {}x{}", width, height);
        }
        self.placement = next;
        layout::apply(&mut self.scene, self.statue.root, &self.placement);
    }

    /// Pointer position in viewport pixels.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.update(x, y, &self.viewport);
    }

    pub fn set_cta_hovered(&mut self, hovered: bool, now: f32) {
        log::debug!("[hover] {}", if hovered { "enter" } else { "leave" });
        self.transition.set_hovered(hovered, now);
    }

    /// Slide the statue in from the right, turning from face-on into its pose.
    pub fn begin_entrance(&mut self, now: f32) {
        self.entrance = Some(Tween::delayed(
            0.0,
            1.0,
            now,
            ENTRANCE_DELAY_SEC,
            ENTRANCE_DURATION_SEC,
            Ease::Power3Out,
        ));
        if let Some(root) = self.scene.node_mut(self.statue.root) {
            root.transform.rotation.y = 0.0;
        }
        log::info!("[loop] entrance started");
    }

    fn slide_x(&mut self, now: f32) -> f32 {
        let Some(tween) = self.entrance else {
            return 0.0;
        };
        if tween.finished(now) {
            self.entrance = None;
            return 0.0;
        }
        (ENTRANCE_FROM_X - self.placement.position.x) * (1.0 - tween.value_at(now))
    }

    /// Advance the whole hero to `elapsed` seconds.
    pub fn tick(&mut self, elapsed: f32) {
        if let Some(params) = self.transition.update(elapsed) {
            if let Some(skin) = self.scene.material_mut(self.statue.materials.skin) {
                params.write_to(skin);
            }
        }
        let input = FrameInput {
            elapsed,
            pointer: self.pointer.normalized,
            slide_x: self.slide_x(elapsed),
            pulse_suppressed: self.transition.suppresses_pulse(),
        };
        self.animator.tick(
            &mut self.scene,
            &self.statue,
            &mut self.lights,
            &self.placement,
            &input,
        );
    }
}
