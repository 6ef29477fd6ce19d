//! Viewport-dependent placement of the statue.

use crate::constants::{
    LANDSCAPE_SCALE, NEAR_SQUARE_MAX_ASPECT, NEAR_SQUARE_SCALE, PORTRAIT_MAX_ASPECT,
    PORTRAIT_POSITION, PORTRAIT_SCALE, PORTRAIT_YAW, WIDE_DROP, WIDE_OFFSET_FRACTION, WIDE_YAW,
};
use crate::scene::{NodeId, Scene};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Portrait,
    NearSquare,
    Landscape,
}

impl Breakpoint {
    pub fn scale(self) -> f32 {
        match self {
            Breakpoint::Portrait => PORTRAIT_SCALE,
            Breakpoint::NearSquare => NEAR_SQUARE_SCALE,
            Breakpoint::Landscape => LANDSCAPE_SCALE,
        }
    }
}

/// Classify an aspect ratio. Boundaries belong to the wider class.
pub fn breakpoint(aspect: f32) -> Breakpoint {
    if aspect < PORTRAIT_MAX_ASPECT {
        Breakpoint::Portrait
    } else if aspect < NEAR_SQUARE_MAX_ASPECT {
        Breakpoint::NearSquare
    } else {
        Breakpoint::Landscape
    }
}

/// Where the statue root sits for a given viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub breakpoint: Breakpoint,
    pub scale: f32,
    pub position: Vec3,
    pub yaw: f32,
}

/// Height of the view frustum at `distance` from the camera.
#[inline]
pub fn visible_height(fov_deg: f32, distance: f32) -> f32 {
    2.0 * distance * (fov_deg.to_radians() * 0.5).tan()
}

/// Resolve the placement for a viewport. Pure; equal inputs give equal output.
///
/// Portrait and square screens centre the statue low and set it back. Wider
/// screens push it towards the right so the headline keeps the left side.
pub fn resolve(width: u32, height: u32, fov_deg: f32, distance: f32) -> Placement {
    let aspect = width as f32 / height.max(1) as f32;
    let bp = breakpoint(aspect);
    // an exactly square viewport scales as near-square but stays centred
    if aspect <= PORTRAIT_MAX_ASPECT {
        return Placement {
            breakpoint: bp,
            scale: bp.scale(),
            position: Vec3::from(PORTRAIT_POSITION),
            yaw: PORTRAIT_YAW,
        };
    }
    let visible_width = visible_height(fov_deg, distance) * aspect;
    Placement {
        breakpoint: bp,
        scale: bp.scale(),
        position: Vec3::new(visible_width * WIDE_OFFSET_FRACTION, WIDE_DROP, 0.0),
        yaw: WIDE_YAW,
    }
}

/// Snap `root` to the placement. The follow smoothing takes over from here.
pub fn apply(scene: &mut Scene, root: NodeId, placement: &Placement) {
    let Some(node) = scene.node_mut(root) else {
        return;
    };
    node.transform.scale = Vec3::splat(placement.scale);
    node.transform.position = placement.position;
    node.transform.rotation.y = placement.yaw;
}
