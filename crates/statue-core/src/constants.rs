use std::f32::consts::PI;

// Shared scene/animation tuning constants used by both web and native frontends.

// Camera
pub const CAMERA_FOV_DEG: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.5, 7.0];
// Distance from the camera plane to the statue, used by the layout resolver
pub const STATUE_DEPTH: f32 = 7.0;

// Layout breakpoints (aspect = width / height)
pub const PORTRAIT_MAX_ASPECT: f32 = 1.0;
pub const NEAR_SQUARE_MAX_ASPECT: f32 = 1.4;
pub const PORTRAIT_SCALE: f32 = 0.45;
pub const NEAR_SQUARE_SCALE: f32 = 0.8;
pub const LANDSCAPE_SCALE: f32 = 1.0;
pub const PORTRAIT_POSITION: [f32; 3] = [0.0, -1.8, -1.0];
pub const PORTRAIT_YAW: f32 = -0.2;
pub const WIDE_YAW: f32 = -0.6;
pub const WIDE_DROP: f32 = -0.6;
pub const WIDE_OFFSET_FRACTION: f32 = 0.32; // share of the visible width pushed right

// Root motion
pub const BOB_STEP: f32 = 0.0008; // per-tick step at the reference refresh rate
pub const BOB_RATE: f32 = 0.7;
pub const BOB_REFERENCE_HZ: f32 = 60.0;
pub const FOLLOW_FACTOR: f32 = 0.05; // fraction of remaining distance per tick
pub const FOLLOW_YAW_GAIN: f32 = 0.1;
pub const FOLLOW_PITCH_GAIN: f32 = 0.05;
pub const HEAD_YAW_GAIN: f32 = 0.2;
pub const HEAD_PITCH_GAIN: f32 = 0.15;

// Particles and rings
pub const SPARKLE_COUNT: usize = 80;
pub const SPARKLE_SPIN_PER_TICK: f32 = 0.005;
pub const SPARKLE_OPACITY_BASE: f32 = 0.6;
pub const SPARKLE_OPACITY_SWING: f32 = 0.2;
pub const DUST_COUNT: usize = 200;
pub const DUST_EXTENT: f32 = 14.0;
pub const DUST_SPIN_RATE: f32 = 0.01;
pub const HALO_RING_COUNT: usize = 2;
pub const HALO_SPIN_PER_TICK: f32 = 0.01;
pub const HALO_PRECESS_PER_TICK: f32 = 0.005;

// Skin emissive pulse
pub const PULSE_BASE: f32 = 0.15;
pub const PULSE_SWING: f32 = 0.15;
pub const PULSE_RATE: f32 = 1.5;

// Dress cloth motion
pub const DRESS_SWAY_AMPLITUDE: f32 = 0.02;
pub const DRESS_SWAY_RATE: f32 = 0.5;
pub const DRESS_BREATH_AMPLITUDE: f32 = 0.01;
pub const DRESS_BREATH_RATE: f32 = 0.8;

// Brush trail
pub const TRAIL_CAPACITY: usize = 100;
pub const TRAIL_OPACITY_BASE: f32 = 0.4;
pub const TRAIL_OPACITY_SWING: f32 = 0.2;
pub const TRAIL_OPACITY_RATE: f32 = 5.0;

// Spotlight follow
pub const SPOT_FOLLOW_FACTOR: f32 = 0.1;
pub const SPOT_AIM_FACTOR: f32 = 0.1;
pub const SPOT_RANGE_X: f32 = 6.0;
pub const SPOT_RANGE_Y: f32 = 4.0;
pub const SPOT_AIM_LIFT: f32 = 0.5;

// Hover highlight ("liquid gold")
pub const HIGHLIGHT_DURATION_SEC: f32 = 1.5;
pub const HIGHLIGHT_METALNESS: f32 = 1.0;
pub const HIGHLIGHT_ROUGHNESS: f32 = 0.1;
pub const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 0.84, 0.0];
pub const SKIN_METALNESS: f32 = 0.05;
pub const SKIN_ROUGHNESS: f32 = 0.15;

// Entrance slide-in
pub const ENTRANCE_FROM_X: f32 = 8.0;
pub const ENTRANCE_DURATION_SEC: f32 = 1.8;
pub const ENTRANCE_DELAY_SEC: f32 = 0.1;

// Procedural texture
pub const TEXTURE_SIZE: u32 = 512;
pub const VEIN_COUNT: usize = 40;
pub const VEIN_SEGMENTS: usize = 12;
pub const VEIN_STEP: f32 = 80.0;
pub const VEIN_ALPHA: f32 = 0.12;
pub const FLECK_COUNT: usize = 8;
pub const FLECK_MAX_RADIUS: f32 = 15.0;
pub const FLECK_ALPHA: f32 = 0.04;

// Atmosphere and output
pub const FOG_COLOR: u32 = 0x050508;
pub const FOG_DENSITY: f32 = 0.04;
pub const EXPOSURE: f32 = 1.25;

pub const HALF_PI: f32 = PI * 0.5;
