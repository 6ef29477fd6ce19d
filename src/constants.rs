/// Page integration constants for the web front-end.
///
/// Scene and animation tuning lives in `statue_core::constants`; these only
/// describe how the hero hooks into the host page.
// Element ids
pub const CANVAS_ID: &str = "heroCanvas";
pub const CTA_ID: &str = "exploreBtn";

// Backing-store resolution cap (physical pixels per CSS pixel)
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// The page preloader covers the hero this long before the entrance starts
pub const PRELOADER_DELAY_MS: i32 = 2200;
