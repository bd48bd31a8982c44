//! Sizing, color, and timing constants for the picker.

use std::time::Duration;

/// Swatch button diameter
pub const SWATCH_SIZE: f32 = 32.0;

/// Gap between swatches in the row
pub const SWATCH_GAP: f32 = 16.0;

/// Hover scale of a swatch
pub const SWATCH_HOVER_SCALE: f64 = 1.1;

/// Pressed scale of a swatch
pub const SWATCH_PRESS_SCALE: f64 = 0.95;

/// Time for a swatch to ease between rest, hover and press scales
pub const SWATCH_SCALE_TRANSITION: Duration = Duration::from_millis(150);

/// Distance from the swatch edge to the selection ring
pub const RING_INSET: f64 = 8.0;

/// Selection ring stroke width
pub const RING_WIDTH: f64 = 2.0;

/// Folder icon width
pub const FOLDER_WIDTH: f32 = 256.0;
/// Folder icon height
pub const FOLDER_HEIGHT: f32 = 192.0;

/// Outline of the folder body in its 256×192 design box.
pub const FOLDER_OUTLINE: [(f64, f64); 6] = [
    (0.0, 25.0),
    (25.0, 0.0),
    (240.0, 0.0),
    (255.0, 25.0),
    (255.0, 190.0),
    (0.0, 190.0),
];

/// Outline of the darker tab strip.
pub const FOLDER_TAB: [(f64, f64); 4] = [(0.0, 25.0), (25.0, 0.0), (240.0, 0.0), (255.0, 25.0)];

/// Opacity of the black tab overlay
pub const TAB_SHADE: f64 = 0.2;

/// Flying dot radius
pub const DOT_RADIUS: f64 = 8.0;

/// Keyframe times for the flight, as fractions of its duration
pub const FLIGHT_TIMES: [f64; 4] = [0.0, 0.3, 0.7, 1.0];

/// Scale envelope of the dot at [`FLIGHT_TIMES`]
pub const FLIGHT_SCALE: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

/// Keyframe times of the x/y offsets: start, arc apex, destination
pub const FLIGHT_PATH_TIMES: [f64; 3] = [0.0, 0.3, 1.0];

pub const FLIGHT_DURATION: Duration = Duration::from_millis(500);
pub const COMMIT_DELAY: Duration = Duration::from_millis(500);
pub const COLOR_TRANSITION: Duration = Duration::from_millis(300);

/// Upward jump at the 30% keyframe
pub const ARC_HEIGHT: f64 = 100.0;

pub const SPRING_STIFFNESS: f64 = 300.0;
pub const SPRING_DAMPING: f64 = 30.0;

/// Frame interval of the animation ticker (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Gap between the folder and the swatch row
pub const SECTION_GAP: f32 = 32.0;

/// Page background (light gray)
pub const BACKGROUND: (u8, u8, u8) = (243, 244, 246);
