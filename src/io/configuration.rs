//! Solver pacing constants and output defaults

// Solver pacing
/// Units of progress requested per `advance` call when none is given
pub const DEFAULT_STEPS_PER_ADVANCE: usize = 1000;

// Region limits
/// Largest grid, in cells, a region may allocate
pub const MAX_REGION_CELLS: usize = 1 << 22;

// Progress bar display settings
/// Width of the region progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Rendering
/// Side length in pixels of one grid cell in exported images
pub const CELL_PIXELS: u32 = 16;
/// Color of cells no shape occupies
pub const EMPTY_CELL_COLOR: [u8; 4] = [40, 40, 50, 255];

// Shape colors are spread around the hue wheel by the golden angle
/// Hue increment between consecutive shape ids, in degrees
pub const GOLDEN_ANGLE_DEGREES: f32 = 137.508;
/// HSL saturation of shape colors
pub const SHAPE_SATURATION: f32 = 0.7;
/// HSL lightness of shape colors
pub const SHAPE_LIGHTNESS: f32 = 0.6;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on snapshots kept for one GIF; long searches are thinned
pub const MAX_GIF_FRAMES: usize = 600;
/// Total cells kept across all snapshots of one search recording
pub const MAX_CAPTURE_CELLS: usize = 1 << 22;
/// How many frame delays the final GIF frame is held for
pub const FINAL_FRAME_HOLD: u32 = 25;
