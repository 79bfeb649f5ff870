/// Simulation and visualizer tuning constants.
///
/// These keep the magic numbers of the per-frame loops in one place. Pixel
/// quantities are in canvas backing pixels, speeds in pixels per tick.

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // per axis, symmetric around zero
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0; // exclusive

// Pointer repulsion
pub const POINTER_INFLUENCE_RADIUS: f32 = 150.0;
pub const POINTER_MAX_PUSH: f32 = 2.0; // displacement at zero distance

// Proximity links
pub const LINK_DISTANCE: f32 = 120.0;
pub const LINK_LINE_WIDTH: f32 = 0.5;
pub const LINK_RGB: [u8; 3] = [108, 204, 255];
pub const PARTICLE_FILL: &str = "#6cf";

// Analyser
pub const FFT_SIZE: u32 = 256; // yields FFT_SIZE / 2 bins
pub const BYTE_MAX: f32 = 255.0;
pub const WAVE_MIDPOINT: f32 = 128.0;

// Bar spectrum
pub const BAR_HEIGHT_SCALE: f32 = 0.8;
pub const BAR_WIDTH_SCALE: f32 = 2.5;
pub const BAR_GAP: f32 = 1.0;
pub const BAR_HUE_START: f32 = 180.0;
pub const BAR_HUE_SPAN: f32 = 60.0;
pub const BAR_SATURATION: f32 = 100.0;
pub const BAR_LIGHTNESS: f32 = 60.0;

// Trail overlays (dark backdrop painted with low alpha each tick)
pub const TRAIL_RGB: [u8; 3] = [13, 13, 13];
pub const BAR_TRAIL_ALPHA: f32 = 0.2;
pub const WAVE_TRAIL_ALPHA: f32 = 0.1;

// Waveform
pub const WAVE_LINE_WIDTH: f32 = 2.0;
pub const WAVE_STROKE: &str = "#6cf";

// Player
pub const DEFAULT_VOLUME_PERCENT: u8 = 70;

// Search
pub const SEARCH_MIN_QUERY_CHARS: usize = 2;

// Scroll effects
pub const HEADER_OFFSET_PX: f64 = 80.0; // fixed header height kept clear on anchor jumps
pub const PARALLAX_DEFAULT_SPEED: f64 = 0.5;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
