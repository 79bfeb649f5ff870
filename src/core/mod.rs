pub mod constants;
pub mod error;
pub mod particles;
pub mod playlist;
pub mod scroll;
pub mod search;
pub mod surface;
pub mod task;
pub mod theme;
pub mod visualizer;

pub use error::VisualizerError;
pub use particles::{FieldParams, ParticleField, PointerState, SharedPointer};
pub use playlist::{Playlist, ReleaseCatalog};
pub use search::{ArtistCatalog, PostCatalog, SearchIndex};
pub use surface::{Paint, Surface, SurfaceSize};
pub use task::FrameTask;
pub use theme::Theme;
pub use visualizer::{Analyser, AudioVisualizer, DrawMode, VisualizerParams};
