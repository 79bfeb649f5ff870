// DOM ids, class names and fixture paths used by the web frontend.

// Particle background
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const PARTICLE_CANVAS_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
pointer-events:none;z-index:0;opacity:0.3";

// Visualizer
pub const VISUALIZER_CANVAS_ID: &str = "audio-visualizer";
pub const VISUALIZER_TOGGLE_ID: &str = "visualizer-toggle";

// Player
pub const PLAYER_ID: &str = "music-player";
pub const PLAYER_TITLE_ID: &str = "player-track-title";
pub const PLAYER_ARTIST_ID: &str = "player-artist";
pub const PLAYER_ART_ID: &str = "player-album-art";
pub const PLAYER_PLAY_ID: &str = "player-play";
pub const PLAYER_PREV_ID: &str = "player-prev";
pub const PLAYER_NEXT_ID: &str = "player-next";
pub const PLAY_ICON_ID: &str = "play-icon";
pub const PAUSE_ICON_ID: &str = "pause-icon";
pub const PROGRESS_BAR_ID: &str = "player-progress-bar";
pub const PROGRESS_FILL_ID: &str = "player-progress-fill";
pub const CURRENT_TIME_ID: &str = "player-current-time";
pub const DURATION_ID: &str = "player-duration";
pub const VOLUME_SLIDER_ID: &str = "player-volume-slider";
pub const PLAYLIST_BUTTON_ID: &str = "player-playlist-btn";
pub const PLAYLIST_MODAL_ID: &str = "playlist-modal";
pub const PLAYLIST_CLOSE_ID: &str = "playlist-close";
pub const PLAYLIST_ITEMS_ID: &str = "playlist-items";
pub const DEFAULT_COVER: &str = "Octan Cover.png";

// Search
pub const SEARCH_TRIGGER_ID: &str = "search-trigger";
pub const SEARCH_MODAL_ID: &str = "search-modal";
pub const SEARCH_CLOSE_ID: &str = "search-close";
pub const SEARCH_INPUT_ID: &str = "search-input";
pub const SEARCH_RESULTS_ID: &str = "search-results";

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Navigation
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_LINKS_ID: &str = "nav-links";

// Scroll progress
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";

// Scroll animations
pub const REVEAL_SELECTOR: &str = ".section, .card, .release-card, .grid";
pub const REVEAL_PENDING_CLASS: &str = "animate-on-scroll";
pub const REVEAL_DONE_CLASS: &str = "animate-in";
pub const PARALLAX_SELECTOR: &str = ".parallax";
pub const PARALLAX_SPEED_ATTR: &str = "data-speed";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const LOADED_CLASS: &str = "loaded";

// Shared state class for menus, modals and toggles
pub const ACTIVE_CLASS: &str = "active";

// JSON fixtures
pub const RELEASES_JSON: &str = "data/releases.json";
pub const ARTISTS_JSON: &str = "data/artists.json";
pub const POSTS_JSON: &str = "data/blog-posts.json";
