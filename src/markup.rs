// Static markup injected by the web frontend. Element ids match
// `constants.rs` so the wiring code can find what it inserted.

/// Mock player bar plus the playlist modal, appended to `<body>`.
pub const PLAYER: &str = r#"
<div class="music-player" id="music-player">
    <div class="player-track-info">
        <img src="Octan Cover.png" alt="Album Art" class="player-album-art" id="player-album-art">
        <div class="player-text">
            <div class="player-track-title" id="player-track-title">Select a track</div>
            <div class="player-artist" id="player-artist">Octan Records</div>
        </div>
    </div>
    <div class="player-controls">
        <button class="player-btn" id="player-prev" title="Previous">
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <polygon points="19 20 9 12 19 4 19 20"></polygon>
                <line x1="5" y1="19" x2="5" y2="5"></line>
            </svg>
        </button>
        <button class="player-btn player-btn-play" id="player-play" title="Play">
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" id="play-icon">
                <polygon points="5 3 19 12 5 21 5 3"></polygon>
            </svg>
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" id="pause-icon" style="display: none;">
                <rect x="6" y="4" width="4" height="16"></rect>
                <rect x="14" y="4" width="4" height="16"></rect>
            </svg>
        </button>
        <button class="player-btn" id="player-next" title="Next">
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <polygon points="5 4 15 12 5 20 5 4"></polygon>
                <line x1="19" y1="5" x2="19" y2="19"></line>
            </svg>
        </button>
    </div>
    <div class="player-progress">
        <span class="player-time" id="player-current-time">0:00</span>
        <div class="player-progress-bar" id="player-progress-bar">
            <div class="player-progress-fill" id="player-progress-fill"></div>
        </div>
        <span class="player-time" id="player-duration">0:00</span>
    </div>
    <div class="player-volume">
        <button class="player-btn" id="player-volume-btn" title="Volume">
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"></polygon>
                <path d="M19.07 4.93a10 10 0 0 1 0 14.14M15.54 8.46a5 5 0 0 1 0 7.07"></path>
            </svg>
        </button>
        <input type="range" min="0" max="100" value="70" class="player-volume-slider" id="player-volume-slider">
    </div>
    <button class="player-btn player-playlist-btn" id="player-playlist-btn" title="Playlist">
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <line x1="8" y1="6" x2="21" y2="6"></line>
            <line x1="8" y1="12" x2="21" y2="12"></line>
            <line x1="8" y1="18" x2="21" y2="18"></line>
            <line x1="3" y1="6" x2="3.01" y2="6"></line>
            <line x1="3" y1="12" x2="3.01" y2="12"></line>
            <line x1="3" y1="18" x2="3.01" y2="18"></line>
        </svg>
    </button>
</div>
<div class="playlist-modal" id="playlist-modal">
    <div class="playlist-content">
        <div class="playlist-header">
            <h3>Playlist</h3>
            <button class="playlist-close" id="playlist-close">&times;</button>
        </div>
        <div class="playlist-items" id="playlist-items"></div>
    </div>
</div>
"#;

/// Search trigger and modal, appended to the page header.
pub const SEARCH: &str = r#"
<div class="search-container" id="search-container">
    <button class="search-trigger" id="search-trigger" title="Search">
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="11" cy="11" r="8"></circle>
            <path d="m21 21-4.35-4.35"></path>
        </svg>
    </button>
</div>
<div class="search-modal" id="search-modal">
    <div class="search-modal-content">
        <div class="search-input-wrapper">
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="11" cy="11" r="8"></circle>
                <path d="m21 21-4.35-4.35"></path>
            </svg>
            <input type="text" id="search-input" placeholder="Search artists, releases, or posts..." autocomplete="off">
            <button class="search-close" id="search-close">&times;</button>
        </div>
        <div class="search-results" id="search-results"></div>
    </div>
</div>
"#;

pub const THEME_TOGGLE: &str = r#"
<button class="theme-toggle" id="theme-toggle" title="Toggle Theme" aria-label="Toggle dark/light mode">
    <svg class="theme-icon sun-icon" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
        <circle cx="12" cy="12" r="5"></circle>
        <line x1="12" y1="1" x2="12" y2="3"></line>
        <line x1="12" y1="21" x2="12" y2="23"></line>
        <line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>
        <line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>
        <line x1="1" y1="12" x2="3" y2="12"></line>
        <line x1="21" y1="12" x2="23" y2="12"></line>
        <line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>
        <line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>
    </svg>
    <svg class="theme-icon moon-icon" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
        <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
    </svg>
</button>
"#;

pub const VISUALIZER_CANVAS: &str = r#"<canvas id="audio-visualizer" class="audio-visualizer"></canvas>"#;

/// Appended to the player container; the canvas goes in first.
pub const VISUALIZER_TOGGLE: &str = r#"
<button class="visualizer-toggle" id="visualizer-toggle" title="Toggle Visualizer (shift-click: switch mode)">
    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
        <path d="M9 18V5l12-2v13"></path>
        <circle cx="6" cy="18" r="3"></circle>
        <circle cx="18" cy="16" r="3"></circle>
    </svg>
</button>
"#;
