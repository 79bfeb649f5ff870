// Audio-reactive visualizer: samples an analysis handle each frame and
// paints either a bar spectrum or a waveform with a fading trail.

use super::constants::*;
use super::error::VisualizerError;
use super::surface::{Paint, Surface};
use super::task::FrameTask;
use glam::Vec2;
use std::ops::ControlFlow;

/// Periodic amplitude sampling bound to one playing signal.
pub trait Analyser {
    /// Number of amplitude bins (half the transform size).
    fn bin_count(&self) -> usize;
    fn frequency_data(&self, buf: &mut [u8]);
    fn time_domain_data(&self, buf: &mut [u8]);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    #[default]
    Bars,
    Waveform,
}

#[derive(Clone, Debug)]
pub struct VisualizerParams {
    pub fft_size: u32,
    pub mode: DrawMode,
}

impl Default for VisualizerParams {
    fn default() -> Self {
        Self {
            fft_size: FFT_SIZE,
            mode: DrawMode::Bars,
        }
    }
}

enum Analysis<A> {
    Pending,
    Ready(A),
    Failed,
}

pub struct AudioVisualizer<A, S> {
    surface: Option<S>,
    analysis: Analysis<A>,
    samples: Vec<u8>,
    active: bool,
    params: VisualizerParams,
}

impl<A: Analyser, S: Surface> AudioVisualizer<A, S> {
    /// `surface` is `None` when the host had nowhere to mount a canvas;
    /// such a visualizer never starts.
    pub fn new(surface: Option<S>, params: VisualizerParams) -> Self {
        Self {
            surface,
            analysis: Analysis::Pending,
            samples: Vec::new(),
            active: false,
            params,
        }
    }

    /// Build the analysis handle on first call; later calls do nothing.
    ///
    /// Returns whether a usable handle exists afterwards. A failed build is
    /// logged once and leaves the visualizer in degraded mode.
    pub fn setup_analysis<F>(&mut self, build: F) -> bool
    where
        F: FnOnce(&VisualizerParams) -> Result<A, VisualizerError>,
    {
        if let Analysis::Pending = self.analysis {
            self.analysis = match build(&self.params) {
                Ok(analyser) => {
                    self.samples = vec![0; analyser.bin_count()];
                    log::info!("[visualizer] analysis ready, {} bins", self.samples.len());
                    Analysis::Ready(analyser)
                }
                Err(e) => {
                    log::error!("[visualizer] analysis setup failed: {}", e);
                    Analysis::Failed
                }
            };
        }
        self.has_analysis()
    }

    pub fn has_analysis(&self) -> bool {
        matches!(self.analysis, Analysis::Ready(_))
    }

    pub fn analyser(&self) -> Option<&A> {
        match &self.analysis {
            Analysis::Ready(a) => Some(a),
            _ => None,
        }
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> DrawMode {
        self.params.mode
    }

    pub fn set_mode(&mut self, mode: DrawMode) {
        self.params.mode = mode;
    }

    pub fn params(&self) -> &VisualizerParams {
        &self.params
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Idle -> Active. Returns `true` only on an actual transition, which is
    /// the caller's cue to schedule the frame loop.
    pub fn start(&mut self) -> bool {
        if self.surface.is_none() || self.active {
            return false;
        }
        self.active = true;
        true
    }

    /// Active -> Idle, clearing the surface. Returns `true` only on an
    /// actual transition; stopping an idle visualizer touches nothing.
    pub fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        true
    }

    /// Flip between start and stop; returns the new `is_active`.
    pub fn toggle(&mut self) -> bool {
        if self.active {
            self.stop();
        } else {
            self.start();
        }
        self.active
    }

    /// Sample and paint one frame. Without an analysis handle or a surface
    /// this is a no-op and returns `false`.
    pub fn draw(&mut self) -> bool {
        let Analysis::Ready(analyser) = &self.analysis else {
            return false;
        };
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        match self.params.mode {
            DrawMode::Bars => {
                analyser.frequency_data(&mut self.samples);
                draw_bars(surface, &self.samples);
            }
            DrawMode::Waveform => {
                analyser.time_domain_data(&mut self.samples);
                draw_waveform(surface, &self.samples);
            }
        }
        true
    }
}

impl<A: Analyser, S: Surface> FrameTask for AudioVisualizer<A, S> {
    fn frame(&mut self) -> ControlFlow<()> {
        if !self.active || !self.draw() {
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

#[inline]
pub fn bar_height(amplitude: u8, surface_height: f32) -> f32 {
    amplitude as f32 / BYTE_MAX * surface_height * BAR_HEIGHT_SCALE
}

/// Bars overlap once `bins` is large relative to the width; that is the look.
#[inline]
pub fn bar_width(surface_width: f32, bins: usize) -> f32 {
    surface_width / bins as f32 * BAR_WIDTH_SCALE
}

#[inline]
pub fn bar_hue(bin: usize, bins: usize) -> f32 {
    bin as f32 / bins as f32 * BAR_HUE_SPAN + BAR_HUE_START
}

pub fn draw_bars<S: Surface + ?Sized>(surface: &mut S, samples: &[u8]) {
    let size = surface.size();
    surface.wash(&Paint::rgba(TRAIL_RGB, BAR_TRAIL_ALPHA));
    if samples.is_empty() {
        return;
    }
    let bins = samples.len();
    let width = bar_width(size.width, bins);
    let mut x = 0.0;
    for (i, &amplitude) in samples.iter().enumerate() {
        let height = bar_height(amplitude, size.height);
        surface.set_fill(&Paint::Hsl {
            h: bar_hue(i, bins),
            s: BAR_SATURATION,
            l: BAR_LIGHTNESS,
        });
        surface.fill_rect(x, size.height - height, width, height);
        x += width + BAR_GAP;
    }
}

pub fn draw_waveform<S: Surface + ?Sized>(surface: &mut S, samples: &[u8]) {
    let size = surface.size();
    surface.wash(&Paint::rgba(TRAIL_RGB, WAVE_TRAIL_ALPHA));
    if samples.is_empty() {
        return;
    }
    surface.set_line_width(WAVE_LINE_WIDTH);
    surface.set_stroke(&Paint::Css(WAVE_STROKE));
    surface.begin_path();

    let slice = size.width / samples.len() as f32;
    let mut x = 0.0;
    for (i, &amplitude) in samples.iter().enumerate() {
        let y = amplitude as f32 / WAVE_MIDPOINT * size.height / 2.0;
        if i == 0 {
            surface.move_to(Vec2::new(x, y));
        } else {
            surface.line_to(Vec2::new(x, y));
        }
        x += slice;
    }
    surface.line_to(Vec2::new(size.width, size.height / 2.0));
    surface.stroke();
}
