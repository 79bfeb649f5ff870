// Host-side tests for the audio visualizer state machine and drawing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod surface {
    include!("../src/core/surface.rs");
}
mod task {
    include!("../src/core/task.rs");
}
mod visualizer {
    include!("../src/core/visualizer.rs");
}
mod common;

use common::{Op, RecordingSurface};
use error::VisualizerError;
use glam::Vec2;
use std::cell::Cell;
use std::ops::ControlFlow;
use surface::Paint;
use task::FrameTask;
use visualizer::*;

struct FakeAnalyser {
    freq: Vec<u8>,
    time: Vec<u8>,
    reads: Cell<usize>,
}

impl FakeAnalyser {
    fn new(freq: Vec<u8>) -> Self {
        let time = vec![128; freq.len()];
        Self {
            freq,
            time,
            reads: Cell::new(0),
        }
    }
}

impl Analyser for FakeAnalyser {
    fn bin_count(&self) -> usize {
        self.freq.len()
    }
    fn frequency_data(&self, buf: &mut [u8]) {
        self.reads.set(self.reads.get() + 1);
        buf.copy_from_slice(&self.freq);
    }
    fn time_domain_data(&self, buf: &mut [u8]) {
        self.reads.set(self.reads.get() + 1);
        buf.copy_from_slice(&self.time);
    }
}

type TestVisualizer = AudioVisualizer<FakeAnalyser, RecordingSurface>;

fn visualizer(width: f32, height: f32) -> TestVisualizer {
    AudioVisualizer::new(
        Some(RecordingSurface::new(width, height)),
        VisualizerParams::default(),
    )
}

fn ready(freq: Vec<u8>) -> TestVisualizer {
    let mut v = visualizer(100.0, 50.0);
    assert!(v.setup_analysis(|_| Ok(FakeAnalyser::new(freq))));
    v
}

fn ops(v: &mut TestVisualizer) -> &mut Vec<Op> {
    &mut v.surface_mut().expect("surface").ops
}

#[test]
fn defaults_to_idle_bar_mode() {
    let v = visualizer(10.0, 10.0);
    assert!(!v.is_active());
    assert_eq!(v.mode(), DrawMode::Bars);
    assert_eq!(v.params().fft_size, 256);
    assert!(!v.has_analysis());
}

#[test]
fn setup_builds_exactly_one_handle() {
    let builds = Cell::new(0);
    let mut v = visualizer(10.0, 10.0);
    let build = |_: &VisualizerParams| {
        builds.set(builds.get() + 1);
        Ok(FakeAnalyser::new(vec![0; 128]))
    };
    assert!(v.setup_analysis(build));
    assert!(v.setup_analysis(build));
    assert_eq!(builds.get(), 1);
    assert_eq!(v.samples().len(), 128);
}

#[test]
fn setup_receives_fft_size() {
    let mut v = visualizer(10.0, 10.0);
    v.setup_analysis(|params| {
        assert_eq!(params.fft_size, 256);
        Ok(FakeAnalyser::new(vec![0; (params.fft_size / 2) as usize]))
    });
    assert_eq!(v.analyser().map(|a| a.bin_count()), Some(128));
}

#[test]
fn failed_setup_degrades_without_retry() {
    let builds = Cell::new(0);
    let mut v = visualizer(10.0, 10.0);
    let failing = |_: &VisualizerParams| -> Result<FakeAnalyser, VisualizerError> {
        builds.set(builds.get() + 1);
        Err(VisualizerError::Unsupported("no AudioContext".into()))
    };
    assert!(!v.setup_analysis(failing));
    assert!(!v.setup_analysis(failing));
    assert_eq!(builds.get(), 1);
    assert!(!v.draw());
}

#[test]
fn start_requires_surface() {
    let mut v: TestVisualizer = AudioVisualizer::new(None, VisualizerParams::default());
    assert!(!v.start());
    assert!(!v.is_active());
    assert!(!v.toggle());
}

#[test]
fn stop_when_idle_is_noop() {
    let mut v = visualizer(10.0, 10.0);
    assert!(!v.stop());
    assert!(ops(&mut v).is_empty());
}

#[test]
fn stop_clears_surface() {
    let mut v = ready(vec![10; 4]);
    assert!(v.start());
    assert!(!v.start(), "second start is not a transition");
    assert!(v.stop());
    assert_eq!(ops(&mut v).last(), Some(&Op::ClearRect(0.0, 0.0, 100.0, 50.0)));
}

#[test]
fn restart_reuses_sample_buffer() {
    let mut v = ready(vec![200; 8]);
    let buf = v.samples().as_ptr();

    v.start();
    assert_eq!(v.frame(), ControlFlow::Continue(()));
    v.stop();
    v.start();
    assert_eq!(v.frame(), ControlFlow::Continue(()));

    assert_eq!(v.samples().as_ptr(), buf);
    assert_eq!(v.samples(), &[200; 8]);
    assert_eq!(v.analyser().map(|a| a.reads.get()), Some(2));
}

#[test]
fn frame_breaks_when_idle_or_without_analysis() {
    let mut v = ready(vec![1; 4]);
    assert_eq!(v.frame(), ControlFlow::Break(()));

    let mut bare = visualizer(10.0, 10.0);
    bare.start();
    assert_eq!(bare.frame(), ControlFlow::Break(()));
    assert!(ops(&mut bare).is_empty());
}

#[test]
fn toggle_flips_state() {
    let mut v = ready(vec![1; 4]);
    assert!(v.toggle());
    assert!(v.is_active());
    assert!(!v.toggle());
    assert!(!v.is_active());
}

#[test]
fn bars_follow_amplitude_and_hue() {
    let mut v = ready(vec![255, 0, 128, 51]);
    v.start();
    v.frame();
    let ops = ops(&mut v).clone();

    assert_eq!(ops[0], Op::SetFill(Paint::rgba([13, 13, 13], 0.2)));
    assert_eq!(ops[1], Op::FillRect(0.0, 0.0, 100.0, 50.0));

    let bars: Vec<(f32, f32, f32, f32)> = ops[2..]
        .iter()
        .filter_map(|op| match op {
            Op::FillRect(x, y, w, h) => Some((*x, *y, *w, *h)),
            _ => None,
        })
        .collect();
    assert_eq!(bars.len(), 4);

    // width = 100 / 4 * 2.5, x advances by width + 1
    assert_eq!(bars[0], (0.0, 10.0, 62.5, 40.0));
    assert_eq!(bars[1].0, 63.5);
    assert_eq!(bars[1].3, 0.0);
    assert_eq!(bars[1].1, 50.0);
    assert!((bars[3].3 - 51.0 / 255.0 * 50.0 * 0.8).abs() < 1e-4);

    let hues: Vec<f32> = ops
        .iter()
        .filter_map(|op| match op {
            Op::SetFill(Paint::Hsl { h, s, l }) => {
                assert_eq!((*s, *l), (100.0, 60.0));
                Some(*h)
            }
            _ => None,
        })
        .collect();
    assert_eq!(hues, vec![180.0, 195.0, 210.0, 225.0]);
}

#[test]
fn waveform_draws_centered_polyline() {
    let mut v = ready(vec![0; 4]);
    v.set_mode(DrawMode::Waveform);
    v.start();
    v.frame();
    let ops = ops(&mut v).clone();

    assert_eq!(ops[0], Op::SetFill(Paint::rgba([13, 13, 13], 0.1)));
    assert!(ops.contains(&Op::LineWidth(2.0)));
    assert!(ops.contains(&Op::SetStroke(Paint::Css("#6cf"))));
    assert_eq!(
        ops.iter().filter(|op| matches!(op, Op::MoveTo(_))).count(),
        1
    );
    // time-domain midpoint (128) sits at half height
    assert!(ops.contains(&Op::MoveTo(Vec2::new(0.0, 25.0))));
    assert!(ops.contains(&Op::LineTo(Vec2::new(75.0, 25.0))));
    assert_eq!(ops[ops.len() - 2], Op::LineTo(Vec2::new(100.0, 25.0)));
    assert_eq!(ops[ops.len() - 1], Op::Stroke);
}

#[test]
fn bar_helpers() {
    assert_eq!(bar_height(255, 100.0), 80.0);
    assert_eq!(bar_height(0, 100.0), 0.0);
    assert_eq!(bar_width(256.0, 128), 5.0);
    assert_eq!(bar_hue(0, 128), 180.0);
    assert!(bar_hue(127, 128) < 240.0);
}

#[test]
fn paint_renders_css() {
    assert_eq!(Paint::rgba([13, 13, 13], 0.2).to_string(), "rgba(13, 13, 13, 0.2)");
    assert_eq!(
        Paint::Hsl {
            h: 180.0,
            s: 100.0,
            l: 60.0
        }
        .to_string(),
        "hsl(180, 100%, 60%)"
    );
    assert_eq!(Paint::Css("#6cf").to_string(), "#6cf");
}
