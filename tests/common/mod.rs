// Recording surface shared by the host-side tests. Expects the including
// test crate to declare `mod surface` at its root.

use crate::surface::{Paint, Surface, SurfaceSize};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    ClearRect(f32, f32, f32, f32),
    FillRect(f32, f32, f32, f32),
    FillCircle(Vec2, f32),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Stroke,
    SetFill(Paint),
    SetStroke(Paint),
    LineWidth(f32),
}

pub struct RecordingSurface {
    pub size: SurfaceSize,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(Op::ClearRect(x, y, w, h));
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(Op::FillCircle(center, radius));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, p: Vec2) {
        self.ops.push(Op::MoveTo(p));
    }
    fn line_to(&mut self, p: Vec2) {
        self.ops.push(Op::LineTo(p));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.ops.push(Op::SetFill(paint.clone()));
    }
    fn set_stroke(&mut self, paint: &Paint) {
        self.ops.push(Op::SetStroke(paint.clone()));
    }
    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::LineWidth(width));
    }
}
