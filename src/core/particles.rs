// Decorative particle field: drifting points that bounce off the surface
// edges, shy away from the pointer and link up with near neighbours.

use super::constants::*;
use super::surface::{Paint, Surface, SurfaceSize};
use super::task::FrameTask;
use glam::Vec2;
use rand::Rng;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

/// Last known pointer position in surface pixels.
///
/// `position` stays `None` until the first pointer-move event arrives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
    pub influence_radius: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: None,
            influence_radius: POINTER_INFLUENCE_RADIUS,
        }
    }
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }
}

/// Pointer record written by the input listener and read by the field.
pub type SharedPointer = Rc<RefCell<PointerState>>;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Uniform position in `[0, w) x [0, h)`, per-axis speed in
    /// `[-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED]`, radius in `[1, 3)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: SurfaceSize) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * bounds.width,
            rng.gen::<f32>() * bounds.height,
        );
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
        );
        let radius = rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX);
        Self::new(position, velocity, radius)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Advance one tick: pointer push, drift, then reactive edge bounce.
    ///
    /// The push is a plain displacement and never feeds into velocity.
    pub fn step(&mut self, pointer: &PointerState, bounds: SurfaceSize) {
        self.position -= repulsion(self.position, pointer);
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Displacement to subtract from a particle at `position` this tick.
///
/// Points towards the pointer with linear falloff: `POINTER_MAX_PUSH` at
/// zero distance, zero at (and beyond) the influence radius. A particle
/// sitting exactly on the pointer is pushed along +x.
pub fn repulsion(position: Vec2, pointer: &PointerState) -> Vec2 {
    let Some(target) = pointer.position else {
        return Vec2::ZERO;
    };
    let radius = pointer.influence_radius;
    let delta = target - position;
    let distance = delta.length();
    if distance >= radius {
        return Vec2::ZERO;
    }
    let direction = delta.try_normalize().unwrap_or(Vec2::X);
    let force = (radius - distance) / radius;
    direction * force * POINTER_MAX_PUSH
}

/// Opacity of the link between two points, `None` when too far apart.
#[inline]
pub fn link_alpha(a: Vec2, b: Vec2, link_distance: f32) -> Option<f32> {
    let distance = a.distance(b);
    (distance < link_distance).then(|| (1.0 - distance / link_distance).clamp(0.0, 1.0))
}

/// Visit every unordered pair `(i, j)`, `i < j`, close enough to link.
/// Plain all-pairs scan.
pub fn for_each_link(
    particles: &[Particle],
    link_distance: f32,
    mut visit: impl FnMut(usize, usize, f32),
) {
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if let Some(alpha) =
                link_alpha(particles[i].position, particles[j].position, link_distance)
            {
                visit(i, j, alpha);
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub link_distance: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
        }
    }
}

pub struct ParticleField<S: Surface> {
    surface: S,
    particles: Vec<Particle>,
    pointer: SharedPointer,
    params: FieldParams,
}

impl<S: Surface> ParticleField<S> {
    /// Seed `params.count` random particles across the surface's current box.
    pub fn new<R: Rng + ?Sized>(
        surface: S,
        pointer: SharedPointer,
        params: FieldParams,
        rng: &mut R,
    ) -> Self {
        let bounds = surface.size();
        let particles = (0..params.count)
            .map(|_| Particle::random(rng, bounds))
            .collect::<Vec<_>>();
        log::info!(
            "[particles] seeded {} particles in {}x{}",
            particles.len(),
            bounds.width,
            bounds.height
        );
        Self::with_particles(surface, pointer, particles, params)
    }

    pub fn with_particles(
        surface: S,
        pointer: SharedPointer,
        particles: Vec<Particle>,
        params: FieldParams,
    ) -> Self {
        Self {
            surface,
            particles,
            pointer,
            params,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Resizing goes through here; particles are never re-seeded.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn tick(&mut self) {
        let bounds = self.surface.size();
        let pointer = *self.pointer.borrow();
        self.surface.clear();

        self.surface.set_fill(&Paint::Css(PARTICLE_FILL));
        for particle in self.particles.iter_mut() {
            particle.step(&pointer, bounds);
            self.surface.fill_circle(particle.position, particle.radius);
        }

        let particles = &self.particles;
        let surface = &mut self.surface;
        surface.set_line_width(LINK_LINE_WIDTH);
        for_each_link(particles, self.params.link_distance, |i, j, alpha| {
            surface.set_stroke(&Paint::rgba(LINK_RGB, alpha));
            surface.begin_path();
            surface.move_to(particles[i].position);
            surface.line_to(particles[j].position);
            surface.stroke();
        });
    }
}

impl<S: Surface> FrameTask for ParticleField<S> {
    fn frame(&mut self) -> ControlFlow<()> {
        self.tick();
        ControlFlow::Continue(())
    }
}
