//! CPU side of the exhaust particle effect.
//!
//! A [`ParticleSource`] owns a fixed pool of particles. Dead particles are
//! revived around the source a few at a time; live ones drift against the
//! source's motion and fade out. Uploading the pool for drawing is left to the
//! renderer.

use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input::{Input, Key};
use crate::scene::transform::Transform;
use crate::settings::ParticleSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Seconds left; the particle is dead at or below zero.
    pub life: f32,
    pub colour: Vec4,
}

impl Particle {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            life: 0.0,
            colour: Vec4::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleSource {
    settings: ParticleSettings,
    particles: Vec<Particle>,

    origin: Vec3,
    position: Vec3,
    /// Offset from the transform the source is attached to.
    relative_position: Vec3,
    velocity: Vec3,
    active: bool,

    rng: StdRng,
}

impl ParticleSource {
    /// A source at `settings.origin` with a pool of dead particles. Sources
    /// start inactive.
    #[must_use]
    pub fn new(settings: ParticleSettings) -> Self {
        Self {
            particles: vec![Particle::default(); settings.max_particles],
            origin: settings.origin,
            position: settings.origin,
            relative_position: Vec3::ZERO,
            velocity: settings.velocity,
            active: false,
            rng: StdRng::seed_from_u64(settings.seed),
            settings,
        }
    }

    /// Revive up to `spawn_rate` dead particles, then age and move every
    /// particle by `dt`. Does nothing while inactive.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        let mut spawned = 0;
        for index in 0..self.particles.len() {
            if spawned >= self.settings.spawn_rate {
                break;
            }
            if !self.particles[index].is_alive() {
                self.spawn_particle(index);
                spawned += 1;
            }
        }
        if spawned > 0 {
            log::trace!("Spawned {spawned} particles at {}", self.position);
        }

        for particle in &mut self.particles {
            particle.life -= dt;
            if particle.is_alive() {
                particle.position -= dt * self.velocity;
                particle.colour.w -= dt * self.settings.fade;
            }
        }
    }

    fn spawn_particle(&mut self, index: usize) {
        let spread = self.settings.spread;
        let offset = Vec3::new(
            self.rng.gen_range(-1.0..1.0),
            self.rng.gen_range(-1.0..1.0),
            self.rng.gen_range(-1.0..1.0),
        ) * spread;

        let particle = &mut self.particles[index];
        particle.life = self.settings.lifetime;
        particle.colour = self.settings.colour;
        particle.position = self.position + offset;
    }

    /// Move the source. The displacement becomes the drift velocity of live
    /// particles so the plume trails behind a moving source.
    pub fn set_position(&mut self, position: Vec3) {
        if position == self.position {
            return;
        }
        self.velocity = position - self.position;
        self.position = position;
    }

    /// Follow `parent`, keeping the relative offset in the parent's frame.
    pub fn attach_to(&mut self, parent: &Transform) {
        let position = parent.matrix().transform_point3(self.relative_position);
        self.set_position(position);
    }

    /// Kill every particle without touching the source state.
    pub fn kill_all(&mut self) {
        for particle in &mut self.particles {
            particle.life = 0.0;
        }
    }

    /// `P` toggles the effect.
    pub fn handle_input(&mut self, input: &Input) {
        if input.was_key_just_pressed(Key::P) {
            self.toggle_active();
            log::debug!("Particles {}", if self.active { "on" } else { "off" });
        }
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn alive(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[must_use]
    pub fn relative_position(&self) -> Vec3 {
        self.relative_position
    }

    pub fn set_relative_position(&mut self, relative_position: Vec3) {
        self.relative_position = relative_position;
    }
}
