use glam::DVec2;
use rand::prelude::*;
use std::collections::VecDeque;

// Trail tuning.

// Bounded particle buffer, oldest evicted first
pub const MAX_PARTICLES: usize = 140;

// Capture radius: samples closer than half of this reinforce the
// nearest particle instead of spawning a new one
pub const HOVER_RADIUS: f64 = 48.0;

// Energy boosts per sample kind
pub const DWELL_BOOST: f64 = 0.06;
pub const MOVE_BOOST: f64 = 0.2;

// Per-frame energy decay; the slower rate applies while a particle was
// reinforced within the hover window
pub const DECAY_HOVERING: f64 = 0.999;
pub const DECAY_IDLE: f64 = 0.996;
pub const HOVER_WINDOW_SEC: f64 = 0.35;

// Particles below this energy are removed
pub const EXPIRE_ENERGY: f64 = 0.004;

// Cursor exponentially approaches the last raw pointer sample
pub const CURSOR_SMOOTHING: f64 = 0.12;

// Glow sizing
pub const BASE_RADIUS: f64 = 34.0;
pub const SHRINK_WINDOW_SEC: f64 = 18.0;
pub const SHRINK_FLOOR: f64 = 0.25;

// Rhythmic pulse: two Gaussian spikes per beat cycle
pub const BEAT_PERIOD_SEC: f64 = 60.0 / 8.0;
const BEAT_SPIKE_CENTERS: [f64; 2] = [0.18, 0.48];
const BEAT_SPIKE_WIDTH: f64 = 0.045;

// Hue cycles over time, offset per particle
pub const HUE_DEG_PER_SEC: f64 = 120.0;

/// One glow particle anchored near a recent pointer position.
#[derive(Clone, Copy, Debug)]
pub struct TrailParticle {
    pub pos: DVec2,
    pub energy: f64,
    pub hue_seed: f64,
    pub radius: f64,
    pub born_at: f64,
    pub last_seen: f64,
}

impl TrailParticle {
    #[inline]
    pub fn is_hovering(&self, now: f64) -> bool {
        now - self.last_seen < HOVER_WINDOW_SEC
    }

    #[inline]
    pub fn hue(&self, now: f64) -> f64 {
        (now * HUE_DEG_PER_SEC + self.hue_seed).rem_euclid(360.0)
    }

    /// Age-based radius shrink: linear over the shrink window down to
    /// a floor of 25% of the base radius.
    #[inline]
    pub fn shrink(&self, now: f64) -> f64 {
        (1.0 - (now - self.born_at) / SHRINK_WINDOW_SEC).max(SHRINK_FLOOR)
    }
}

/// Raw pointer state mutated by event handlers and drained by the
/// next frame; handlers never render.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    pub target: DVec2,
    pub seen: bool,
    pub moves: Vec<DVec2>,
}

impl PointerTracker {
    pub fn record_move(&mut self, pos: DVec2) {
        self.target = pos;
        self.seen = true;
        self.moves.push(pos);
    }

    pub fn leave(&mut self) {
        self.seen = false;
        self.moves.clear();
    }
}

/// Bounded ordered collection of trail particles plus the smoothed
/// cursor. All times are caller-supplied seconds so tests can drive a
/// logical clock.
pub struct TrailField {
    particles: VecDeque<TrailParticle>,
    pub cursor: DVec2,
    rng: StdRng,
}

impl TrailField {
    pub fn new(seed: u64, cursor: DVec2) -> Self {
        Self {
            particles: VecDeque::with_capacity(MAX_PARTICLES),
            cursor,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Insertion order, oldest first; drawing in this order puts
    /// newer particles on top.
    pub fn iter(&self) -> impl Iterator<Item = &TrailParticle> {
        self.particles.iter()
    }

    pub fn smooth_toward(&mut self, target: DVec2) {
        self.cursor += (target - self.cursor) * CURSOR_SMOOTHING;
    }

    /// Register one pointer sample: the nearest particle absorbs it
    /// unless every existing particle is farther than half the hover
    /// radius, in which case a new particle is born (evicting the
    /// oldest at the cap).
    pub fn register_sample(&mut self, pos: DVec2, boost: f64, now: f64) {
        let nearest = self
            .particles
            .iter_mut()
            .map(|p| (p.pos.distance(pos), p))
            .min_by(|a, b| a.0.total_cmp(&b.0));

        if let Some((dist, p)) = nearest {
            if dist <= HOVER_RADIUS * 0.5 {
                p.pos = pos;
                p.energy = (p.energy + boost).min(1.0);
                p.last_seen = now;
                return;
            }
        }

        if self.particles.len() >= MAX_PARTICLES {
            self.particles.pop_front();
        }
        let hue_seed = self.rng.gen::<f64>() * 360.0;
        self.particles.push_back(TrailParticle {
            pos,
            energy: boost.min(1.0),
            hue_seed,
            radius: BASE_RADIUS,
            born_at: now,
            last_seen: now,
        });
    }

    /// Advance one frame of decay and prune expired particles.
    pub fn decay(&mut self, now: f64) {
        for p in &mut self.particles {
            let factor = if p.is_hovering(now) {
                DECAY_HOVERING
            } else {
                DECAY_IDLE
            };
            p.energy *= factor;
        }
        self.particles.retain(|p| p.energy >= EXPIRE_ENERGY);
    }
}

/// Rhythmic pulse in [0,1]: two Gaussian spikes per beat cycle.
pub fn beat_pulse(now: f64) -> f64 {
    let phase = (now.rem_euclid(BEAT_PERIOD_SEC)) / BEAT_PERIOD_SEC;
    let mut pulse = 0.0;
    for c in BEAT_SPIKE_CENTERS {
        let d = (phase - c) / BEAT_SPIKE_WIDTH;
        pulse += (-d * d).exp();
    }
    pulse.min(1.0)
}
