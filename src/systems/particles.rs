//! Particle system tick.
//!
//! Accumulates time on enabled [`ParticleSystem`]s and counts emissions.
//! Supports catch-up: a large dt produces several emissions in one frame.
//! Disabled systems keep their accumulator untouched.
use bevy_ecs::prelude::*;

use crate::components::particlesystem::ParticleSystem;
use crate::resources::worldtime::WorldTime;

pub fn particle_system_tick(mut query: Query<&mut ParticleSystem>, time: Res<WorldTime>) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }

    for mut ps in query.iter_mut() {
        let interval = ps.emitter.interval;
        if !ps.enabled || interval <= 0.0 {
            continue;
        }
        ps.accumulator += dt;
        while ps.accumulator >= interval {
            ps.accumulator -= interval;
            ps.emitted += 1;
        }
    }
}
