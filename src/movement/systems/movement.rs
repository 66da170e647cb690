//! Movement domain: fixed-step systems driving the controller.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{
    ActiveSpawn, DoubleJumpPerformed, JumpPerformed, PlayerReset, RefillJumps, RespawnRequested,
};
use crate::movement::{
    GroundContact, ImpulseSink, MovementController, MovementEvent, MovementTuning, Player,
    RespawnGrace, TickInput,
};

/// Applies controller decisions to an avian body.
pub(crate) struct BodySink<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub transform: &'a mut Transform,
}

impl ImpulseSink for BodySink<'_> {
    fn set_horizontal_velocity(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    fn set_vertical_velocity(&mut self, vy: f32) {
        self.velocity.y = vy;
    }

    fn apply_vertical_impulse(&mut self, impulse: f32) {
        self.velocity.y += impulse;
    }

    fn teleport(&mut self, position: Vec3) {
        self.transform.translation = position;
    }
}

pub(crate) fn apply_jump_refills(
    mut refills: MessageReader<RefillJumps>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    for refill in refills.read() {
        match refill.target {
            Some(entity) => {
                if let Ok(mut controller) = query.get_mut(entity) {
                    controller.refill_jumps();
                }
            }
            None => {
                for mut controller in &mut query {
                    controller.refill_jumps();
                }
            }
        }
    }
}

pub(crate) fn apply_respawn_requests(
    mut requests: MessageReader<RespawnRequested>,
    spawn: Res<ActiveSpawn>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut MovementController,
            &mut LinearVelocity,
            &mut Transform,
            &mut RespawnGrace,
        ),
        With<Player>,
    >,
    mut resets: MessageWriter<PlayerReset>,
) {
    for request in requests.read() {
        let Ok((mut controller, mut velocity, mut transform, mut grace)) =
            query.get_mut(request.entity)
        else {
            continue;
        };

        // Still overlapping the hazard that just sent us home.
        if grace.0 > 0.0 {
            continue;
        }

        let mut sink = BodySink {
            velocity: &mut velocity,
            transform: &mut transform,
        };
        controller.respawn(spawn.position, &mut sink);
        grace.0 = tuning.respawn_grace;
        resets.write(PlayerReset {
            entity: request.entity,
            spawn: spawn.position,
        });
    }
}

pub(crate) fn tick_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    spawn: Res<ActiveSpawn>,
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            &GroundContact,
            &mut LinearVelocity,
            &mut Transform,
            &mut RespawnGrace,
        ),
        With<Player>,
    >,
    mut jumps: MessageWriter<JumpPerformed>,
    mut double_jumps: MessageWriter<DoubleJumpPerformed>,
    mut resets: MessageWriter<PlayerReset>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, contact, mut velocity, mut transform, mut grace) in &mut query {
        let input = TickInput {
            dt,
            grounded: contact.0,
            vertical_velocity: velocity.y,
            spawn_point: spawn.position,
        };
        let mut sink = BodySink {
            velocity: &mut velocity,
            transform: &mut transform,
        };

        for event in controller.tick(&tuning, input, &mut sink) {
            match event {
                MovementEvent::Jumped {
                    class,
                    force,
                    jumps_remaining,
                } => {
                    jumps.write(JumpPerformed {
                        entity,
                        class,
                        force,
                        jumps_remaining,
                    });
                }
                MovementEvent::DoubleJumped { extra_jump_count } => {
                    double_jumps.write(DoubleJumpPerformed {
                        entity,
                        extra_jump_count,
                    });
                }
                MovementEvent::Reset { spawn } => {
                    grace.0 = tuning.respawn_grace;
                    resets.write(PlayerReset { entity, spawn });
                }
            }
        }
    }
}

pub(crate) fn tick_respawn_grace(time: Res<Time>, mut query: Query<&mut RespawnGrace>) {
    let dt = time.delta_secs();
    for mut grace in &mut query {
        if grace.0 > 0.0 {
            grace.0 = (grace.0 - dt).max(0.0);
        }
    }
}
