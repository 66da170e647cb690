//! UI domain: tests for the jump budget bar.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::hud_jumps::update_jump_bar;
use super::{IconLook, JumpBarState};
use crate::core::{JumpPerformed, RefillJumps};
use crate::movement::systems::apply_jump_refills;
use crate::movement::{
    ImpulseSink, JumpClass, MovementController, MovementPolicy, MovementTuning, Player, TickInput,
};

struct NullSink;

impl ImpulseSink for NullSink {
    fn set_horizontal_velocity(&mut self, _vx: f32) {}
    fn set_vertical_velocity(&mut self, _vy: f32) {}
    fn apply_vertical_impulse(&mut self, _impulse: f32) {}
    fn teleport(&mut self, _position: Vec3) {}
}

fn grounded_tick() -> TickInput {
    TickInput {
        dt: 1.0 / 60.0,
        grounded: true,
        vertical_velocity: 0.0,
        spawn_point: Vec3::ZERO,
    }
}

#[test]
fn test_jump_bar_starts_with_last_icon_selected() {
    let bar = JumpBarState::new(3);
    assert_eq!(bar.look(2), IconLook::Selected);
    assert_eq!(bar.look(1), IconLook::Available);
    assert_eq!(bar.look(0), IconLook::Available);
    assert!(!bar.is_exhausted());
}

#[test]
fn test_full_budget_matches_fresh_bar() {
    assert_eq!(JumpBarState::from_remaining(4, 4), JumpBarState::new(4));
}

#[test]
fn test_spent_jumps_use_icons_from_the_end() {
    let bar = JumpBarState::from_remaining(3, 2);
    assert_eq!(bar.look(2), IconLook::Used);
    assert_eq!(bar.look(1), IconLook::Selected);
    assert_eq!(bar.look(0), IconLook::Available);

    let bar = JumpBarState::from_remaining(3, 0);
    assert!(bar.is_exhausted());
    for i in 0..3 {
        assert_eq!(bar.look(i), IconLook::Used);
    }
}

#[test]
fn test_negative_budget_reads_as_empty() {
    let bar = JumpBarState::from_remaining(3, -1);
    assert!(bar.is_exhausted());
    assert_eq!(bar, JumpBarState::from_remaining(3, 0));
}

#[test]
fn test_empty_bar_is_exhausted() {
    let bar = JumpBarState::new(0);
    assert!(bar.is_exhausted());
}

#[test]
fn test_bar_follows_budget_when_jump_and_refill_share_a_frame() {
    let tuning = MovementTuning::default();
    let mut controller = MovementController::new(&tuning, MovementPolicy::FreeAirControl);
    controller.jump_pressed();
    controller.tick(&tuning, grounded_tick(), &mut NullSink);
    assert_eq!(controller.jumps_remaining(), 4);

    let mut app = App::new();
    app.add_message::<JumpPerformed>()
        .add_message::<RefillJumps>()
        .insert_resource(JumpBarState::from_remaining(5, 4))
        .add_systems(Update, (apply_jump_refills, update_jump_bar).chain());
    let player = app.world_mut().spawn((Player, controller)).id();

    // The jump is reported first, then a pad is touched in the same frame.
    app.world_mut()
        .resource_mut::<Messages<JumpPerformed>>()
        .write(JumpPerformed {
            entity: player,
            class: JumpClass::Grounded,
            force: tuning.jump_force,
            jumps_remaining: 4,
        });
    app.world_mut()
        .resource_mut::<Messages<RefillJumps>>()
        .write(RefillJumps {
            target: Some(player),
        });
    app.update();

    let bar = app.world().resource::<JumpBarState>();
    assert_eq!(*bar, JumpBarState::new(5));
    assert_eq!(bar.look(4), IconLook::Selected);
}
