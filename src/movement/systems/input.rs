//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MovementController, Player};

const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];

/// Samples the keyboard every frame and latches intents on the controller
/// until the next fixed tick consumes them.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let jump_pressed = keyboard.any_just_pressed(JUMP_KEYS);
    let jump_released = keyboard.any_just_released(JUMP_KEYS);

    for mut controller in &mut query {
        controller.move_intent(x);
        if jump_pressed {
            controller.jump_pressed();
        }
        if jump_released {
            controller.jump_released();
        }
    }
}
