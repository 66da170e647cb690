//! UI domain: jump budget bar, one pad icon per jump.

use bevy::prelude::*;

use crate::movement::{MovementController, MovementTuning, Player};

pub(crate) const JUMP_ICON_SIZE: f32 = 24.0;
pub(crate) const JUMP_BAR_PADDING: f32 = 16.0;

const ICON_COLOR: Color = Color::srgb(0.25, 0.6, 0.3);
const SELECTED_ICON_COLOR: Color = Color::srgb(0.5, 0.95, 0.5);
const USED_ICON_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const RESTART_COLOR: Color = Color::srgb(0.35, 0.2, 0.2);
const SELECTED_RESTART_COLOR: Color = Color::srgb(0.95, 0.3, 0.3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconLook {
    Available,
    Selected,
    Used,
}

/// Which icon is next to be spent. Icons are spent from the last one down.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct JumpBarState {
    len: usize,
    /// Index of the selected icon; `None` once every icon is spent.
    current: Option<usize>,
}

impl JumpBarState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: len.checked_sub(1),
        }
    }

    /// Bar for a budget with `remaining` jumps left. Negative budgets read as empty.
    pub fn from_remaining(len: usize, remaining: i32) -> Self {
        let remaining = usize::try_from(remaining).unwrap_or(0).min(len);
        Self {
            len,
            current: remaining.checked_sub(1),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    pub fn look(&self, index: usize) -> IconLook {
        match self.current {
            Some(current) if index == current => IconLook::Selected,
            Some(current) if index < current => IconLook::Available,
            _ => IconLook::Used,
        }
    }
}

/// One pad icon in the bar.
#[derive(Component, Debug)]
pub struct JumpIcon(pub usize);

/// Highlighted when the budget is gone and the next jump means a restart.
#[derive(Component, Debug)]
pub struct RestartIcon;

pub(crate) fn spawn_jump_bar(mut commands: Commands, tuning: Res<MovementTuning>) {
    let len = tuning.max_jumps as usize;
    let state = JumpBarState::new(len);

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(JUMP_BAR_PADDING),
            top: Val::Px(JUMP_BAR_PADDING),
            column_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                RestartIcon,
                Node {
                    width: Val::Px(JUMP_ICON_SIZE),
                    height: Val::Px(JUMP_ICON_SIZE),
                    ..default()
                },
                BackgroundColor(RESTART_COLOR),
            ));
            for index in 0..len {
                parent.spawn((
                    JumpIcon(index),
                    Node {
                        width: Val::Px(JUMP_ICON_SIZE),
                        height: Val::Px(JUMP_ICON_SIZE),
                        ..default()
                    },
                    BackgroundColor(icon_color(state.look(index))),
                ));
            }
        });

    commands.insert_resource(state);
}

fn icon_color(look: IconLook) -> Color {
    match look {
        IconLook::Available => ICON_COLOR,
        IconLook::Selected => SELECTED_ICON_COLOR,
        IconLook::Used => USED_ICON_COLOR,
    }
}

/// Mirrors the player's budget after the fixed step has applied this
/// frame's jumps, refills and resets.
pub(crate) fn update_jump_bar(
    players: Query<&MovementController, With<Player>>,
    mut state: ResMut<JumpBarState>,
    mut icons: Query<(&JumpIcon, &mut BackgroundColor), Without<RestartIcon>>,
    mut restart: Query<&mut BackgroundColor, With<RestartIcon>>,
) {
    let Ok(controller) = players.single() else {
        return;
    };

    let len = state.len;
    if !state.set_if_neq(JumpBarState::from_remaining(len, controller.jumps_remaining())) {
        return;
    }

    for (icon, mut color) in &mut icons {
        color.0 = icon_color(state.look(icon.0));
    }
    for mut color in &mut restart {
        color.0 = if state.is_exhausted() {
            SELECTED_RESTART_COLOR
        } else {
            RESTART_COLOR
        };
    }
}
