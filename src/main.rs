mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod objects;
mod save;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

fn main() -> Result<(), content::ContentError> {
    // Bad tuning stops here, before a window or a physics world exists.
    let (tuning, source) =
        content::load_movement_tuning(Path::new(content::MOVEMENT_CONFIG_PATH))?;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Lilyleap".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin { tuning, source },
        save::SavePlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        objects::ObjectsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
    Ok(())
}
