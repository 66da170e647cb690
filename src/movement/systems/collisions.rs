//! Movement domain: ground contact sensor.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, Player};

const GROUND_CHECK_DISTANCE: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut GroundContact), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not pads, hazards, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut contact) in &mut query {
        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 16.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            GROUND_CHECK_DISTANCE,
            true,
            &ground_filter,
        );

        contact.set_if_neq(GroundContact(hit.is_some()));
    }
}
