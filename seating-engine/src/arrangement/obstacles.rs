//! Decorative obstacles placed in the room

use super::{ArrangementStore, OBSTACLE_ID_PREFIX, StoreResult};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_coordinate, validate_dimension, validate_optional_name,
    validate_required_text,
};
use shared::arrangement::EventPayload;
use shared::models::{DEFAULT_OBSTACLE_SIZE, Obstacle, ObstacleCreate, ObstacleUpdate};
use shared::util::generate_id;

impl ArrangementStore {
    pub fn add_obstacle(&mut self, input: ObstacleCreate) -> StoreResult<Obstacle> {
        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        validate_dimension(input.width, "width")?;
        validate_dimension(input.height, "height")?;
        validate_coordinate(input.x, "x")?;
        validate_coordinate(input.y, "y")?;
        validate_coordinate(input.rotation, "rotation")?;

        let obstacle = Obstacle {
            id: generate_id(OBSTACLE_ID_PREFIX),
            name: input.name,
            kind: input.kind,
            x: input.x.unwrap_or(0.0),
            y: input.y.unwrap_or(0.0),
            width: input.width.unwrap_or(DEFAULT_OBSTACLE_SIZE),
            height: input.height.unwrap_or(DEFAULT_OBSTACLE_SIZE),
            rotation: input.rotation.unwrap_or(0.0),
        };
        self.obstacles.push(obstacle.clone());

        tracing::debug!(obstacle_id = %obstacle.id, "Obstacle added");
        self.events.emit(EventPayload::ObstacleAdded {
            obstacle: obstacle.clone(),
        });
        Ok(obstacle)
    }

    pub fn update_obstacle(&mut self, id: &str, patch: ObstacleUpdate) -> StoreResult<Obstacle> {
        let index = self.obstacle_index(id)?;
        validate_optional_name(&patch.name, "name")?;
        validate_dimension(patch.width, "width")?;
        validate_dimension(patch.height, "height")?;
        validate_coordinate(patch.x, "x")?;
        validate_coordinate(patch.y, "y")?;
        validate_coordinate(patch.rotation, "rotation")?;

        let obstacle = &mut self.obstacles[index];
        if let Some(name) = patch.name {
            obstacle.name = name;
        }
        if let Some(kind) = patch.kind {
            obstacle.kind = kind;
        }
        if let Some(x) = patch.x {
            obstacle.x = x;
        }
        if let Some(y) = patch.y {
            obstacle.y = y;
        }
        if let Some(width) = patch.width {
            obstacle.width = width;
        }
        if let Some(height) = patch.height {
            obstacle.height = height;
        }
        if let Some(rotation) = patch.rotation {
            obstacle.rotation = rotation;
        }
        let obstacle = obstacle.clone();

        tracing::debug!(obstacle_id = %obstacle.id, "Obstacle updated");
        self.events.emit(EventPayload::ObstacleUpdated {
            obstacle: obstacle.clone(),
        });
        Ok(obstacle)
    }

    pub fn remove_obstacle(&mut self, id: &str) -> StoreResult<Obstacle> {
        let index = self.obstacle_index(id)?;
        let obstacle = self.obstacles.remove(index);

        tracing::debug!(obstacle_id = %obstacle.id, "Obstacle removed");
        self.events.emit(EventPayload::ObstacleRemoved {
            obstacle: obstacle.clone(),
        });
        Ok(obstacle)
    }
}
