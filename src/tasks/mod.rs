//! Sequential, location-gated objectives
//!
//! Tasks complete strictly in order: only the current task is checked
//! against the player's position, so wandering to a later objective
//! early does nothing.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::types::{DoorId, TaskId};

/// Shown once every task is done
pub const ALL_TASKS_COMPLETE: &str = "All tasks completed! Escape the mansion!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub location: Vec3,
    /// Distance within which the player completes the task
    pub radius: f32,
    pub completed: bool,
    /// Door opened when this task completes (key-hunt tasks)
    pub unlocks_door: Option<DoorId>,
}

impl Task {
    pub fn new(id: u32, description: &str, location: Vec3, radius: f32) -> Self {
        Self {
            id: TaskId(id),
            description: description.to_string(),
            location,
            radius,
            completed: false,
            unlocks_door: None,
        }
    }

    pub fn unlocking(mut self, door: DoorId) -> Self {
        self.unlocks_door = Some(door);
        self
    }
}

/// Details of a task completed this tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: TaskId,
    pub description: String,
    pub unlocks_door: Option<DoorId>,
}

/// Ordered task list with a current-index completion model
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    current_index: usize,
    completed_count: usize,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            current_index: 0,
            completed_count: 0,
        }
    }

    /// The mansion scenario's eight tasks, entrance key to final escape
    pub fn standard(interaction_radius: f32) -> Self {
        Self::new(vec![
            Task::new(
                1,
                "Find the study key in the entrance hall",
                Vec3::new(10.0, 1.0, 10.0),
                interaction_radius,
            ),
            Task::new(
                2,
                "Unlock the study door",
                Vec3::new(25.0, 1.0, 15.0),
                interaction_radius,
            )
            .unlocking(DoorId(1)),
            Task::new(
                3,
                "Read the research notes on the desk",
                Vec3::new(30.0, 1.0, 20.0),
                interaction_radius,
            ),
            Task::new(
                4,
                "Find the basement key in the bedroom",
                Vec3::new(40.0, 1.0, 35.0),
                interaction_radius,
            ),
            Task::new(
                5,
                "Unlock and enter the basement",
                Vec3::new(20.0, 1.0, 45.0),
                interaction_radius,
            )
            .unlocking(DoorId(3)),
            Task::new(
                6,
                "Find the antidote formula in the lab",
                Vec3::new(15.0, -5.0, 50.0),
                interaction_radius,
            ),
            Task::new(
                7,
                "Collect 3 chemical samples from the lab",
                Vec3::new(10.0, -5.0, 55.0),
                interaction_radius,
            ),
            Task::new(
                8,
                "Escape through the front door",
                Vec3::new(5.0, 1.0, 5.0),
                interaction_radius,
            ),
        ])
    }

    /// Complete the current task if the player is standing on it
    ///
    /// Returns `Some` exactly on the tick a task transitions to
    /// completed; all other calls return `None`.
    pub fn check_completion(&mut self, player_pos: Vec3) -> Option<CompletedTask> {
        let task = self.tasks.get_mut(self.current_index)?;
        if task.completed {
            return None;
        }

        if task.location.distance(player_pos) <= task.radius {
            task.completed = true;
            let completed = CompletedTask {
                id: task.id,
                description: task.description.clone(),
                unlocks_door: task.unlocks_door,
            };
            self.completed_count += 1;
            self.current_index += 1;
            return Some(completed);
        }

        None
    }

    pub fn all_completed(&self) -> bool {
        self.completed_count >= self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.get(self.current_index)
    }

    /// Description of the current task, or the all-complete message once
    /// the index has run off the end
    pub fn current_description(&self) -> &str {
        self.current_task()
            .map(|t| t.description.as_str())
            .unwrap_or(ALL_TASKS_COMPLETE)
    }

    /// Distance to the current task location; 0.0 when none remain
    pub fn distance_to_current(&self, player_pos: Vec3) -> f32 {
        self.current_task()
            .map(|t| t.location.distance(player_pos))
            .unwrap_or(0.0)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
