// src/trigger.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::MeshOptions;
use crate::error::{GeometryError, Result};
use crate::mesh::Mesh;
use crate::shape::{ColliderShape, ColliderType};

pub const DEFAULT_FRAME_DURATION: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerRole {
    /// Deals damage.
    Hit,
    /// Receives damage.
    Hurt,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HitTrigger {
    pub collider: ColliderShape,
}

impl HitTrigger {
    pub fn new(ty: ColliderType) -> Self {
        Self { collider: ColliderShape::new(ty) }
    }
}

impl From<ColliderShape> for HitTrigger {
    fn from(collider: ColliderShape) -> Self {
        Self { collider }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HurtTrigger {
    pub collider: ColliderShape,
}

impl HurtTrigger {
    pub fn new(ty: ColliderType) -> Self {
        Self { collider: ColliderShape::new(ty) }
    }
}

impl From<ColliderShape> for HurtTrigger {
    fn from(collider: ColliderShape) -> Self {
        Self { collider }
    }
}

/// Identifies one trigger within a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriggerRef {
    pub role: TriggerRole,
    pub index: usize,
}

/// One sprite frame's timing and collision triggers. The sprite itself is
/// owned by the asset layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterFrame {
    /// Length in game ticks.
    pub duration: u32,
    pub hit_triggers: Vec<HitTrigger>,
    pub hurt_triggers: Vec<HurtTrigger>,
}

impl Default for CharacterFrame {
    fn default() -> Self {
        Self {
            duration: DEFAULT_FRAME_DURATION,
            hit_triggers: Vec::new(),
            hurt_triggers: Vec::new(),
        }
    }
}

impl CharacterFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hit_trigger(&mut self, ty: ColliderType, position: Vec2) -> &mut HitTrigger {
        let mut trigger = HitTrigger::new(ty);
        trigger.collider.position = position;
        self.hit_triggers.push(trigger);
        let last = self.hit_triggers.len() - 1;
        &mut self.hit_triggers[last]
    }

    pub fn add_hurt_trigger(&mut self, ty: ColliderType, position: Vec2) -> &mut HurtTrigger {
        let mut trigger = HurtTrigger::new(ty);
        trigger.collider.position = position;
        self.hurt_triggers.push(trigger);
        let last = self.hurt_triggers.len() - 1;
        &mut self.hurt_triggers[last]
    }

    pub fn collider(&self, trigger: TriggerRef) -> Result<&ColliderShape> {
        let found = match trigger.role {
            TriggerRole::Hit => self.hit_triggers.get(trigger.index).map(|t| &t.collider),
            TriggerRole::Hurt => self.hurt_triggers.get(trigger.index).map(|t| &t.collider),
        };
        found.ok_or(GeometryError::IndexOutOfRange {
            index: trigger.index,
            len: self.trigger_count(trigger.role),
        })
    }

    pub fn collider_mut(&mut self, trigger: TriggerRef) -> Result<&mut ColliderShape> {
        let len = self.trigger_count(trigger.role);
        let found = match trigger.role {
            TriggerRole::Hit => self.hit_triggers.get_mut(trigger.index).map(|t| &mut t.collider),
            TriggerRole::Hurt => self.hurt_triggers.get_mut(trigger.index).map(|t| &mut t.collider),
        };
        found.ok_or(GeometryError::IndexOutOfRange { index: trigger.index, len })
    }

    pub fn trigger_count(&self, role: TriggerRole) -> usize {
        match role {
            TriggerRole::Hit => self.hit_triggers.len(),
            TriggerRole::Hurt => self.hurt_triggers.len(),
        }
    }

    /// All triggers, hurt triggers first, in draw order.
    pub fn triggers(&self) -> impl Iterator<Item = (TriggerRef, &ColliderShape)> {
        let hurt = self.hurt_triggers.iter().enumerate().map(|(index, t)| {
            (TriggerRef { role: TriggerRole::Hurt, index }, &t.collider)
        });
        let hit = self.hit_triggers.iter().enumerate().map(|(index, t)| {
            (TriggerRef { role: TriggerRole::Hit, index }, &t.collider)
        });
        hurt.chain(hit)
    }

    /// Topmost trigger under `point`. Hit triggers are drawn over hurt
    /// triggers, and later triggers over earlier ones.
    pub fn pick(&self, point: Vec2) -> Option<TriggerRef> {
        self.triggers()
            .filter(|(_, collider)| collider.contains(point))
            .map(|(trigger, _)| trigger)
            .last()
    }

    /// Every trigger containing `point`, in draw order.
    pub fn triggers_at(&self, point: Vec2) -> Vec<TriggerRef> {
        self.triggers()
            .filter(|(_, collider)| collider.contains(point))
            .map(|(trigger, _)| trigger)
            .collect()
    }

    pub fn trigger_meshes(&self, options: &MeshOptions) -> Vec<(TriggerRef, Mesh)> {
        self.triggers()
            .map(|(trigger, collider)| (trigger, collider.build_mesh(options)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterAnimation {
    pub looping: bool,
    pub frames: Vec<CharacterFrame>,
}

impl Default for CharacterAnimation {
    fn default() -> Self {
        Self { looping: true, frames: Vec::new() }
    }
}

impl CharacterAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self, index: usize) -> Result<&CharacterFrame> {
        let len = self.frames.len();
        self.frames.get(index).ok_or(GeometryError::IndexOutOfRange { index, len })
    }

    pub fn frame_mut(&mut self, index: usize) -> Result<&mut CharacterFrame> {
        let len = self.frames.len();
        self.frames.get_mut(index).ok_or(GeometryError::IndexOutOfRange { index, len })
    }

    /// Sum of frame durations in ticks.
    pub fn total_duration(&self) -> u32 {
        self.frames.iter().map(|frame| frame.duration).sum()
    }
}
