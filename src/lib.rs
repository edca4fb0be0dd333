// src/lib.rs

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod mesh;
pub mod native;
pub mod path;
pub mod shape;
pub mod triangulator;
pub mod trigger;

pub use config::MeshOptions;
pub use error::{GeometryError, Result};
pub use geometry::Rect;
pub use mesh::{Aabb, Mesh, Vertex};
pub use native::NativeCollider;
pub use path::PolygonPath;
pub use shape::{CapsuleDirection, ColliderShape, ColliderType, ShapeKind};
pub use triangulator::{triangulate, Triangulator};
pub use trigger::{CharacterAnimation, CharacterFrame, HitTrigger, HurtTrigger, TriggerRef, TriggerRole};
