//! Data structures representing a decoded scene document

// Declare all submodules
mod config;
mod core;
mod material;

// Re-export all public types from core module
pub use core::{
    Accessor, AccessorType, Asset, AttributeSemantic, Buffer, BufferTarget, BufferView,
    ComponentType, Mesh, Node, NodeKind, Primitive, PrimitiveMode, Scene, SceneDocument,
};

// Re-export all public types from material module
pub use material::{Image, Material, Texture, KHR_MATERIALS_UNLIT};

// Re-export decode configuration
pub use config::{DEFAULT_MAX_HIERARCHY_DEPTH, DecodeConfig};
