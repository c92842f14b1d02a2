//! Equal-area sphere partitions
//!
//! Partitions the unit sphere (or, degenerately, the circle) into `N`
//! regions of equal area arranged in latitude-ordered collars, and emits one
//! well-distributed unit direction per region.
//!
//! # Quick Start
//!
//! ```rust
//! use eq_sphere_partition::*;
//!
//! let config = PartitionConfigBuilder::new()
//!     .region_count(200).unwrap()
//!     .build().unwrap();
//!
//! let partition = Partition::from_config(&config).unwrap();
//! let vertices = VertexEmitter::new(&config).emit(&partition);
//!
//! assert_eq!(vertices.len(), 200);
//! println!("{} collars", partition.collar_count());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration, partitions and vertices

// Modules
pub mod error;
pub mod config;
pub mod partition;
pub mod vertex;

// Re-export core types for convenience
pub use error::{PartitionError, Result};
pub use config::{Dimension, LatLonBounds, PartitionConfig, PartitionConfigBuilder};
pub use partition::{generate_caps, round_with_carry, Collar, Partition};
pub use vertex::{emit_vertices, Vertex, VertexEmitter};

// Re-export glam::DVec3 for convenience
pub use glam::DVec3;
