//! # weft-mesh
//!
//! Grid topology for the square mass-spring cloth.
//!
//! ## Key Types
//!
//! - [`GridSpec`]: The `R × R` particle index space, bounds checks, pinned corners.
//! - [`SpringClass`] / [`RestLengths`]: Spring families and their rest lengths;
//!   [`springs::SPRING_STENCIL`] lists which grid offsets they connect.
//! - [`ClothTopology`]: Render-only triangle and wireframe index buffers.
//! - [`normals`]: Hex-ring normal estimation from current positions.
//! - [`generators`]: Initial flat-sheet layout.

pub mod generators;
pub mod grid;
pub mod normals;
pub mod springs;
pub mod topology;

pub use grid::GridSpec;
pub use springs::{RestLengths, SpringClass, SpringPartner};
pub use topology::ClothTopology;
