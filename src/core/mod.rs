pub mod lattice;
pub mod sampling;
pub mod trail;
pub mod wedges;

pub use lattice::*;
pub use sampling::*;
pub use trail::*;
pub use wedges::*;
