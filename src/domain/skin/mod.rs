pub mod regions;
pub mod symmetry;
pub mod texture;

pub use regions::{extract_face, extract_limbs_and_torso, BodyRegions, Region};
pub use symmetry::resolve;
pub use texture::SkinTexture;
