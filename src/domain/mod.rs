pub mod skin;
pub mod totem;
