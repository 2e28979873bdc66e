pub mod play;
pub mod rooms;
