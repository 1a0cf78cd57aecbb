pub mod player;
pub mod walls;
pub mod world;

pub use player::spawn_player_system;
pub use walls::install_maze_system;
pub use world::setup_world_system;
