use anyhow::{Context, Result};
#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, WindowPosition};
use clap::Parser;

use game::{
    physics::CollisionWorld,
    resources::{MazeSettings, PendingLayout},
    spawning::{install_maze_system, setup_world_system, spawn_player_system},
    systems::{
        input::{cursor_toggle_system, input_movement_system},
        movement::player_movement_system,
        sync::{camera_follow_system, flashlight_follow_system},
    },
};
use maze::MazeLayout;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "First-person maze demo", long_about = None)]
struct Args {
    // Maze rows
    #[arg(long, default_value = "10")]
    rows: usize,

    // Maze columns
    #[arg(long, default_value = "10")]
    cols: usize,

    // Half the size of one maze cell in world units
    #[arg(long, default_value = "6.0")]
    cell_half_size: f32,

    // RNG seed; omit for a different maze every run
    #[arg(long)]
    seed: Option<u64>,

    // Window X position
    #[arg(long)]
    window_x: Option<i32>,

    // Window Y position
    #[arg(long)]
    window_y: Option<i32>,

    // Window width
    #[arg(long, default_value = "1200")]
    window_width: u32,

    // Window height
    #[arg(long, default_value = "800")]
    window_height: u32,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    // Generate and lay out the maze fully before the first frame; any failure
    // here aborts startup rather than rendering a partial maze.
    let grid = maze::generate(args.rows, args.cols, args.seed).context("maze generation failed")?;
    let layout = MazeLayout::build(&grid, args.cell_half_size).context("maze layout failed")?;
    // info! doesn't work because Bevy isn't initialized yet
    println!(
        "generated {}x{} maze: {} wall placements, {} collider segments",
        args.rows,
        args.cols,
        layout.placements().len(),
        layout.collider().segments.len()
    );

    let settings = MazeSettings {
        rows: args.rows,
        cols: args.cols,
        cell_half_size: args.cell_half_size,
    };

    let window_position = if let (Some(x), Some(y)) = (args.window_x, args.window_y) {
        WindowPosition::At(IVec2::new(x, y))
    } else {
        WindowPosition::Automatic
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Maze".to_string(),
                resolution: (args.window_width, args.window_height).into(),
                position: window_position,
                ..default()
            }),
            primary_cursor_options: Some(CursorOptions {
                visible: false,
                grab_mode: CursorGrabMode::Locked,
                hit_test: true,
            }),
            ..default()
        }))
        .insert_resource(settings)
        .insert_resource(PendingLayout::new(layout))
        .insert_resource(CollisionWorld::default())
        .add_systems(
            Startup,
            (setup_world_system, install_maze_system, spawn_player_system),
        )
        .add_systems(
            Update,
            (
                // Toggle cursor lock with Escape
                cursor_toggle_system,
                // Mouse look and WASD into player velocity
                input_movement_system,
                // Integrate velocity through the collision world
                player_movement_system,
                // Camera rides at the player's eye height
                camera_follow_system,
                // Flashlight tracks the camera
                flashlight_follow_system,
            )
                .chain(),
        )
        .run();

    Ok(())
}
