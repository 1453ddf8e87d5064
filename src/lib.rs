//! Multi-level labyrinth generator.
//!
//! Each level is a ring of rooms around a hub. Passages only join rooms on
//! adjacent levels and never cross or fold onto one another. Generation grows a
//! spanning tree at random, refactoring when it gets stuck, and then finds a
//! far-away goal room with two breadth-first searches.
//!
//! ```no_run
//! use labyrinth_generator::{generate_labyrinth, LabyrinthConfig, RoomId};
//!
//! let labyrinth = generate_labyrinth(LabyrinthConfig {
//!     seed: Some(1),
//!     ..Default::default()
//! })
//! .unwrap();
//! let path = labyrinth
//!     .shortest_path(RoomId::origin(), Some(labyrinth.goal_room()))
//!     .unwrap();
//! println!("{} rooms to the goal", path.len());
//! ```

pub mod builder;
pub mod conflict;
pub mod constants;
pub mod gen;
pub mod labyrinth;
pub mod path;
pub mod random_set;
pub mod room;
pub mod room_connection;
pub mod room_labels;

pub use gen::{generate, generate_labyrinth, generate_labyrinth_with_rng, LabyrinthConfig, LabyrinthError};
pub use labyrinth::Labyrinth;
pub use path::Connections;
pub use room::{Dimensions, RoomId};
pub use room_connection::RoomConnection;
