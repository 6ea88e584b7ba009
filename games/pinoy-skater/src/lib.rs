use wasm_bindgen::prelude::*;
use skate_engine::*;

pub mod collision;
pub mod config;
pub mod events;
pub mod game;
pub mod movers;
pub mod parallax;
pub mod player;
pub mod round;
pub mod sounds;
pub mod spawner;
use game::PinoySkater;

skate_web::export_game!(PinoySkater, "pinoy-skater");
