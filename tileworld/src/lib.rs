#![no_std]

pub mod camera;
pub mod config;
pub mod entity;
pub mod frame;
pub mod game;
pub mod images;
pub mod input;
pub mod level;
pub mod map;
pub mod physics;
pub mod render;
pub mod sprite;
pub mod tile;

#[cfg(test)]
#[macro_use]
extern crate std;
