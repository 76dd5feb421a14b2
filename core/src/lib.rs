#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod application;
pub mod content;
pub mod display;
pub mod framebuffer;
pub mod input;
pub mod photo;
pub mod presenter;
pub mod ui;
