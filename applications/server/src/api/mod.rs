//! API route handlers

pub mod activities;
pub mod auth;
pub mod collaborations;
pub mod exports;
pub mod health;
pub mod playlists;
pub mod songs;
pub mod users;
