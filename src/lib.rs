// src/lib.rs

pub mod common;
pub mod config;
pub mod db;
pub mod dispatch;
pub mod handlers;
pub mod models;
