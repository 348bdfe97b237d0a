//! Automated players.

pub mod heuristic;
pub mod strategy;
