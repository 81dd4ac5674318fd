//! Common test utilities for integration tests
//!
//! This module provides:
//! - Scripted sub-computers that record every call into a shared `World`
//! - A counting waypoint store
//! - Sample generators for straight flights and phase scripts

#![allow(dead_code)]

pub mod fakes;
pub mod scenarios;

use glideguard_core::computers::SubComputers;
use glideguard_core::waypoint::{Waypoint, WaypointId, Waypoints};
use glideguard_core::{ComputerSettings, EngineConfig, GlideComputer};

pub use fakes::{CountingStore, Shared, World};
pub use scenarios::{FlightScript, HOME};

/// Id of the home waypoint in `home_store()`
pub const HOME_ID: u32 = 1;

/// A store holding only the home field
pub fn home_store() -> Waypoints {
    let mut waypoints = Waypoints::new();
    waypoints
        .insert(Waypoint::new(WaypointId::new(HOME_ID), "Home", HOME))
        .expect("store has room");
    waypoints
}

/// Computer with do-nothing collaborators and the home store
pub fn plain_computer(settings: ComputerSettings) -> GlideComputer {
    GlideComputer::new(
        settings,
        EngineConfig::default(),
        Box::new(home_store()),
        SubComputers::noop(),
    )
}

/// Computer wired to scripted collaborators sharing `world`
pub fn scripted_computer(settings: ComputerSettings, world: &Shared) -> GlideComputer {
    GlideComputer::new(
        settings,
        EngineConfig::default(),
        Box::new(home_store()),
        fakes::sub_computers(world),
    )
}
