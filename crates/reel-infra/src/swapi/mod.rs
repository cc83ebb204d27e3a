//! SWAPI film catalog client.

mod client;

pub use client::{SwapiClient, SwapiConfig};
