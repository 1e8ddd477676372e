//! Wire-level types shared between the campaign console and the campaign backend.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
