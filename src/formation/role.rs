//! Battlefield role classification

use serde::{Deserialize, Serialize};

/// Role a unit plays in the simplified battle simulation.
///
/// A formation's role is the statistical mode of its members' roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Undefined,
    Ambusher,
    Brawler,
    Juggernaut,
    MissileBoat,
    Scout,
    Skirmisher,
    Sniper,
    Striker,
}
