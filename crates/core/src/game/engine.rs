//! Turn engine composition: player actions, enemy behavior and the turn loop.
//! This file wires focused engine submodules together.

use super::*;

mod enemy_ai;
mod player_actions;
mod turn;

#[cfg(test)]
mod tests;
