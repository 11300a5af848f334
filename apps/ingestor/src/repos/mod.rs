//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod ais;
pub mod ally_teams;
pub mod demos;
pub mod maps;
pub mod participants;
pub mod users;
