//! SeaORM adapters. Functions return `DbErr`; repos map to `DomainError`.

pub mod ais_sea;
pub mod aliases_sea;
pub mod ally_teams_sea;
pub mod demos_sea;
pub mod maps_sea;
pub mod participants_sea;
pub mod users_sea;
