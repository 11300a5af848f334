pub mod aliases;
pub mod ally_teams;
pub mod ais;
pub mod demos;
pub mod maps;
pub mod players;
pub mod spectators;
pub mod users;

pub use aliases::Entity as Aliases;
pub use ally_teams::Entity as AllyTeams;
pub use ais::Entity as Ais;
pub use demos::Entity as Demos;
pub use maps::Entity as Maps;
pub use players::Entity as Players;
pub use spectators::Entity as Spectators;
pub use users::Entity as Users;
