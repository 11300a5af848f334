use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Maps {
    Table,
    Id,
    ScriptName,
    FileName,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    CountryCode,
    Rank,
    Skill,
    SkillUncertainty,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Aliases {
    Table,
    Id,
    UserId,
    Alias,
    CreatedAt,
}

#[derive(Iden)]
enum Demos {
    Table,
    Id,
    MapId,
    FileName,
    EngineVersion,
    GameVersion,
    StartTime,
    DurationMs,
    FullDurationMs,
    HostSettings,
    GameSettings,
    MapSettings,
    GameEndedNormally,
    Chatlog,
    Preset,
    HasBots,
    CreatedAt,
}

#[derive(Iden)]
enum AllyTeams {
    Table,
    Id,
    DemoId,
    AllyTeamId,
    StartBox,
    WinningTeam,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    DemoId,
    AllyTeamRowId,
    UserId,
    PlayerId,
    Name,
    TeamId,
    Handicap,
    Faction,
    CountryCode,
    RgbColor,
    Rank,
    Skill,
    SkillUncertainty,
    StartPos,
}

#[derive(Iden)]
enum Spectators {
    Table,
    Id,
    DemoId,
    UserId,
    PlayerId,
    Name,
    CountryCode,
    Rank,
    Skill,
    SkillUncertainty,
}

#[derive(Iden)]
enum Ais {
    Table,
    Id,
    AllyTeamRowId,
    AiId,
    Name,
    ShortName,
    Host,
    StartPos,
    Faction,
    RgbColor,
    Handicap,
}

fn pk_auto<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // maps
        manager
            .create_table(
                Table::create()
                    .table(Maps::Table)
                    .if_not_exists()
                    .col(pk_auto(Maps::Id))
                    .col(ColumnDef::new(Maps::ScriptName).string().not_null())
                    .col(ColumnDef::new(Maps::FileName).string().null())
                    .col(
                        ColumnDef::new(Maps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Maps::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_maps_script_name")
                    .table(Maps::Table)
                    .col(Maps::ScriptName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // users (id is the external account id, never generated here)
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::CountryCode).string().null())
                    .col(
                        ColumnDef::new(Users::Rank)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Users::Skill).string().null())
                    .col(ColumnDef::new(Users::SkillUncertainty).double().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // aliases
        manager
            .create_table(
                Table::create()
                    .table(Aliases::Table)
                    .if_not_exists()
                    .col(pk_auto(Aliases::Id))
                    .col(ColumnDef::new(Aliases::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Aliases::Alias).string().not_null())
                    .col(
                        ColumnDef::new(Aliases::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aliases_user_id")
                            .from(Aliases::Table, Aliases::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_aliases_user_alias")
                    .table(Aliases::Table)
                    .col(Aliases::UserId)
                    .col(Aliases::Alias)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // demos (id is the replay's game id)
        manager
            .create_table(
                Table::create()
                    .table(Demos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Demos::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Demos::MapId).big_integer().not_null())
                    .col(ColumnDef::new(Demos::FileName).string().not_null())
                    .col(ColumnDef::new(Demos::EngineVersion).string().not_null())
                    .col(ColumnDef::new(Demos::GameVersion).string().not_null())
                    .col(
                        ColumnDef::new(Demos::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Demos::DurationMs).big_integer().not_null())
                    .col(
                        ColumnDef::new(Demos::FullDurationMs)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Demos::HostSettings).json().not_null())
                    .col(ColumnDef::new(Demos::GameSettings).json().not_null())
                    .col(ColumnDef::new(Demos::MapSettings).json().not_null())
                    .col(
                        ColumnDef::new(Demos::GameEndedNormally)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Demos::Chatlog).json().not_null())
                    .col(ColumnDef::new(Demos::Preset).string_len(8).not_null())
                    .col(ColumnDef::new(Demos::HasBots).boolean().not_null())
                    .col(
                        ColumnDef::new(Demos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_demos_map_id")
                            .from(Demos::Table, Demos::MapId)
                            .to(Maps::Table, Maps::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_demos_map_id")
                    .table(Demos::Table)
                    .col(Demos::MapId)
                    .to_owned(),
            )
            .await?;

        // ally_teams
        manager
            .create_table(
                Table::create()
                    .table(AllyTeams::Table)
                    .if_not_exists()
                    .col(pk_auto(AllyTeams::Id))
                    .col(ColumnDef::new(AllyTeams::DemoId).string().not_null())
                    .col(ColumnDef::new(AllyTeams::AllyTeamId).integer().not_null())
                    .col(ColumnDef::new(AllyTeams::StartBox).json().null())
                    .col(
                        ColumnDef::new(AllyTeams::WinningTeam)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ally_teams_demo_id")
                            .from(AllyTeams::Table, AllyTeams::DemoId)
                            .to(Demos::Table, Demos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_ally_teams_demo_ally_team")
                    .table(AllyTeams::Table)
                    .col(AllyTeams::DemoId)
                    .col(AllyTeams::AllyTeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(pk_auto(Players::Id))
                    .col(ColumnDef::new(Players::DemoId).string().not_null())
                    .col(
                        ColumnDef::new(Players::AllyTeamRowId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Players::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Players::PlayerId).integer().not_null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::TeamId).integer().not_null())
                    .col(ColumnDef::new(Players::Handicap).double().not_null())
                    .col(ColumnDef::new(Players::Faction).string().not_null())
                    .col(ColumnDef::new(Players::CountryCode).string().null())
                    .col(ColumnDef::new(Players::RgbColor).json().not_null())
                    .col(ColumnDef::new(Players::Rank).integer().not_null())
                    .col(ColumnDef::new(Players::Skill).string().null())
                    .col(ColumnDef::new(Players::SkillUncertainty).double().null())
                    .col(ColumnDef::new(Players::StartPos).json().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_demo_id")
                            .from(Players::Table, Players::DemoId)
                            .to(Demos::Table, Demos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_ally_team_row_id")
                            .from(Players::Table, Players::AllyTeamRowId)
                            .to(AllyTeams::Table, AllyTeams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_user_id")
                            .from(Players::Table, Players::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_players_demo_player")
                    .table(Players::Table)
                    .col(Players::DemoId)
                    .col(Players::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_players_user_id")
                    .table(Players::Table)
                    .col(Players::UserId)
                    .to_owned(),
            )
            .await?;

        // spectators
        manager
            .create_table(
                Table::create()
                    .table(Spectators::Table)
                    .if_not_exists()
                    .col(pk_auto(Spectators::Id))
                    .col(ColumnDef::new(Spectators::DemoId).string().not_null())
                    .col(ColumnDef::new(Spectators::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Spectators::PlayerId).integer().not_null())
                    .col(ColumnDef::new(Spectators::Name).string().not_null())
                    .col(ColumnDef::new(Spectators::CountryCode).string().null())
                    .col(ColumnDef::new(Spectators::Rank).integer().not_null())
                    .col(ColumnDef::new(Spectators::Skill).string().null())
                    .col(
                        ColumnDef::new(Spectators::SkillUncertainty)
                            .double()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spectators_demo_id")
                            .from(Spectators::Table, Spectators::DemoId)
                            .to(Demos::Table, Demos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spectators_user_id")
                            .from(Spectators::Table, Spectators::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_spectators_demo_player")
                    .table(Spectators::Table)
                    .col(Spectators::DemoId)
                    .col(Spectators::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ais
        manager
            .create_table(
                Table::create()
                    .table(Ais::Table)
                    .if_not_exists()
                    .col(pk_auto(Ais::Id))
                    .col(ColumnDef::new(Ais::AllyTeamRowId).big_integer().not_null())
                    .col(ColumnDef::new(Ais::AiId).integer().not_null())
                    .col(ColumnDef::new(Ais::Name).string().not_null())
                    .col(ColumnDef::new(Ais::ShortName).string().not_null())
                    .col(ColumnDef::new(Ais::Host).integer().not_null())
                    .col(ColumnDef::new(Ais::StartPos).json().null())
                    .col(ColumnDef::new(Ais::Faction).string().not_null())
                    .col(ColumnDef::new(Ais::RgbColor).json().not_null())
                    .col(ColumnDef::new(Ais::Handicap).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ais_ally_team_row_id")
                            .from(Ais::Table, Ais::AllyTeamRowId)
                            .to(AllyTeams::Table, AllyTeams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse dependency order; indexes go with their tables
        manager
            .drop_table(Table::drop().table(Ais::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Spectators::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AllyTeams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Demos::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Aliases::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Maps::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
