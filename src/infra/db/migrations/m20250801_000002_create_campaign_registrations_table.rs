//! Migration: Create the campaign_registrations table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampaignRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampaignRegistrations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CampaignRegistrations::FullName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignRegistrations::IdCardNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignRegistrations::TargetProvince)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignRegistrations::OwnerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignRegistrations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_registrations_owner")
                            .from(
                                CampaignRegistrations::Table,
                                CampaignRegistrations::OwnerId,
                            )
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by owner and by province are the common access paths
        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_registrations_owner_id")
                    .table(CampaignRegistrations::Table)
                    .col(CampaignRegistrations::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_registrations_target_province")
                    .table(CampaignRegistrations::Table)
                    .col(CampaignRegistrations::TargetProvince)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampaignRegistrations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CampaignRegistrations {
    Table,
    Id,
    FullName,
    IdCardNumber,
    TargetProvince,
    OwnerId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
