use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const TAGS_TABLES: &[(&str, &str)] = &[
    ("feature_sets_tags", "_feature_sets_tags_obj_name_fk"),
    ("feature_vectors_tags", "_feature_vectors_tags_obj_name_fk"),
    ("functions_tags", "_functions_tags_obj_name_fk"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtifactsV2Labels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtifactsV2Labels::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ArtifactsV2Labels::Name).string().not_null())
                    .col(ColumnDef::new(ArtifactsV2Labels::Value).string().not_null())
                    .col(ColumnDef::new(ArtifactsV2Labels::Parent).big_integer())
                    .to_owned(),
            )
            .await?;

        for (table, obj_name_index) in TAGS_TABLES.iter().copied() {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(table))
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Alias::new("id"))
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Alias::new("project")).string().not_null())
                        .col(ColumnDef::new(Alias::new("name")).string().not_null())
                        .col(ColumnDef::new(Alias::new("obj_id")).big_integer())
                        .col(ColumnDef::new(Alias::new("obj_name")).string().not_null())
                        .to_owned(),
                )
                .await?;
            manager
                .create_index(
                    Index::create()
                        .name(obj_name_index)
                        .table(Alias::new(table))
                        .col(Alias::new("obj_name"))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(HubSources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HubSources::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HubSources::Name).string().not_null())
                    .col(
                        ColumnDef::new(HubSources::Index)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(HubSources::Created).timestamp())
                    .col(ColumnDef::new(HubSources::Updated).timestamp())
                    .col(ColumnDef::new(HubSources::Object).json_binary())
                    .to_owned(),
            )
            .await?;
        // non-unique despite the name; kept from before the marketplace -> hub rename
        manager
            .create_index(
                Index::create()
                    .name("_marketplace_sources_uc")
                    .table(HubSources::Table)
                    .col(HubSources::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HubSources::Table).to_owned())
            .await?;
        for (table, _) in TAGS_TABLES.iter().rev().copied() {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }
        manager
            .drop_table(Table::drop().table(ArtifactsV2Labels::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ArtifactsV2Labels {
    Table,
    Id,
    Name,
    Value,
    Parent,
}

#[derive(DeriveIden)]
enum HubSources {
    Table,
    Id,
    Name,
    Index,
    Created,
    Updated,
    Object,
}
