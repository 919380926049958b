use crate::schema_edit::{self, SchemaEdit};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Label lookups on `artifacts_v2_labels(name, value)` gain an index and the
/// per-table tag lookup indexes are retired. `hub_sources.name` uniqueness
/// moves from a misleadingly named non-unique index to a real constraint.
const PLAN: &[SchemaEdit] = &[
    SchemaEdit::CreateIndex {
        table: "artifacts_v2_labels",
        name: "idx_artifacts_v2_labels_name_value",
        columns: &["name", "value"],
        unique: false,
    },
    SchemaEdit::DropIndex {
        table: "feature_sets_tags",
        name: "_feature_sets_tags_obj_name_fk",
        columns: &["obj_name"],
        unique: false,
    },
    SchemaEdit::DropIndex {
        table: "feature_vectors_tags",
        name: "_feature_vectors_tags_obj_name_fk",
        columns: &["obj_name"],
        unique: false,
    },
    SchemaEdit::DropIndex {
        table: "functions_tags",
        name: "_functions_tags_obj_name_fk",
        columns: &["obj_name"],
        unique: false,
    },
    SchemaEdit::DropIndex {
        table: "hub_sources",
        name: "_marketplace_sources_uc",
        columns: &["name"],
        unique: false,
    },
    SchemaEdit::CreateUniqueConstraint {
        table: "hub_sources",
        name: "_hub_sources_uc",
        columns: &["name"],
    },
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        schema_edit::apply(manager, PLAN).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        schema_edit::apply(manager, &schema_edit::inverse_plan(PLAN)).await
    }
}
