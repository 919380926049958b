pub use sea_orm_migration::prelude::*;

pub mod schema_edit;

mod m20240101_000001_create_catalog_tables;
mod m20240527_154135_rework_label_and_tag_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_catalog_tables::Migration),
            Box::new(m20240527_154135_rework_label_and_tag_indexes::Migration),
        ]
    }
}
