use sea_orm_migration::{
    prelude::*,
    sea_orm::{DbBackend, Statement, TransactionTrait},
};

/// One declarative edit of the index/constraint catalog.
///
/// Drop variants carry the full definition of the object they remove, so the
/// inverse of any edit can be derived without extra context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaEdit {
    CreateIndex {
        table: &'static str,
        name: &'static str,
        columns: &'static [&'static str],
        unique: bool,
    },
    DropIndex {
        table: &'static str,
        name: &'static str,
        columns: &'static [&'static str],
        unique: bool,
    },
    CreateUniqueConstraint {
        table: &'static str,
        name: &'static str,
        columns: &'static [&'static str],
    },
    DropUniqueConstraint {
        table: &'static str,
        name: &'static str,
        columns: &'static [&'static str],
    },
}

impl SchemaEdit {
    /// The exact semantic opposite of this edit.
    pub fn inverse(&self) -> SchemaEdit {
        match *self {
            SchemaEdit::CreateIndex {
                table,
                name,
                columns,
                unique,
            } => SchemaEdit::DropIndex {
                table,
                name,
                columns,
                unique,
            },
            SchemaEdit::DropIndex {
                table,
                name,
                columns,
                unique,
            } => SchemaEdit::CreateIndex {
                table,
                name,
                columns,
                unique,
            },
            SchemaEdit::CreateUniqueConstraint {
                table,
                name,
                columns,
            } => SchemaEdit::DropUniqueConstraint {
                table,
                name,
                columns,
            },
            SchemaEdit::DropUniqueConstraint {
                table,
                name,
                columns,
            } => SchemaEdit::CreateUniqueConstraint {
                table,
                name,
                columns,
            },
        }
    }

    fn statement(&self, backend: DbBackend) -> Statement {
        match *self {
            SchemaEdit::CreateIndex {
                table,
                name,
                columns,
                unique,
            } => {
                let mut stmt = Index::create();
                stmt.name(name).table(Alias::new(table));
                for column in columns {
                    stmt.col(Alias::new(*column));
                }
                if unique {
                    stmt.unique();
                }
                backend.build(&stmt)
            }
            SchemaEdit::DropIndex { table, name, .. } => {
                let mut stmt = Index::drop();
                stmt.name(name).table(Alias::new(table));
                backend.build(&stmt)
            }
            SchemaEdit::CreateUniqueConstraint {
                table,
                name,
                columns,
            } => {
                // sea-query has no builder for table-level unique constraints
                let columns = columns
                    .iter()
                    .map(|column| format!(r#""{column}""#))
                    .collect::<Vec<_>>()
                    .join(", ");
                Statement::from_string(
                    backend,
                    format!(r#"ALTER TABLE "{table}" ADD CONSTRAINT "{name}" UNIQUE ({columns})"#),
                )
            }
            SchemaEdit::DropUniqueConstraint { table, name, .. } => Statement::from_string(
                backend,
                format!(r#"ALTER TABLE "{table}" DROP CONSTRAINT "{name}""#),
            ),
        }
    }
}

/// Derives the plan that undoes `plan`: reverse order, each edit inverted.
pub fn inverse_plan(plan: &[SchemaEdit]) -> Vec<SchemaEdit> {
    plan.iter().rev().map(SchemaEdit::inverse).collect()
}

/// Executes every edit of `plan` within a single transaction.
pub async fn apply(manager: &SchemaManager<'_>, plan: &[SchemaEdit]) -> Result<(), DbErr> {
    let backend = manager.get_database_backend();
    let txn = manager.get_connection().begin().await?;
    for edit in plan {
        let statement = edit.statement(backend);
        let sql = statement.sql.clone();
        txn.execute(statement)
            .await
            .map_err(|err| DbErr::Migration(format!("{err}\nQuery: {sql}")))?;
    }
    txn.commit().await
}
