use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create calculations table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Calculations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Calculations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Calculations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Calculations::Operation)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Calculations::Operand1).double().not_null())
                    .col(ColumnDef::new(Calculations::Operand2).double().not_null())
                    .col(ColumnDef::new(Calculations::Result).double().not_null())
                    .col(
                        ColumnDef::new(Calculations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calculations_user_id")
                            .from(Calculations::Table, Calculations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Closed operator set, mirrors the Operation enum
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE calculations
                ADD CONSTRAINT chk_calculations_operation
                CHECK (operation IN ('add', 'subtract', 'multiply', 'divide'));
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Owner-scoped listing, history and statistics all filter by user
        // and order by created_at.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_calculations_user_created_at
                ON calculations (user_id, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_calculations_user_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Calculations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Calculations {
    Table,
    Id,
    UserId,
    Operation,
    Operand1,
    Operand2,
    Result,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
