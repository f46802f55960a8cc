use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 作业集合：每行一个 JSON 文档，difficulty 单独投影用于筛选
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::DocId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Assignments::Difficulty).string().null())
                    .col(ColumnDef::new(Assignments::Document).text().not_null())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 提交集合：status 与 user 投影用于待批改列表和“我的提交”
        manager
            .create_table(
                Table::create()
                    .table(Submitted::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submitted::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submitted::DocId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Submitted::Status).string().null())
                    .col(ColumnDef::new(Submitted::UserEmail).string().null())
                    .col(ColumnDef::new(Submitted::Document).text().not_null())
                    .col(ColumnDef::new(Submitted::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_difficulty")
                    .table(Assignments::Table)
                    .col(Assignments::Difficulty)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submitted_status")
                    .table(Submitted::Table)
                    .col(Submitted::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submitted_user_email")
                    .table(Submitted::Table)
                    .col(Submitted::UserEmail)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Submitted::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Seq,
    DocId,
    Difficulty,
    Document,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Submitted {
    #[sea_orm(iden = "submitted")]
    Table,
    Seq,
    DocId,
    Status,
    UserEmail,
    Document,
    CreatedAt,
}
