// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 数据库初始模式迁移
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    /// 应用数据库迁移
    ///
    /// # 参数
    ///
    /// * `manager` - 数据库模式管理器
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 迁移成功
    /// * `Err(DbErr)` - 迁移失败
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Create users table (No dependencies)
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. Create tags table (No dependencies)
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Tags::Tag)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Create questions table (Depends on Users)
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Questions::Content).text().not_null())
                    .col(
                        ColumnDef::new(Questions::Like)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Questions::AuthorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Questions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questions_author")
                            .from(Questions::Table, Questions::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. Create answers table (Depends on Users)
        manager
            .create_table(
                Table::create()
                    .table(Answers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Answers::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Answers::Correct)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Answers::Content).text().not_null())
                    .col(
                        ColumnDef::new(Answers::Like)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Answers::AuthorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Answers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answers_author")
                            .from(Answers::Table, Answers::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 5. Create user_profiles table (Depends on Users, one row per user)
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::Avatar)
                            .string()
                            .not_null()
                            .default("avatar.png"),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profiles_user")
                            .from(UserProfiles::Table, UserProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 6. Create question_tags join table (Questions <-> Tags)
        manager
            .create_table(
                Table::create()
                    .table(QuestionTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(QuestionTags::QuestionId).uuid().not_null())
                    .col(ColumnDef::new(QuestionTags::TagId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(QuestionTags::QuestionId)
                            .col(QuestionTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_tags_question")
                            .from(QuestionTags::Table, QuestionTags::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_tags_tag")
                            .from(QuestionTags::Table, QuestionTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 7. Create question_answers join table (Questions <-> Answers)
        manager
            .create_table(
                Table::create()
                    .table(QuestionAnswers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuestionAnswers::QuestionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuestionAnswers::AnswerId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(QuestionAnswers::QuestionId)
                            .col(QuestionAnswers::AnswerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_answers_question")
                            .from(QuestionAnswers::Table, QuestionAnswers::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_answers_answer")
                            .from(QuestionAnswers::Table, QuestionAnswers::AnswerId)
                            .to(Answers::Table, Answers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 8. Create question_likes join table (Questions <-> Users, liked_by)
        manager
            .create_table(
                Table::create()
                    .table(QuestionLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(QuestionLikes::QuestionId).uuid().not_null())
                    .col(ColumnDef::new(QuestionLikes::UserId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(QuestionLikes::QuestionId)
                            .col(QuestionLikes::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_likes_question")
                            .from(QuestionLikes::Table, QuestionLikes::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_likes_user")
                            .from(QuestionLikes::Table, QuestionLikes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 9. Create answer_ratings join table (Answers <-> Users, rated_by)
        manager
            .create_table(
                Table::create()
                    .table(AnswerRatings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AnswerRatings::AnswerId).uuid().not_null())
                    .col(ColumnDef::new(AnswerRatings::UserId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(AnswerRatings::AnswerId)
                            .col(AnswerRatings::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_ratings_answer")
                            .from(AnswerRatings::Table, AnswerRatings::AnswerId)
                            .to(Answers::Table, Answers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_ratings_user")
                            .from(AnswerRatings::Table, AnswerRatings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    /// 回滚数据库迁移
    ///
    /// # 参数
    ///
    /// * `manager` - 数据库模式管理器
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 回滚成功
    /// * `Err(DbErr)` - 回滚失败
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order of creation/dependency
        manager
            .drop_table(Table::drop().table(AnswerRatings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(QuestionLikes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(QuestionAnswers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(QuestionTags::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Answers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Tag,
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Id,
    Title,
    Content,
    Like,
    AuthorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Answers {
    Table,
    Id,
    Correct,
    Content,
    Like,
    AuthorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    Id,
    UserId,
    Avatar,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum QuestionTags {
    Table,
    QuestionId,
    TagId,
}

#[derive(DeriveIden)]
enum QuestionAnswers {
    Table,
    QuestionId,
    AnswerId,
}

#[derive(DeriveIden)]
enum QuestionLikes {
    Table,
    QuestionId,
    UserId,
}

#[derive(DeriveIden)]
enum AnswerRatings {
    Table,
    AnswerId,
    UserId,
}
