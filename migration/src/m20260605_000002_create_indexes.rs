use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index for questions: hot listing sorts on (like, created_at)
        manager
            .create_index(
                Index::create()
                    .name("idx_questions_like_created_at")
                    .table(Questions::Table)
                    .col(Questions::Like)
                    .col(Questions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Index for questions: new listing sorts on created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_questions_created_at")
                    .table(Questions::Table)
                    .col(Questions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Index for answers: per-question listing sorts on created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_answers_created_at")
                    .table(Answers::Table)
                    .col(Answers::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Reverse lookup for the tag popularity aggregation
        manager
            .create_index(
                Index::create()
                    .name("idx_question_tags_tag_id")
                    .table(QuestionTags::Table)
                    .col(QuestionTags::TagId)
                    .to_owned(),
            )
            .await?;

        // Reverse lookups for user deletion cleanup
        manager
            .create_index(
                Index::create()
                    .name("idx_question_likes_user_id")
                    .table(QuestionLikes::Table)
                    .col(QuestionLikes::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_answer_ratings_user_id")
                    .table(AnswerRatings::Table)
                    .col(AnswerRatings::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_answer_ratings_user_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_question_likes_user_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_question_tags_tag_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_answers_created_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_questions_created_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_questions_like_created_at").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Like,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Answers {
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum QuestionTags {
    Table,
    TagId,
}

#[derive(DeriveIden)]
enum QuestionLikes {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum AnswerRatings {
    Table,
    UserId,
}
