// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::answer::Answer;
use crate::domain::repositories::answer_repository::AnswerRepository;
use crate::domain::repositories::question_repository::RepositoryError;
use crate::infrastructure::database::entities::answer as answer_entity;
use crate::infrastructure::database::entities::answer_rating as answer_rating_entity;
use crate::infrastructure::database::entities::question as question_entity;
use crate::infrastructure::database::entities::question_answer as question_answer_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, JoinType, ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

/// 回答仓库实现
///
/// 基于SeaORM实现的回答数据访问层
#[derive(Clone)]
pub struct AnswerRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl AnswerRepositoryImpl {
    /// 创建新的回答仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的回答仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<answer_entity::Model> for Answer {
    fn from(model: answer_entity::Model) -> Self {
        Self {
            id: model.id,
            correct: model.correct,
            content: model.content,
            like: model.like,
            author_id: model.author_id,
            created_at: model.created_at,
        }
    }
}

impl From<Answer> for answer_entity::ActiveModel {
    fn from(answer: Answer) -> Self {
        Self {
            id: Set(answer.id),
            correct: Set(answer.correct),
            content: Set(answer.content.clone()),
            like: Set(answer.like),
            author_id: Set(answer.author_id),
            created_at: Set(answer.created_at),
        }
    }
}

/// 调整回答的评分计数器
///
/// 使用列表达式原地增减，避免读取-修改-写回造成的更新丢失
async fn adjust_like_counter<C: ConnectionTrait>(
    conn: &C,
    answer_id: Uuid,
    delta: i32,
) -> Result<(), RepositoryError> {
    let expr = if delta >= 0 {
        Expr::col(answer_entity::Column::Like).add(delta)
    } else {
        Expr::col(answer_entity::Column::Like).sub(-delta)
    };

    answer_entity::Entity::update_many()
        .col_expr(answer_entity::Column::Like, expr)
        .filter(answer_entity::Column::Id.eq(answer_id))
        .exec(conn)
        .await?;
    Ok(())
}

#[async_trait]
impl AnswerRepository for AnswerRepositoryImpl {
    async fn create(&self, answer: &Answer, question_id: Uuid) -> Result<Answer, RepositoryError> {
        let txn = self.db.begin().await?;

        question_entity::Entity::find_by_id(question_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let model: answer_entity::ActiveModel = answer.clone().into();
        model.insert(&txn).await?;

        question_answer_entity::ActiveModel {
            question_id: Set(question_id),
            answer_id: Set(answer.id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(answer.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Answer>, RepositoryError> {
        let model = answer_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn sort_by_date(&self) -> Result<Vec<Answer>, RepositoryError> {
        let models = answer_entity::Entity::find()
            .order_by_asc(answer_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn for_question(&self, question_id: Uuid) -> Result<Vec<Answer>, RepositoryError> {
        let models = answer_entity::Entity::find()
            .join_rev(
                JoinType::InnerJoin,
                question_answer_entity::Relation::Answer.def(),
            )
            .filter(question_answer_entity::Column::QuestionId.eq(question_id))
            .order_by_asc(answer_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn toggle_like(
        &self,
        user_id: Uuid,
        answer_id: Uuid,
    ) -> Result<Answer, RepositoryError> {
        let txn = self.db.begin().await?;

        answer_entity::Entity::find_by_id(answer_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let existing = answer_rating_entity::Entity::find_by_id((answer_id, user_id))
            .one(&txn)
            .await?;

        match existing {
            Some(row) => {
                row.delete(&txn).await?;
                adjust_like_counter(&txn, answer_id, -1).await?;
            }
            None => {
                answer_rating_entity::ActiveModel {
                    answer_id: Set(answer_id),
                    user_id: Set(user_id),
                }
                .insert(&txn)
                .await?;
                adjust_like_counter(&txn, answer_id, 1).await?;
            }
        }

        let updated = answer_entity::Entity::find_by_id(answer_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        txn.commit().await?;
        Ok(updated.into())
    }

    async fn toggle_correct(
        &self,
        user_id: Uuid,
        answer_id: Uuid,
        question_id: Uuid,
    ) -> Result<Answer, RepositoryError> {
        let txn = self.db.begin().await?;

        let question = question_entity::Entity::find_by_id(question_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let answer = answer_entity::Entity::find_by_id(answer_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if question.author_id != user_id {
            return Err(RepositoryError::Forbidden);
        }

        let flipped = !answer.correct;
        let mut active: answer_entity::ActiveModel = answer.into();
        active.correct = Set(flipped);

        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(updated.into())
    }

    async fn rated_by(&self, answer_id: Uuid) -> Result<Vec<Uuid>, RepositoryError> {
        let rows = answer_rating_entity::Entity::find()
            .filter(answer_rating_entity::Column::AnswerId.eq(answer_id))
            .all(self.db.as_ref())
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }
}
