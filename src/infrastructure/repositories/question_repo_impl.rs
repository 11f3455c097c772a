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

use crate::domain::models::question::Question;
use crate::domain::repositories::question_repository::{QuestionRepository, RepositoryError};
use crate::infrastructure::database::entities::question as question_entity;
use crate::infrastructure::database::entities::question_like as question_like_entity;
use crate::infrastructure::database::entities::question_tag as question_tag_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

/// 问题仓库实现
///
/// 基于SeaORM实现的问题数据访问层
#[derive(Clone)]
pub struct QuestionRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl QuestionRepositoryImpl {
    /// 创建新的问题仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的问题仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<question_entity::Model> for Question {
    fn from(model: question_entity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            like: model.like,
            author_id: model.author_id,
            created_at: model.created_at,
        }
    }
}

impl From<Question> for question_entity::ActiveModel {
    fn from(question: Question) -> Self {
        Self {
            id: Set(question.id),
            title: Set(question.title.clone()),
            content: Set(question.content.clone()),
            like: Set(question.like),
            author_id: Set(question.author_id),
            created_at: Set(question.created_at),
        }
    }
}

/// 调整问题的点赞计数器
///
/// 使用列表达式原地增减，避免读取-修改-写回造成的更新丢失
async fn adjust_like_counter<C: ConnectionTrait>(
    conn: &C,
    question_id: Uuid,
    delta: i32,
) -> Result<(), RepositoryError> {
    let expr = if delta >= 0 {
        Expr::col(question_entity::Column::Like).add(delta)
    } else {
        Expr::col(question_entity::Column::Like).sub(-delta)
    };

    question_entity::Entity::update_many()
        .col_expr(question_entity::Column::Like, expr)
        .filter(question_entity::Column::Id.eq(question_id))
        .exec(conn)
        .await?;
    Ok(())
}

#[async_trait]
impl QuestionRepository for QuestionRepositoryImpl {
    async fn create(
        &self,
        question: &Question,
        tag_ids: &[Uuid],
    ) -> Result<Question, RepositoryError> {
        let txn = self.db.begin().await?;

        let model: question_entity::ActiveModel = question.clone().into();
        model.insert(&txn).await?;

        for tag_id in tag_ids {
            question_tag_entity::ActiveModel {
                question_id: Set(question.id),
                tag_id: Set(*tag_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(question.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, RepositoryError> {
        let model = question_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn sort_new(&self) -> Result<Vec<Question>, RepositoryError> {
        let models = question_entity::Entity::find()
            .order_by_desc(question_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn sort_hot(&self) -> Result<Vec<Question>, RepositoryError> {
        let models = question_entity::Entity::find()
            .order_by_desc(question_entity::Column::Like)
            .order_by_desc(question_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn toggle_like(
        &self,
        user_id: Uuid,
        question_id: Uuid,
    ) -> Result<Question, RepositoryError> {
        let txn = self.db.begin().await?;

        question_entity::Entity::find_by_id(question_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let existing = question_like_entity::Entity::find_by_id((question_id, user_id))
            .one(&txn)
            .await?;

        match existing {
            Some(row) => {
                row.delete(&txn).await?;
                adjust_like_counter(&txn, question_id, -1).await?;
            }
            None => {
                question_like_entity::ActiveModel {
                    question_id: Set(question_id),
                    user_id: Set(user_id),
                }
                .insert(&txn)
                .await?;
                adjust_like_counter(&txn, question_id, 1).await?;
            }
        }

        let updated = question_entity::Entity::find_by_id(question_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        txn.commit().await?;
        Ok(updated.into())
    }

    async fn liked_by(&self, question_id: Uuid) -> Result<Vec<Uuid>, RepositoryError> {
        let rows = question_like_entity::Entity::find()
            .filter(question_like_entity::Column::QuestionId.eq(question_id))
            .all(self.db.as_ref())
            .await?;

        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }
}
