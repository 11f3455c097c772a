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

use crate::domain::models::user::User;
use crate::domain::repositories::question_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::answer as answer_entity;
use crate::infrastructure::database::entities::answer_rating as answer_rating_entity;
use crate::infrastructure::database::entities::question as question_entity;
use crate::infrastructure::database::entities::question_like as question_like_entity;
use crate::infrastructure::database::entities::user as user_entity;
use crate::infrastructure::database::entities::user_profile as profile_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

/// 用户仓库实现
///
/// 维护外部认证子系统用户身份的本地镜像。
/// 删除在应用层执行保护检查和级联清理，行为与数据库后端无关。
#[derive(Clone)]
pub struct UserRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的用户仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的用户仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user_entity::Model> for User {
    fn from(model: user_entity::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let model = user_entity::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            created_at: Set(user.created_at),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        let user = user_entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        // 保护检查：仍有创作内容的用户不可删除
        let authored_questions = question_entity::Entity::find()
            .filter(question_entity::Column::AuthorId.eq(id))
            .count(&txn)
            .await?;
        let authored_answers = answer_entity::Entity::find()
            .filter(answer_entity::Column::AuthorId.eq(id))
            .count(&txn)
            .await?;

        if authored_questions > 0 || authored_answers > 0 {
            return Err(RepositoryError::Protected);
        }

        // 回退被点赞问题的计数器，再移除点赞关联行
        let liked_question_ids: Vec<Uuid> = question_like_entity::Entity::find()
            .filter(question_like_entity::Column::UserId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|row| row.question_id)
            .collect();

        if !liked_question_ids.is_empty() {
            question_entity::Entity::update_many()
                .col_expr(
                    question_entity::Column::Like,
                    Expr::col(question_entity::Column::Like).sub(1),
                )
                .filter(question_entity::Column::Id.is_in(liked_question_ids))
                .exec(&txn)
                .await?;
        }

        question_like_entity::Entity::delete_many()
            .filter(question_like_entity::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        // 同样处理被评分的回答
        let rated_answer_ids: Vec<Uuid> = answer_rating_entity::Entity::find()
            .filter(answer_rating_entity::Column::UserId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|row| row.answer_id)
            .collect();

        if !rated_answer_ids.is_empty() {
            answer_entity::Entity::update_many()
                .col_expr(
                    answer_entity::Column::Like,
                    Expr::col(answer_entity::Column::Like).sub(1),
                )
                .filter(answer_entity::Column::Id.is_in(rated_answer_ids))
                .exec(&txn)
                .await?;
        }

        answer_rating_entity::Entity::delete_many()
            .filter(answer_rating_entity::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        profile_entity::Entity::delete_many()
            .filter(profile_entity::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        user.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
