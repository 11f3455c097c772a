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
use crate::domain::models::tag::{Tag, TagPopularity};
use crate::domain::repositories::question_repository::RepositoryError;
use crate::domain::repositories::tag_repository::{TagRepository, MOST_POPULAR_LIMIT};
use crate::infrastructure::database::entities::question as question_entity;
use crate::infrastructure::database::entities::question_tag as question_tag_entity;
use crate::infrastructure::database::entities::tag as tag_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use std::sync::Arc;

/// 标签仓库实现
///
/// 基于SeaORM实现的标签数据访问层，
/// 热度榜单通过关联表聚合问题点赞数得到
#[derive(Clone)]
pub struct TagRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TagRepositoryImpl {
    /// 创建新的标签仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的标签仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<tag_entity::Model> for Tag {
    fn from(model: tag_entity::Model) -> Self {
        Self {
            id: model.id,
            tag: model.tag,
        }
    }
}

/// 热度聚合查询的结果行
#[derive(Debug, FromQueryResult)]
struct PopularTagRow {
    tag: String,
    total: Option<i64>,
}

#[async_trait]
impl TagRepository for TagRepositoryImpl {
    async fn create(&self, tag: &Tag) -> Result<Tag, RepositoryError> {
        let model = tag_entity::ActiveModel {
            id: Set(tag.id),
            tag: Set(tag.tag.clone()),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(tag.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepositoryError> {
        let model = tag_entity::Entity::find()
            .filter(tag_entity::Column::Tag.eq(name))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn most_popular(&self) -> Result<Vec<TagPopularity>, RepositoryError> {
        let rows = tag_entity::Entity::find()
            .select_only()
            .column(tag_entity::Column::Tag)
            .column_as(question_entity::Column::Like.sum(), "total")
            .join_rev(JoinType::InnerJoin, question_tag_entity::Relation::Tag.def())
            .join(
                JoinType::InnerJoin,
                question_tag_entity::Relation::Question.def(),
            )
            .group_by(tag_entity::Column::Id)
            .group_by(tag_entity::Column::Tag)
            .order_by_desc(question_entity::Column::Like.sum())
            .limit(MOST_POPULAR_LIMIT)
            .into_model::<PopularTagRow>()
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| TagPopularity {
                tag: row.tag,
                total: row.total.unwrap_or_default(),
            })
            .collect())
    }

    async fn questions_for(&self, tag_name: &str) -> Result<Vec<Question>, RepositoryError> {
        let tag = tag_entity::Entity::find()
            .filter(tag_entity::Column::Tag.eq(tag_name))
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let models = question_entity::Entity::find()
            .join_rev(
                JoinType::InnerJoin,
                question_tag_entity::Relation::Question.def(),
            )
            .filter(question_tag_entity::Column::TagId.eq(tag.id))
            .order_by_desc(question_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
