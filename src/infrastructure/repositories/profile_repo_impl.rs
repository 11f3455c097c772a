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

use crate::domain::models::profile::UserProfile;
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::repositories::question_repository::RepositoryError;
use crate::infrastructure::database::entities::user_profile as profile_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 资料仓库实现
///
/// 基于SeaORM实现的用户资料数据访问层
#[derive(Clone)]
pub struct ProfileRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryImpl {
    /// 创建新的资料仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的资料仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        user_id: Uuid,
    ) -> Result<Option<profile_entity::Model>, RepositoryError> {
        let model = profile_entity::Entity::find()
            .filter(profile_entity::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await?;
        Ok(model)
    }
}

impl From<profile_entity::Model> for UserProfile {
    fn from(model: profile_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            avatar: model.avatar,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn create_for_user(&self, user_id: Uuid) -> Result<UserProfile, RepositoryError> {
        if self.find_model(user_id).await?.is_some() {
            return Err(RepositoryError::AlreadyExists);
        }

        let profile = UserProfile::new(user_id);
        let model = profile_entity::ActiveModel {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            avatar: Set(profile.avatar.clone()),
            created_at: Set(profile.created_at),
            updated_at: Set(profile.updated_at),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(profile)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, RepositoryError> {
        Ok(self.find_model(user_id).await?.map(Into::into))
    }

    async fn set_avatar(
        &self,
        user_id: Uuid,
        avatar: &str,
    ) -> Result<UserProfile, RepositoryError> {
        let model = self
            .find_model(user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut active: profile_entity::ActiveModel = model.into();
        active.avatar = Set(avatar.to_string());
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }
}
