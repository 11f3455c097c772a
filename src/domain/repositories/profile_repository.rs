// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::question_repository::RepositoryError;
use crate::domain::models::profile::UserProfile;
use async_trait::async_trait;
use uuid::Uuid;

/// 资料仓库特质
///
/// 定义用户一对一资料的数据访问接口，
/// 保证每个用户最多只有一份资料。
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// 为用户创建资料，使用默认头像
    ///
    /// # 参数
    ///
    /// * `user_id` - 所属用户ID
    ///
    /// # 返回值
    ///
    /// * `Ok(UserProfile)` - 新创建的资料
    /// * `Err(RepositoryError::AlreadyExists)` - 该用户已有资料
    async fn create_for_user(&self, user_id: Uuid) -> Result<UserProfile, RepositoryError>;

    /// 根据用户ID查找资料
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, RepositoryError>;

    /// 更新用户的头像路径
    ///
    /// # 参数
    ///
    /// * `user_id` - 所属用户ID
    /// * `avatar` - 新的头像存储路径
    ///
    /// # 返回值
    ///
    /// * `Ok(UserProfile)` - 更新后的资料
    /// * `Err(RepositoryError::NotFound)` - 该用户没有资料
    async fn set_avatar(&self, user_id: Uuid, avatar: &str)
        -> Result<UserProfile, RepositoryError>;
}
