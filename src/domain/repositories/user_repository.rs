// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::question_repository::RepositoryError;
use crate::domain::models::user::User;
use async_trait::async_trait;
use uuid::Uuid;

/// 用户仓库特质
///
/// 维护外部认证子系统用户身份的本地镜像。
/// 删除受保护：仍有创作内容的用户不可删除。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户身份镜像
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;

    /// 根据ID查找用户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// 删除用户
    ///
    /// 用户仍是任何问题或回答的作者时拒绝删除。删除成功时
    /// 一并清理该用户的资料和点赞/评分关联行，并同步回退
    /// 受影响的计数器，保持计数器与集合基数一致。
    ///
    /// # 参数
    ///
    /// * `id` - 用户ID
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 删除成功
    /// * `Err(RepositoryError::Protected)` - 用户仍有创作内容
    /// * `Err(RepositoryError::NotFound)` - 用户不存在
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
