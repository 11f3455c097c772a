// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::question::Question;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 当前用户无权执行该操作
    #[error("Operation not permitted for this user")]
    Forbidden,
    /// 记录仍被其他数据引用，禁止删除
    #[error("Record is still referenced by other data")]
    Protected,
    /// 记录已存在
    #[error("Record already exists")]
    AlreadyExists,
}

/// 问题仓库特质
///
/// 定义问题数据访问接口。点赞切换在一个数据库事务内
/// 同时变更关联行和计数器，保证两者一致。
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// 创建问题并建立标签关联
    ///
    /// # 参数
    ///
    /// * `question` - 要创建的问题实体
    /// * `tag_ids` - 问题携带的标签ID列表
    ///
    /// # 返回值
    ///
    /// * `Ok(Question)` - 成功创建的问题
    /// * `Err(RepositoryError)` - 创建失败时返回错误
    async fn create(
        &self,
        question: &Question,
        tag_ids: &[Uuid],
    ) -> Result<Question, RepositoryError>;

    /// 根据ID查找问题
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, RepositoryError>;

    /// 按创建时间降序返回全部问题（最新优先）
    async fn sort_new(&self) -> Result<Vec<Question>, RepositoryError>;

    /// 按点赞数降序返回全部问题，点赞数相同时按创建时间降序
    async fn sort_hot(&self) -> Result<Vec<Question>, RepositoryError>;

    /// 切换用户对问题的点赞状态
    ///
    /// 幂等切换：用户已在点赞集合中则移除并将计数器减一，
    /// 否则加入并将计数器加一。整个操作在一个事务内完成。
    ///
    /// # 参数
    ///
    /// * `user_id` - 执行切换的用户ID
    /// * `question_id` - 目标问题ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Question)` - 切换后的最新问题
    /// * `Err(RepositoryError::NotFound)` - 问题不存在
    async fn toggle_like(
        &self,
        user_id: Uuid,
        question_id: Uuid,
    ) -> Result<Question, RepositoryError>;

    /// 返回点赞该问题的用户ID集合
    async fn liked_by(&self, question_id: Uuid) -> Result<Vec<Uuid>, RepositoryError>;
}
