// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::question_repository::RepositoryError;
use crate::domain::models::answer::Answer;
use async_trait::async_trait;
use uuid::Uuid;

/// 回答仓库特质
///
/// 定义回答数据访问接口。评分切换与问题点赞使用相同的
/// 事务内联动模式，正确标记只允许所属问题的作者执行。
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// 创建回答并关联到问题
    ///
    /// 回答插入和问题关联行写入在同一个事务内完成。
    ///
    /// # 参数
    ///
    /// * `answer` - 要创建的回答实体
    /// * `question_id` - 所属问题ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Answer)` - 成功创建的回答
    /// * `Err(RepositoryError::NotFound)` - 问题不存在
    async fn create(&self, answer: &Answer, question_id: Uuid) -> Result<Answer, RepositoryError>;

    /// 根据ID查找回答
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Answer>, RepositoryError>;

    /// 按创建时间升序返回全部回答
    async fn sort_by_date(&self) -> Result<Vec<Answer>, RepositoryError>;

    /// 返回属于指定问题的回答，按创建时间升序
    async fn for_question(&self, question_id: Uuid) -> Result<Vec<Answer>, RepositoryError>;

    /// 切换用户对回答的评分状态
    ///
    /// 幂等切换：用户已在评分集合中则移除并将计数器减一，
    /// 否则加入并将计数器加一。整个操作在一个事务内完成。
    async fn toggle_like(&self, user_id: Uuid, answer_id: Uuid)
        -> Result<Answer, RepositoryError>;

    /// 切换回答的正确标记
    ///
    /// 仅当 `user_id` 等于所属问题的作者时翻转 `correct`；
    /// 其他用户得到显式的 Forbidden 错误，状态不变。
    ///
    /// # 参数
    ///
    /// * `user_id` - 执行操作的用户ID
    /// * `answer_id` - 目标回答ID
    /// * `question_id` - 所属问题ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Answer)` - 翻转后的最新回答
    /// * `Err(RepositoryError::Forbidden)` - 调用者不是问题作者
    /// * `Err(RepositoryError::NotFound)` - 回答或问题不存在
    async fn toggle_correct(
        &self,
        user_id: Uuid,
        answer_id: Uuid,
        question_id: Uuid,
    ) -> Result<Answer, RepositoryError>;

    /// 返回为该回答评分的用户ID集合
    async fn rated_by(&self, answer_id: Uuid) -> Result<Vec<Uuid>, RepositoryError>;
}
