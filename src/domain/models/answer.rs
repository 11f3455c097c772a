// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// 回答实体
///
/// 表示针对某个问题的一条回答。回答可以被其他用户评分
/// （rated_by 集合与 `like` 计数器联动），并可由所属问题的
/// 作者标记为正确答案。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// 回答唯一标识符
    pub id: Uuid,
    /// 是否被问题作者标记为正确答案
    pub correct: bool,
    /// 回答正文
    pub content: String,
    /// 评分计数，与评分用户集合的基数保持一致
    pub like: i32,
    /// 作者ID，创建后不可变更
    pub author_id: Uuid,
    /// 创建时间，仅在创建时设置一次
    pub created_at: DateTime<FixedOffset>,
}

/// 回答提交载荷
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAnswer {
    /// 回答正文，不能为空
    #[validate(length(min = 1))]
    pub content: String,
}

impl Answer {
    /// 根据提交载荷创建一条新的回答
    ///
    /// 新回答未被标记为正确，评分计数为零。
    ///
    /// # 参数
    ///
    /// * `author_id` - 作者ID
    /// * `submission` - 经过校验的提交载荷
    ///
    /// # 返回值
    ///
    /// * `Ok(Answer)` - 新创建的回答实例
    /// * `Err(ValidationErrors)` - 载荷校验失败
    pub fn new(author_id: Uuid, submission: NewAnswer) -> Result<Self, ValidationErrors> {
        submission.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            correct: false,
            content: submission.content,
            like: 0,
            author_id,
            created_at: Utc::now().into(),
        })
    }
}
