// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// 问题实体
///
/// 表示用户发布的一个问题。问题由某个用户创作，可以携带
/// 多个标签，可以被其他用户点赞，并通过关联表连接到回答。
/// `like` 计数器与 liked_by 集合的基数保持一致，
/// 两者只在同一个数据库事务中一起变化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 问题唯一标识符
    pub id: Uuid,
    /// 问题标题
    pub title: String,
    /// 问题正文
    pub content: String,
    /// 点赞计数，与点赞用户集合的基数保持一致
    pub like: i32,
    /// 作者ID，创建后不可变更
    pub author_id: Uuid,
    /// 创建时间，仅在创建时设置一次
    pub created_at: DateTime<FixedOffset>,
}

/// 问题提交载荷
///
/// 表示用户提交的新问题内容，入库前进行字段校验。
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuestion {
    /// 问题标题，最长150个字符
    #[validate(length(min = 1, max = 150))]
    pub title: String,
    /// 问题正文，不能为空
    #[validate(length(min = 1))]
    pub content: String,
}

impl Question {
    /// 根据提交载荷创建一个新的问题
    ///
    /// # 参数
    ///
    /// * `author_id` - 作者ID
    /// * `submission` - 经过校验的提交载荷
    ///
    /// # 返回值
    ///
    /// * `Ok(Question)` - 新创建的问题实例
    /// * `Err(ValidationErrors)` - 载荷校验失败
    pub fn new(author_id: Uuid, submission: NewQuestion) -> Result<Self, ValidationErrors> {
        submission.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: submission.title,
            content: submission.content,
            like: 0,
            author_id,
            created_at: Utc::now().into(),
        })
    }
}
