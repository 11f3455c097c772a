// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 标签实体
///
/// 标签与问题是多对多关系，用于问题分类和热度排行。
/// 标签名称全局唯一。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// 标签唯一标识符
    pub id: Uuid,
    /// 标签名称
    pub tag: String,
}

/// 标签热度统计
///
/// `most_popular` 聚合的结果行：标签名称及其下所有问题
/// 点赞数的总和。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPopularity {
    /// 标签名称
    pub tag: String,
    /// 该标签下所有问题点赞数之和
    pub total: i64,
}

impl Tag {
    /// 创建一个新的标签
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tag: tag.into(),
        }
    }
}
