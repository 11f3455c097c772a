// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::tag::TagPopularity;
use crate::domain::repositories::tag_repository::TagRepository;
use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// 标签徽章的固定调色板
///
/// 每个热门标签独立地从这8种展示颜色中随机抽取一种，
/// 抽取之间互不影响（有放回）。
pub const TAG_COLORS: [&str; 8] = [
    "bg-primary",
    "bg-secondary",
    "bg-success",
    "bg-danger",
    "bg-warning text-dark",
    "bg-info text-dark",
    "bg-light text-dark",
    "bg-dark",
];

/// 带展示颜色的热门标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagBadge {
    /// 标签名称
    pub tag: String,
    /// 该标签下所有问题点赞数之和
    pub total: i64,
    /// 本次分配的展示颜色
    pub color: String,
}

/// 标签徽章服务
///
/// 读取热门标签榜单并为每个标签分配展示颜色。
/// 随机源由调用方注入，便于测试时使用固定种子。
pub struct TagBadgeService {
    tags: Arc<dyn TagRepository>,
}

impl TagBadgeService {
    /// 创建新的标签徽章服务实例
    pub fn new(tags: Arc<dyn TagRepository>) -> Self {
        Self { tags }
    }

    /// 返回带颜色的热门标签榜单
    ///
    /// # 参数
    ///
    /// * `rng` - 随机源，生产环境传入 `rand::rng()`，测试传入固定种子
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<TagBadge>)` - 按热度降序的带色标签
    /// * `Err(anyhow::Error)` - 榜单查询失败
    pub async fn most_popular_badges<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<TagBadge>> {
        let popular = self
            .tags
            .most_popular()
            .await
            .context("loading most popular tags")?;
        Ok(assign_colors(&popular, rng))
    }
}

/// 为一组热门标签分配展示颜色
///
/// 每个标签独立抽取一种调色板颜色，有放回，
/// 因此同一颜色可能出现多次。
pub fn assign_colors<R: Rng + ?Sized>(tags: &[TagPopularity], rng: &mut R) -> Vec<TagBadge> {
    tags.iter()
        .map(|t| TagBadge {
            tag: t.tag.clone(),
            total: t.total,
            color: TAG_COLORS[rng.random_range(0..TAG_COLORS.len())].to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tag_badge_service_test.rs"]
mod tests;
