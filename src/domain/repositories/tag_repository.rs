// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::question_repository::RepositoryError;
use crate::domain::models::question::Question;
use crate::domain::models::tag::{Tag, TagPopularity};
use async_trait::async_trait;

/// 热门标签榜单长度
pub const MOST_POPULAR_LIMIT: u64 = 9;

/// 标签仓库特质
///
/// 定义标签数据访问接口，包括热度聚合和按标签检索问题。
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// 创建标签
    async fn create(&self, tag: &Tag) -> Result<Tag, RepositoryError>;

    /// 根据名称查找标签
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, RepositoryError>;

    /// 返回最热门的标签
    ///
    /// 将标签与其问题连接，对每个标签求问题点赞数之和，
    /// 按总和降序返回前 [`MOST_POPULAR_LIMIT`] 个。
    async fn most_popular(&self) -> Result<Vec<TagPopularity>, RepositoryError>;

    /// 返回携带指定标签的全部问题
    ///
    /// # 参数
    ///
    /// * `tag_name` - 标签名称
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Question>)` - 携带该标签的问题，按创建时间降序
    /// * `Err(RepositoryError::NotFound)` - 标签不存在
    async fn questions_for(&self, tag_name: &str) -> Result<Vec<Question>, RepositoryError>;
}
