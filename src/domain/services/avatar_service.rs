// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::profile::UserProfile;
use crate::domain::repositories::profile_repository::ProfileRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// 头像服务
///
/// 负责头像上传的完整流程：按上传日期生成存储键，
/// 把图片数据写入存储，再把键记录到用户资料上。
pub struct AvatarService {
    storage: Arc<dyn StorageRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl AvatarService {
    /// 创建新的头像服务实例
    ///
    /// # 参数
    ///
    /// * `storage` - 头像文件存储
    /// * `profiles` - 资料仓库
    pub fn new(storage: Arc<dyn StorageRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { storage, profiles }
    }

    /// 上传用户头像
    ///
    /// # 参数
    ///
    /// * `user_id` - 所属用户ID
    /// * `extension` - 图片文件扩展名（不含点）
    /// * `data` - 图片字节数据
    ///
    /// # 返回值
    ///
    /// * `Ok(UserProfile)` - 更新后的资料
    /// * `Err(anyhow::Error)` - 存储写入或资料更新失败
    pub async fn upload_avatar(
        &self,
        user_id: Uuid,
        extension: &str,
        data: &[u8],
    ) -> Result<UserProfile> {
        let key = avatar_key(Utc::now(), extension);

        self.storage
            .save(&key, data)
            .await
            .context("storing avatar image")?;

        let profile = self
            .profiles
            .set_avatar(user_id, &key)
            .await
            .context("recording avatar on profile")?;

        tracing::debug!(user_id = %user_id, key = %key, "avatar uploaded");
        Ok(profile)
    }
}

/// 生成按上传日期模板化的头像存储键
///
/// 键格式为 `avatar/YYYY/MM/DD/<uuid>.<ext>`。
pub fn avatar_key(now: DateTime<Utc>, extension: &str) -> String {
    format!(
        "avatar/{}/{}.{}",
        now.format("%Y/%m/%d"),
        Uuid::new_v4(),
        extension
    )
}

#[cfg(test)]
#[path = "avatar_service_test.rs"]
mod tests;
