// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 默认头像路径，在用户尚未上传头像时使用
pub const DEFAULT_AVATAR: &str = "avatar.png";

/// 用户资料实体
///
/// 用户的一对一扩展资料，目前只承载头像存储路径。
/// 每个用户最多只有一份资料。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// 资料唯一标识符
    pub id: Uuid,
    /// 所属用户ID，每个用户最多一条资料
    pub user_id: Uuid,
    /// 头像存储路径
    pub avatar: String,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

impl UserProfile {
    /// 为用户创建一份新的资料，使用默认头像
    ///
    /// # 参数
    ///
    /// * `user_id` - 所属用户ID
    ///
    /// # 返回值
    ///
    /// 返回新的资料实例
    pub fn new(user_id: Uuid) -> Self {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Self {
            id: Uuid::new_v4(),
            user_id,
            avatar: DEFAULT_AVATAR.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
