// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了
/// 仓库之上的业务规则，协调多个领域对象来完成业务操作。
///
/// 包含的服务：
/// - 标签徽章服务（tag_badge_service）：为热门标签分配展示颜色
/// - 头像服务（avatar_service）：头像上传、键名模板化和资料更新
pub mod avatar_service;
pub mod tag_badge_service;
