// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::tidy::Pattern;

// ============================================================================
// 清理配置
// ============================================================================

/// 清理配置
///
/// 只提供 `TidyEngine` 需要的参数，不决定变换顺序。
/// 文件读写只发生在这里的 `load*` / `save_to`，`tidy` 中的变换从不访问文件系统。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyConfig {
    /// 需要整词删除的词
    #[serde(default)]
    pub words: Vec<String>,
    /// 需要删除的匹配模式
    #[serde(default)]
    pub patterns: Vec<String>,
    /// 空宏删除的轮数（最大嵌套层数）
    #[serde(default = "default_macro_nesting_depth")]
    pub macro_nesting_depth: usize,
}

fn default_macro_nesting_depth() -> usize {
    3
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            patterns: Vec::new(),
            macro_nesting_depth: default_macro_nesting_depth(),
        }
    }
}

impl TidyConfig {
    /// 默认配置文件路径：`<config_dir>/strdel/config.json`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("strdel").join("config.json"))
    }

    /// 从默认路径加载
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 从指定路径加载，文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置失败: {}", path.display()))?;
        let config: TidyConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置失败: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// 保存到指定路径
    ///
    /// 先写临时文件再原子替换
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");

        tracing::info!("保存配置到: {:?}", path);
        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;
        std::fs::rename(&temp_path, path).map_err(|e| {
            tracing::error!("替换配置文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            e
        })?;

        Ok(())
    }

    /// 校验所有词和模式都能编译
    pub fn validate(&self) -> Result<()> {
        for word in &self.words {
            Pattern::word(word).with_context(|| format!("无效的删除词: {}", word))?;
        }
        for pattern in &self.patterns {
            Pattern::compile(pattern).with_context(|| format!("无效的删除模式: {}", pattern))?;
        }
        if self.macro_nesting_depth == 0 {
            tracing::warn!("macro_nesting_depth 为 0，空宏不会被删除");
        }
        Ok(())
    }
}
