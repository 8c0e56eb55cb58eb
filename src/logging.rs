//! 日志初始化

/// 安装 fmt 订阅者
///
/// 已有全局订阅者时静默跳过，可重复调用
pub fn init_logging() {
    if tracing_subscriber::fmt().try_init().is_err() {
        tracing::debug!("Global tracing subscriber already set");
    }
}
