use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Chinese,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Chinese),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub no_data: &'static str,
    pub no_activity_data: &'static str,
    pub load_error: &'static str,
    pub monitoring_started: &'static str,
    pub start_failed: &'static str,
    pub start_error: &'static str,
    pub monitoring_stopped: &'static str,
    pub stop_failed: &'static str,
    pub unknown_error: &'static str,
    pub stop_network_error: &'static str,
}

const ENGLISH: Messages = Messages {
    no_data: "No data",
    no_activity_data: "No activity data",
    load_error: "An error occurred while loading data",
    monitoring_started: "Monitoring started",
    start_failed: "Failed to start monitoring: ",
    start_error: "An error occurred while starting monitoring",
    monitoring_stopped: "Monitoring stopped",
    stop_failed: "Failed to stop monitoring: ",
    unknown_error: "unknown error",
    stop_network_error: "A network error occurred while stopping monitoring",
};

const CHINESE: Messages = Messages {
    no_data: "暂无数据",
    no_activity_data: "暂无活动数据",
    load_error: "加载数据时发生错误",
    monitoring_started: "监控已启动",
    start_failed: "启动监控失败: ",
    start_error: "启动监控时发生错误",
    monitoring_stopped: "监控已停止",
    stop_failed: "停止监控失败: ",
    unknown_error: "未知错误",
    stop_network_error: "停止监控时发生网络错误",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::English => &ENGLISH,
            Locale::Chinese => &CHINESE,
        }
    }
}
