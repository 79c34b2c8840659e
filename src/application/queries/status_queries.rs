//! Status Queries

/// 服务状态（/status）
#[derive(Debug, Clone)]
pub struct GetStatus;

/// 当前引擎的音色列表（/voices）
#[derive(Debug, Clone)]
pub struct ListVoices;

/// 引擎详情与参数快照（/info）
#[derive(Debug, Clone)]
pub struct GetEngineInfo;
