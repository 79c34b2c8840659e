//! 引擎子进程执行辅助
//!
//! espeak / festival 适配器共用的 spawn + stdin 管道 + 超时逻辑

use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::TtsError;

/// 运行子进程，可选地向 stdin 写入数据，带超时
///
/// 超时后子进程被 kill（kill_on_drop），返回 `TtsError::Timeout`
pub(super) async fn run_with_stdin(
    binary: &str,
    args: &[String],
    stdin_data: Option<&[u8]>,
    timeout_secs: u64,
) -> Result<Output, TtsError> {
    let mut command = Command::new(binary);
    command
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    command.stdin(if stdin_data.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    let mut child = command.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TtsError::BinaryNotFound(binary.to_string())
        } else {
            TtsError::SpawnError(e.to_string())
        }
    })?;

    if let Some(data) = stdin_data {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TtsError::SpawnError("failed to open engine stdin".to_string()))?;
        stdin.write_all(data).await?;
        // 关闭 stdin，通知引擎输入结束
        drop(stdin);
    }

    let output = tokio::time::timeout(Duration::from_secs(timeout_secs), child.wait_with_output())
        .await
        .map_err(|_| TtsError::Timeout(timeout_secs))??;

    Ok(output)
}

/// 检查子进程是否以成功状态退出，失败时带回 stderr
pub(super) fn ensure_success(output: &Output) -> Result<(), TtsError> {
    if output.status.success() {
        return Ok(());
    }
    Err(TtsError::EngineFailed {
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}
