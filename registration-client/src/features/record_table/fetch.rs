// registration-client/src/features/record_table/fetch.rs

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::warn;

/// 取得タスクのハンドル
///
/// ドロップまたは `cancel` でタスクを中断し、遅れて届いた結果は捨てる。
#[derive(Debug)]
pub struct FetchHandle<T> {
    task: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> FetchHandle<T> {
    /// タスクを起動する（Tokio ランタイム内で呼ぶこと）
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            task: Some(tokio::spawn(future)),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// 結果を待つ。中断済み・パニック時は None
    pub async fn join(mut self) -> Option<T> {
        let task = self.task.take()?;
        match task.await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, cancelled = e.is_cancelled(), "Fetch task did not complete");
                None
            }
        }
    }
}

impl<T> Drop for FetchHandle<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
