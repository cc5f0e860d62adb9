//! Async driver for deferred mismatch resolution.

use super::game::MemoryGame;

impl MemoryGame {
    /// Wait out every scheduled mismatch resolution.
    ///
    /// Sleeps on tokio's timer until each deadline and resolves it, returning
    /// once nothing is left. Returns the number of pairs turned back. Use a
    /// [`TokioClock`](crate::schedule::TokioClock) when tokio time is paused.
    pub async fn settle(&mut self) -> usize {
        let mut resolved = 0;
        while let Some(deadline) = self.next_deadline() {
            let wait = deadline.saturating_duration_since(self.now());
            if !wait.is_zero() {
                tokio::time::sleep(wait).await;
            }
            resolved += self.resolve_due();
        }
        resolved
    }
}
