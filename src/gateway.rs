//! Message handling: dispatch, intent extraction, translation, reply.

use crate::commands::{Command, CONTENT_PROMPT};
use fanyi_baidu::BaiduTranslator;
use fanyi_core::{config::BaiduConfig, intent};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};


/// How long a bare `翻译` waits for the content message.
pub const PROMPT_TIMEOUT: Duration = Duration::from_secs(60);

/// Routes chat messages to the translator and builds replies.
pub struct Gateway {
    translator: BaiduTranslator,
    config: BaiduConfig,
    /// Senders who sent a bare `翻译`, keyed to when they were prompted.
    awaiting_content: Mutex<HashMap<String, Instant>>,
    prompt_timeout: Duration,
}

impl Gateway {
    pub fn new(translator: BaiduTranslator, config: BaiduConfig) -> Self {
        Self {
            translator,
            config,
            awaiting_content: Mutex::new(HashMap::new()),
            prompt_timeout: PROMPT_TIMEOUT,
        }
    }

    /// Override how long a content prompt stays open.
    #[cfg(test)]
    pub fn with_prompt_timeout(mut self, timeout: Duration) -> Self {
        self.prompt_timeout = timeout;
        self
    }

    /// Handle one message. `None` means it was not a translation command and
    /// no reply should be sent.
    pub async fn handle_message(&self, sender_id: &str, text: &str) -> Option<String> {
        let command = if self.take_pending(sender_id) {
            Command::content(text.trim())
        } else {
            match Command::parse(text) {
                Some(cmd) => cmd,
                None => {
                    debug!("[{sender_id}] not a command, passing through");
                    return None;
                }
            }
        };

        let (recognizer, captures) = match command {
            Command::Prompt => {
                self.set_pending(sender_id);
                return Some(CONTENT_PROMPT.to_string());
            }
            Command::Matched(recognizer, captures) => (recognizer, captures),
        };

        let Some(intent) = intent::extract(recognizer, &captures) else {
            debug!(
                "[{sender_id}] {} pattern matched but no intent, passing through",
                recognizer.name()
            );
            return None;
        };

        info!(
            "[{sender_id}] translate via {}: to={}",
            recognizer.name(),
            intent.target_lang.unwrap_or("auto-detect")
        );

        match self.translator.execute(&intent, &self.config).await {
            Ok(result) => Some(result.to_reply()),
            Err(e) => {
                warn!("[{sender_id}] translation failed: {e}");
                Some(e.user_message())
            }
        }
    }

    /// Consume an open prompt for `sender_id`. Expired prompts are dropped.
    fn take_pending(&self, sender_id: &str) -> bool {
        let Ok(mut pending) = self.awaiting_content.lock() else {
            return false;
        };
        match pending.remove(sender_id) {
            Some(since) if since.elapsed() < self.prompt_timeout => true,
            Some(_) => {
                debug!("[{sender_id}] content prompt expired");
                false
            }
            None => false,
        }
    }

    fn set_pending(&self, sender_id: &str) {
        if let Ok(mut pending) = self.awaiting_content.lock() {
            let timeout = self.prompt_timeout;
            pending.retain(|_, since| since.elapsed() < timeout);
            pending.insert(sender_id.to_string(), Instant::now());
        }
    }
}
