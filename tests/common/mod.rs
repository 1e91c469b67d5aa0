//! Shared fakes for the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use linkform::client::{ClientError, Resolution, ShortenRequest, ShortenerGateway};
use linkform::errors::{LinkFormError, Result};
use linkform::services::{ClipboardWriter, Navigator};

/// Gateway that records every call and answers from queued responses
#[derive(Default)]
pub struct RecordingGateway {
    pub created: Mutex<Vec<ShortenRequest>>,
    pub resolved: Mutex<Vec<String>>,
    create_results: Mutex<VecDeque<std::result::Result<String, ClientError>>>,
    resolve_results: Mutex<VecDeque<std::result::Result<Resolution, ClientError>>>,
}

impl RecordingGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on_create(&self, result: std::result::Result<String, ClientError>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn on_resolve(&self, result: std::result::Result<Resolution, ClientError>) {
        self.resolve_results.lock().unwrap().push_back(result);
    }

    pub fn created(&self) -> Vec<ShortenRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn resolved(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortenerGateway for RecordingGateway {
    async fn create_short_url(
        &self,
        request: &ShortenRequest,
    ) -> std::result::Result<String, ClientError> {
        self.created.lock().unwrap().push(request.clone());
        self.create_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ClientError::Transport("no response queued".into())))
    }

    async fn resolve_short_url(
        &self,
        short_code: &str,
    ) -> std::result::Result<Resolution, ClientError> {
        self.resolved.lock().unwrap().push(short_code.to_string());
        self.resolve_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ClientError::Transport("no response queued".into())))
    }
}

/// Navigator that remembers where it was sent
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    pub visited: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        if self.fail {
            return Err(LinkFormError::navigation("no browser"));
        }
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Clipboard backed by a shared string
#[derive(Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Arc<Mutex<Option<String>>>,
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
