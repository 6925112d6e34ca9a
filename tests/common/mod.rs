//
//  brightcove-mapi
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use brightcove_mapi::api::common::{TransportErrorKind, TransportFailure};
use brightcove_mapi::api::transport::{Connection, HttpRequest, TransportFactory};
use brightcove_mapi::config::Endpoint;

/// Endpoint pointing at a mock server.
pub fn endpoint_for(server: &mockito::ServerGuard, path: &str) -> Endpoint {
    let address = server.host_with_port();
    let (host, port) = address
        .rsplit_once(':')
        .expect("mock server address has a port");
    Endpoint::new("http", host, port.parse().expect("numeric port"), path)
}

/// One scripted response.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this body
    Body(String),
    /// Any other status, body unread
    Status(u16),
    /// Send fails outright
    Fail(TransportErrorKind),
}

impl Reply {
    pub fn body(body: &str) -> Self {
        Self::Body(body.to_string())
    }
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Reply>,
    requests: Vec<HttpRequest>,
}

/// In-memory transport that answers from a script and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        let transport = Self::default();
        transport
            .script
            .lock()
            .unwrap()
            .replies
            .extend(replies);
        transport
    }

    /// Requests sent so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.script.lock().unwrap().requests.len()
    }
}

impl TransportFactory for ScriptedTransport {
    fn connect(&self) -> Result<Box<dyn Connection>, TransportFailure> {
        Ok(Box::new(ScriptedConnection {
            script: self.script.clone(),
            body: None,
        }))
    }
}

struct ScriptedConnection {
    script: Arc<Mutex<Script>>,
    body: Option<String>,
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn send(&mut self, request: HttpRequest) -> Result<u16, TransportFailure> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(request);
            script.replies.pop_front()
        };

        match reply {
            Some(Reply::Body(body)) => {
                self.body = Some(body);
                Ok(200)
            }
            Some(Reply::Status(status)) => Ok(status),
            Some(Reply::Fail(kind)) => Err(TransportFailure::new(kind, "scripted failure")),
            None => Err(TransportFailure::new(
                TransportErrorKind::IllegalState,
                "no reply scripted",
            )),
        }
    }

    async fn read_body(&mut self) -> Result<String, TransportFailure> {
        self.body
            .take()
            .ok_or_else(|| TransportFailure::new(TransportErrorKind::IllegalState, "no body"))
    }
}
