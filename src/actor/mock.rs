//! # Mock Builder
//!
//! `MockBuilder` hands out a real [`BuilderClient`] whose requests are answered
//! from a queue of expectations instead of a store. Use it to test code that
//! sits *around* the client (form submission, error display) without spawning
//! the actor.
//!
//! | Feature | MockBuilder | Real Actor |
//! |---------|-------------|------------|
//! | **State** | None (scripted replies) | Real store |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//! | **Timing control** | `gated` replies | Scheduler-driven |
//!
//! ```rust
//! use course_builder::actor::mock::MockBuilder;
//! use course_builder::actor::BuilderError;
//! use course_builder::model::ModuleCreate;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockBuilder::new();
//!     mock.expect_create_module().return_err(BuilderError::ActorClosed);
//!
//!     let result = mock.client().create_module(ModuleCreate::new("Week 1")).await;
//!     assert_eq!(result, Err(BuilderError::ActorClosed));
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation panics the mock task; the
//! client then sees [`BuilderError::ActorDropped`] and [`MockBuilder::verify`]
//! reports the leftover expectations.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

use super::{BuilderClient, BuilderError, BuilderRequest};
use crate::model::{Module, Resource};

enum Reply {
    Module(Result<Module, BuilderError>),
    Resource(Result<Resource, BuilderError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    CreateModule,
    UpdateModule,
    CreateResource,
    UpdateResource,
}

struct Expectation {
    kind: Kind,
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

pub struct MockBuilder {
    client: BuilderClient,
    expectations: Queue,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBuilder {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<BuilderRequest>(100);
        let expectations: Queue = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                let Some(expectation) = next else {
                    panic!("Unexpected request: {request:?}");
                };
                if let Some(gate) = expectation.gate {
                    let _ = gate.await;
                }
                match (request, expectation.kind, expectation.reply) {
                    (BuilderRequest::CreateModule { respond_to, .. }, Kind::CreateModule, Reply::Module(r))
                    | (BuilderRequest::UpdateModule { respond_to, .. }, Kind::UpdateModule, Reply::Module(r)) => {
                        let _ = respond_to.send(r);
                    }
                    (BuilderRequest::CreateResource { respond_to, .. }, Kind::CreateResource, Reply::Resource(r))
                    | (BuilderRequest::UpdateResource { respond_to, .. }, Kind::UpdateResource, Reply::Resource(r)) => {
                        let _ = respond_to.send(r);
                    }
                    (request, kind, _) => {
                        panic!("Expected {kind:?}, got {request:?}");
                    }
                }
            }
        });

        Self {
            client: BuilderClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> BuilderClient {
        self.client.clone()
    }

    pub fn expect_create_module(&mut self) -> ModuleExpectation {
        ModuleExpectation::new(Kind::CreateModule, self.expectations.clone())
    }

    pub fn expect_update_module(&mut self) -> ModuleExpectation {
        ModuleExpectation::new(Kind::UpdateModule, self.expectations.clone())
    }

    pub fn expect_create_resource(&mut self) -> ResourceExpectation {
        ResourceExpectation::new(Kind::CreateResource, self.expectations.clone())
    }

    pub fn expect_update_resource(&mut self) -> ResourceExpectation {
        ResourceExpectation::new(Kind::UpdateResource, self.expectations.clone())
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for module expectations.
pub struct ModuleExpectation {
    kind: Kind,
    gate: Option<oneshot::Receiver<()>>,
    expectations: Queue,
}

impl ModuleExpectation {
    fn new(kind: Kind, expectations: Queue) -> Self {
        Self {
            kind,
            gate: None,
            expectations,
        }
    }

    /// Hold the reply until `gate` fires (or its sender is dropped).
    pub fn gated(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_ok(self, module: Module) {
        self.push(Ok(module));
    }

    pub fn return_err(self, error: BuilderError) {
        self.push(Err(error));
    }

    fn push(self, reply: Result<Module, BuilderError>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            kind: self.kind,
            reply: Reply::Module(reply),
            gate: self.gate,
        });
    }
}

/// Builder for resource expectations.
pub struct ResourceExpectation {
    kind: Kind,
    gate: Option<oneshot::Receiver<()>>,
    expectations: Queue,
}

impl ResourceExpectation {
    fn new(kind: Kind, expectations: Queue) -> Self {
        Self {
            kind,
            gate: None,
            expectations,
        }
    }

    /// Hold the reply until `gate` fires (or its sender is dropped).
    pub fn gated(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_ok(self, resource: Resource) {
        self.push(Ok(resource));
    }

    pub fn return_err(self, error: BuilderError) {
        self.push(Err(error));
    }

    fn push(self, reply: Result<Resource, BuilderError>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            kind: self.kind,
            reply: Reply::Resource(reply),
            gate: self.gate,
        });
    }
}
