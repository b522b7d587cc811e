//! Scripted tree generators.
//!
//! Each one records how often it was called so tests can assert the
//! "exactly one generator call per accepted generate()" contract.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use futures::future::BoxFuture;
use notemap_runtime::{Error, Result, TreeGenerator};
use notemap_types::TreeNode;

/// Always answers with the same tree.
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    tree: TreeNode,
    calls: Arc<AtomicUsize>,
    inputs: Arc<Mutex<Vec<String>>>,
}

impl StaticGenerator {
    pub fn new(tree: TreeNode) -> Self {
        Self {
            tree,
            calls: Arc::new(AtomicUsize::new(0)),
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Texts received so far, in call order
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

impl TreeGenerator for StaticGenerator {
    fn generate(&self, text: String) -> BoxFuture<'static, Result<TreeNode>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().unwrap().push(text);
        let tree = self.tree.clone();
        Box::pin(async move { Ok(tree) })
    }
}

/// Always rejects.
#[derive(Debug, Clone)]
pub struct FailingGenerator {
    message: String,
    calls: Arc<AtomicUsize>,
}

impl FailingGenerator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TreeGenerator for FailingGenerator {
    fn generate(&self, _text: String) -> BoxFuture<'static, Result<TreeNode>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let message = self.message.clone();
        Box::pin(async move { Err(Error::Generator(message)) })
    }
}

/// Answers each call with the next scripted result.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGenerator {
    script: Arc<Mutex<VecDeque<Result<TreeNode>>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedGenerator {
    pub fn new(script: impl IntoIterator<Item = Result<TreeNode>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TreeGenerator for ScriptedGenerator {
    fn generate(&self, _text: String) -> BoxFuture<'static, Result<TreeNode>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Generator("script exhausted".to_string())));
        Box::pin(async move { next })
    }
}

/// Holds every call open until the test releases it, to simulate a slow
/// upstream that resolves after the view has moved on.
#[derive(Debug, Clone, Default)]
pub struct GatedGenerator {
    pending: Arc<Mutex<VecDeque<oneshot::Sender<Result<TreeNode>>>>>,
}

impl GatedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Resolve the oldest outstanding call; returns false if none was waiting.
    pub fn release(&self, result: Result<TreeNode>) -> bool {
        let sender = self.pending.lock().unwrap().pop_front();
        match sender {
            Some(sender) => sender.send(result).is_ok(),
            None => false,
        }
    }
}

impl TreeGenerator for GatedGenerator {
    fn generate(&self, _text: String) -> BoxFuture<'static, Result<TreeNode>> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push_back(tx);
        Box::pin(async move {
            rx.await
                .unwrap_or_else(|_| Err(Error::Generator("gate dropped".to_string())))
        })
    }
}
