//! Recording fakes shared by the unit tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clipboard::{ClipboardWriter, SelectionHost};
use crate::error::{BridgeError, BridgeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    Create(String),
    Attach(u32),
    Select(String),
    /// Selection at the time the copy command ran
    Copy(Option<String>),
    Detach(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Rejected,
    Throws,
    Panics,
}

#[derive(Debug)]
pub struct FakeInput {
    id: u32,
    value: String,
}

/// In-memory document that records every operation in order
pub struct RecordingHost {
    ops: RefCell<Vec<HostOp>>,
    attached: RefCell<Vec<u32>>,
    selection: RefCell<Option<String>>,
    clipboard: RefCell<Option<String>>,
    next_id: Cell<u32>,
    outcome: Cell<CopyOutcome>,
    attach_fails: Cell<bool>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::with_outcome(CopyOutcome::Copied)
    }

    pub fn with_outcome(outcome: CopyOutcome) -> Self {
        Self {
            ops: RefCell::new(Vec::new()),
            attached: RefCell::new(Vec::new()),
            selection: RefCell::new(None),
            clipboard: RefCell::new(None),
            next_id: Cell::new(1),
            outcome: Cell::new(outcome),
            attach_fails: Cell::new(false),
        }
    }

    pub fn fail_attach(&self) {
        self.attach_fails.set(true);
    }

    pub fn ops(&self) -> Vec<HostOp> {
        self.ops.borrow().clone()
    }

    pub fn attached_count(&self) -> usize {
        self.attached.borrow().len()
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone()
    }
}

impl SelectionHost for RecordingHost {
    type Input = FakeInput;

    fn create_input(&self, value: &str) -> BridgeResult<FakeInput> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.ops.borrow_mut().push(HostOp::Create(value.to_string()));
        Ok(FakeInput { id, value: value.to_string() })
    }

    fn attach(&self, input: &FakeInput) -> BridgeResult<()> {
        if self.attach_fails.get() {
            return Err(BridgeError::NoBody);
        }
        self.attached.borrow_mut().push(input.id);
        self.ops.borrow_mut().push(HostOp::Attach(input.id));
        Ok(())
    }

    fn select_all(&self, input: &FakeInput) -> BridgeResult<()> {
        *self.selection.borrow_mut() = Some(input.value.clone());
        self.ops.borrow_mut().push(HostOp::Select(input.value.clone()));
        Ok(())
    }

    fn exec_copy(&self) -> BridgeResult<bool> {
        let selection = self.selection.borrow().clone();
        self.ops.borrow_mut().push(HostOp::Copy(selection.clone()));
        match self.outcome.get() {
            CopyOutcome::Copied => {
                *self.clipboard.borrow_mut() = selection;
                Ok(true)
            }
            CopyOutcome::Rejected => Ok(false),
            CopyOutcome::Throws => Err(BridgeError::Js("SecurityError".to_string())),
            CopyOutcome::Panics => panic!("copy command blew up"),
        }
    }

    fn detach(&self, input: &FakeInput) {
        self.attached.borrow_mut().retain(|id| *id != input.id);
        if self.selection.borrow().as_deref() == Some(input.value.as_str()) {
            *self.selection.borrow_mut() = None;
        }
        self.ops.borrow_mut().push(HostOp::Detach(input.id));
    }
}

/// Writer that only remembers what it was asked to copy
#[derive(Clone, Default)]
pub struct MemoryWriter {
    written: Rc<RefCell<Vec<String>>>,
    fail: Rc<Cell<bool>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let writer = Self::default();
        writer.fail.set(true);
        writer
    }

    pub fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }
}

impl ClipboardWriter for MemoryWriter {
    fn write_text(&self, text: &str) -> BridgeResult<()> {
        self.written.borrow_mut().push(text.to_string());
        if self.fail.get() {
            Err(BridgeError::CommandRejected)
        } else {
            Ok(())
        }
    }
}
