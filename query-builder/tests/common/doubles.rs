use super::*;

/// Records every write, or refuses them all when `deny` is set.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: RefCell<Vec<String>>,
    pub deny: bool,
}

impl RecordingClipboard {
    pub fn denying() -> Self {
        Self { deny: true, ..Default::default() }
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ActionError> {
        if self.deny {
            return Err(ActionError::Clipboard(String::from("permission denied")));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Records opened `(url, target)` pairs, or fails like a blocked popup when `block` is set.
#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: RefCell<Vec<(String, String)>>,
    pub block: bool,
}

impl RecordingNavigator {
    pub fn blocking() -> Self {
        Self { block: true, ..Default::default() }
    }
}

impl Navigator for RecordingNavigator {
    fn open_new_context(&self, url: &str, target: &str) -> Result<(), ActionError> {
        if self.block {
            return Err(ActionError::Navigation(String::from("popup blocked")));
        }
        self.opened.borrow_mut().push((url.to_string(), target.to_string()));
        Ok(())
    }
}

/// Subscribes to `assembler` and collects every change it reports.
pub fn record_changes(assembler: &mut QueryAssembler) -> (SubscriptionId, Rc<RefCell<Vec<Change>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let changes2 = Rc::clone(&changes);
    let id = assembler.subscribe(move |change| changes2.borrow_mut().push(*change));
    (id, changes)
}

pub fn init_logger() {
    TestLogger::new().activate();
}
