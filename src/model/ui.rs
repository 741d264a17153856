//! UI state - search mode and the input prompt

/// What to do with the prompt text when the user confirms it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Save the document to the path typed in the prompt
    SaveAs,
    /// Jump to `LINE` or `LINE:COL`
    GotoLine,
}

/// Single-line input prompt shown at the bottom of the editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPrompt {
    pub active: bool,
    /// Survives a search stop (e.g. the save-as prompt for an unnamed buffer)
    pub required: bool,
    pub text: String,
    pub hint: String,
    pub action: Option<InputAction>,
}

impl InputPrompt {
    /// Open the prompt with an empty text
    pub fn open(&mut self, hint: String, action: Option<InputAction>, required: bool) {
        self.active = true;
        self.required = required;
        self.text.clear();
        self.hint = hint;
        self.action = action;
    }

    /// Close the prompt, returning the pending action and the typed text
    pub fn close(&mut self) -> (Option<InputAction>, String) {
        self.active = false;
        self.required = false;
        (self.action.take(), std::mem::take(&mut self.text))
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.text.push_str(&String::from_utf8_lossy(bytes));
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }
}

/// Linear substring search mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub active: bool,
    pub query: Vec<u8>,
}

impl SearchState {
    pub fn query_lossy(&self) -> String {
        String::from_utf8_lossy(&self.query).into_owned()
    }
}
