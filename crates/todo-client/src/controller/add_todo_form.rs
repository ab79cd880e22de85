/// Fields of the "add task" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTodoForm {
    pub title: String,
    pub description: String,
    pub is_open: bool,
}

impl AddTodoForm {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Empty the fields and close the form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
