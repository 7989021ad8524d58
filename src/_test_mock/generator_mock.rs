use crate::modules::generation::{GenerationError, ResponseGenerator};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Generator that returns a fixed result and records every prompt it receives.
pub struct ScriptedGenerator {
    response: Result<String, GenerationError>,
    calls: Rc<Cell<usize>>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            response: Ok(reply.to_string()),
            calls: Rc::new(Cell::new(0)),
            prompts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self {
            response: Err(error),
            ..Self::replying("")
        }
    }

    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }

    pub fn prompts(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.prompts)
    }
}

impl ResponseGenerator for ScriptedGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.set(self.calls.get() + 1);
        self.prompts.borrow_mut().push(prompt.to_string());
        self.response.clone()
    }
}
