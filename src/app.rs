use crate::screens::screen::Screen;

pub struct App {
    screens: Vec<Box<dyn Screen>>,
}

impl App {
    pub fn new(root: Box<dyn Screen>) -> Self {
        Self {
            screens: vec![root],
        }
    }

    pub fn current_screen(&mut self) -> Option<&mut Box<dyn Screen>> {
        self.screens.last_mut()
    }

    pub fn push_screen(&mut self, screen: Box<dyn Screen>) {
        self.screens.push(screen);
    }

    /// Drops the top screen; the root one is never popped.
    pub fn pop_screen(&mut self) {
        if self.screens.len() > 1 {
            self.screens.pop();
        }
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.screens.len()
    }
}
