//! Console output as an injected capability.
//!
//! Both the remote stub and the presenter write human-readable lines. Putting
//! the sink behind a trait keeps them testable without capturing process
//! output: production wires [`Stdout`], tests wire [`Buffer`].

/// A line-oriented text sink.
///
/// `line` takes `&self` so a sink can be shared by collaborators that only
/// hold shared references; implementations handle their own interior
/// mutability if they accumulate state.
pub trait Console {
    /// Write one line of output.
    fn line(&self, text: &str);
}

/// Production sink: writes to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Console for Stdout {
    fn line(&self, text: &str) {
        println!("{}", text);
    }
}

/// Accumulating sink for tests. Does NOT print anything.
#[cfg(any(test, feature = "test_utils"))]
pub mod buffer {
    use super::Console;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    pub struct Buffer {
        lines: RefCell<Vec<String>>,
    }

    impl Buffer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lines(&self) -> Vec<String> {
            self.lines.borrow().clone()
        }
    }

    impl Console for Buffer {
        fn line(&self, text: &str) {
            self.lines.borrow_mut().push(text.to_string());
        }
    }

    impl Console for &Buffer {
        fn line(&self, text: &str) {
            (**self).line(text);
        }
    }
}
