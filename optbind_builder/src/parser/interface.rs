use crate::parser::ErrorContext;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, message: String);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ErrorContext, UserInterface};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records everything printed, and may be cloned to inspect it after the parser has taken ownership.
    #[derive(Clone, Default)]
    pub(crate) struct InMemoryInterface {
        messages: Rc<RefCell<Vec<String>>>,
        errors: Rc<RefCell<Vec<String>>>,
        error_context: Rc<RefCell<Option<ErrorContext>>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn print_error(&self, message: String) {
            self.errors.borrow_mut().push(message);
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once.
            self.error_context.borrow_mut().replace(error_context);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>, Option<ErrorContext>) {
            let messages = self.messages.take();
            let errors = self.errors.take();

            (
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("\n"))
                },
                if errors.is_empty() {
                    None
                } else {
                    Some(errors.join("\n"))
                },
                self.error_context.take(),
            )
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap()
        }
    }

    #[test]
    fn in_memory_interface() {
        let interface = InMemoryInterface::default();
        let shared = interface.clone();
        interface.print("a".to_string());
        interface.print("b".to_string());
        assert_eq!(shared.consume_message(), "a\nb");
    }
}
