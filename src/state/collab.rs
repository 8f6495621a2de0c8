// Collaborator interfaces for the list view.
// Confirmation, notification, and navigation are injected rather than ambient.

/// Synchronous yes/no prompt.
pub trait Confirm {
    /// Block until the user answers. Returns true only on an explicit yes.
    fn confirm(&mut self, message: &str) -> bool;
}

/// User-facing notifications.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Navigation requested by the list view.
pub trait ListNavigator {
    fn on_new(&mut self);
    fn on_edit(&mut self, id: u64);
    fn on_home(&mut self);
}

#[cfg(test)]
pub mod fakes {
    //! Scripted collaborators for tests.

    use super::*;

    /// Answers every prompt with a fixed response and records the messages.
    #[derive(Debug, Default)]
    pub struct ScriptedConfirm {
        pub answer: bool,
        pub prompts: Vec<String>,
    }

    impl ScriptedConfirm {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                prompts: Vec::new(),
            }
        }
    }

    impl Confirm for ScriptedConfirm {
        fn confirm(&mut self, message: &str) -> bool {
            self.prompts.push(message.to_string());
            self.answer
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub successes: Vec<String>,
        pub errors: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&mut self, message: &str) {
            self.successes.push(message.to_string());
        }

        fn error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NavCall {
        New,
        Edit(u64),
        Home,
    }

    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub calls: Vec<NavCall>,
    }

    impl ListNavigator for RecordingNavigator {
        fn on_new(&mut self) {
            self.calls.push(NavCall::New);
        }

        fn on_edit(&mut self, id: u64) {
            self.calls.push(NavCall::Edit(id));
        }

        fn on_home(&mut self) {
            self.calls.push(NavCall::Home);
        }
    }
}
