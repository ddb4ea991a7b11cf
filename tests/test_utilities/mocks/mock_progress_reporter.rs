use depscout::prelude::*;

/// Mock ProgressReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn attempt_started(&self, stage: LookupStage, subject: &str, attempt: u32) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Started: {:?} {} (attempt {})", stage, subject, attempt));
    }

    fn attempt_succeeded(&self, _stage: LookupStage, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Succeeded: {}", message));
    }

    fn attempt_failed(&self, _stage: LookupStage, message: &str, will_retry: bool) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Failed (retry: {}): {}", will_retry, message));
    }

    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }
}
