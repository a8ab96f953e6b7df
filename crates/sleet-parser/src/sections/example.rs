//! Grouping of requests and responses into transaction examples.

use sleet_core::{
    ast::{Payload, TransactionExample},
    sourcemap::{PayloadSourceMap, TransactionExampleSourceMap},
};

/// Collects the payloads of one action in order.
///
/// Requests and responses accumulate into the current example; a request
/// that follows a response starts a new one.
#[derive(Debug, Default)]
pub(crate) struct ExampleBuilder {
    examples: Vec<TransactionExample>,
    maps: Vec<TransactionExampleSourceMap>,
}

impl ExampleBuilder {
    pub fn request(&mut self, request: Payload, map: PayloadSourceMap) {
        let starts_new = self
            .examples
            .last()
            .is_none_or(|example| !example.responses.is_empty());
        if starts_new {
            self.start();
        }
        if let (Some(example), Some(example_map)) = (self.examples.last_mut(), self.maps.last_mut()) {
            example.requests.push(request);
            example_map.requests.push(map);
        }
    }

    pub fn response(&mut self, response: Payload, map: PayloadSourceMap) {
        if self.examples.is_empty() {
            self.start();
        }
        if let (Some(example), Some(example_map)) = (self.examples.last_mut(), self.maps.last_mut()) {
            example.responses.push(response);
            example_map.responses.push(map);
        }
    }

    pub fn finish(self) -> (Vec<TransactionExample>, Vec<TransactionExampleSourceMap>) {
        (self.examples, self.maps)
    }

    fn start(&mut self) {
        self.examples.push(TransactionExample::default());
        self.maps.push(TransactionExampleSourceMap::default());
    }
}
