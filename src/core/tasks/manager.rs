use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::{
    runtime::Runtime,
    time::interval,
};

use super::types::TaskResult;
use crate::{
    api::PredictionClient,
    core::{
        models::{
            ModelKey,
            UploadFile,
        },
        progress::{
            ProgressSimulator,
            PROGRESS_TICK,
        },
    },
};

/// Bridges the async prediction pipeline to the single-threaded GUI. Each
/// submission runs on its own thread; results and progress ticks come back
/// over the channel and the GUI drains them once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn predict_base(
        &self,
        client: Arc<PredictionClient>,
        file: UploadFile,
        model_key: ModelKey,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            runtime.block_on(async move {
                println!("Submitting {} to the {} model", file.name, model_key.as_str());

                let mut progress = ProgressSimulator::new();
                let mut ticker = interval(PROGRESS_TICK);
                let request = client.predict_base(&file, model_key);
                tokio::pin!(request);

                // Race the real request against the progress ticker; the
                // simulator can never hit 100 before the request settles.
                let result = loop {
                    tokio::select! {
                        result = &mut request => break result,
                        _ = ticker.tick() => {
                            let _ = sender.send(TaskResult::BaseProgress(progress.advance()));
                        }
                    }
                };

                let _ = sender.send(TaskResult::BaseProgress(progress.complete()));

                if let Err(error) = &result {
                    eprintln!("Base prediction failed: {}", error);
                }
                let _ = sender
                    .send(TaskResult::BasePrediction(result.map_err(|error| error.to_string())));
            });
        });
    }

    pub fn predict_binary(
        &self,
        client: Arc<PredictionClient>,
        file: UploadFile,
        model_key: ModelKey,
        threshold: String,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            runtime.block_on(async move {
                println!(
                    "Submitting {} to the binary {} model (threshold {})",
                    file.name,
                    model_key.as_str(),
                    threshold
                );

                let mut progress = ProgressSimulator::new();
                let mut ticker = interval(PROGRESS_TICK);
                let request = client.predict_binary(&file, model_key, &threshold);
                tokio::pin!(request);

                let result = loop {
                    tokio::select! {
                        result = &mut request => break result,
                        _ = ticker.tick() => {
                            let _ = sender.send(TaskResult::BinaryProgress(progress.advance()));
                        }
                    }
                };

                let _ = sender.send(TaskResult::BinaryProgress(progress.complete()));

                if let Err(error) = &result {
                    eprintln!("Binary prediction failed: {}", error);
                }
                let _ = sender
                    .send(TaskResult::BinaryPrediction(result.map_err(|error| error.to_string())));
            });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;
    use crate::{
        api::test_server::{
            json_response,
            serve_once,
            spawn_listener,
        },
        core::config::ApiConfig,
    };

    fn sample_file() -> UploadFile {
        UploadFile {
            name: "sample.txt".to_string(),
            content_type: "text/plain".to_string(),
            contents: b"It was a dark and stormy night.".to_vec(),
        }
    }

    #[test]
    fn base_task_streams_progress_then_a_result() {
        let (listener, port) = spawn_listener();
        serve_once(
            listener,
            json_response("200 OK", r#"{"top_k_predictions":[{"label":"1920","probability":0.4}]}"#),
        );

        let config = ApiConfig { base_url: format!("http://127.0.0.1:{}/", port), ..ApiConfig::default() };
        let client = Arc::new(PredictionClient::new(config).unwrap());

        let mut manager = TaskManager::new();
        manager.predict_base(client, sample_file(), ModelKey::Decade);

        let deadline = Instant::now() + Duration::from_secs(10);
        let mut progress = Vec::new();
        let mut prediction = None;

        while prediction.is_none() && Instant::now() < deadline {
            for result in manager.poll_results() {
                match result {
                    TaskResult::BaseProgress(value) => progress.push(value),
                    TaskResult::BasePrediction(result) => prediction = Some(result),
                    other => panic!("unexpected task result: {:?}", other),
                }
            }
            thread::sleep(Duration::from_millis(20));
        }

        let prediction = prediction.expect("prediction within deadline").expect("success");
        assert_eq!(prediction.top_k_predictions.len(), 1);

        assert!(progress.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(progress.last().copied(), Some(100.0));
        assert!(progress.iter().filter(|value| **value == 100.0).count() == 1);
    }
}
