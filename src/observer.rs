use std::time::Duration;

use log::info;

/// Receiver for per-step diagnostics from the factorization loop.
///
/// Purely observational: implementations cannot fail and must not feed anything
/// back into the numeric state. The loop reports every step while the step index
/// is below 100, then every 100th step.
pub trait StepObserver {
    fn on_step(&self, step: usize, elapsed: Duration, relative_residual: Option<f64>);
}

/// Default collaborator: ignores every step
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&self, _step: usize, _elapsed: Duration, _relative_residual: Option<f64>) {}
}

/// Routes step records to the log facade
pub struct LogObserver;

impl StepObserver for LogObserver {
    fn on_step(&self, step: usize, elapsed: Duration, relative_residual: Option<f64>) {
        match relative_residual {
            Some(residual) => info!(
                "[step {}] [{:.3?}] relative error={:.6e}",
                step, elapsed, residual
            ),
            None => info!("[step {}] [{:.3?}]", step, elapsed),
        }
    }
}

/// Rate limit for the diagnostic channel: every step below 100, then every 100th
pub(crate) fn should_report(step: usize) -> bool {
    step < 100 || step % 100 == 0
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct RecordingObserver {
        steps: Mutex<Vec<(usize, Option<f64>)>>,
    }

    impl StepObserver for RecordingObserver {
        fn on_step(&self, step: usize, _elapsed: Duration, relative_residual: Option<f64>) {
            self.steps.lock().unwrap().push((step, relative_residual));
        }
    }

    #[test]
    fn test_should_report_rate_limit() {
        assert!(should_report(0));
        assert!(should_report(42));
        assert!(should_report(99));
        assert!(!should_report(101));
        assert!(!should_report(199));
        assert!(should_report(200));
        assert!(should_report(1000));
    }

    #[test]
    fn test_recording_observer_sees_residual() {
        let observer = RecordingObserver {
            steps: Mutex::new(Vec::new()),
        };
        observer.on_step(3, Duration::from_millis(5), Some(0.25));
        observer.on_step(4, Duration::from_millis(6), None);
        let steps = observer.steps.lock().unwrap();
        assert_eq!(steps.as_slice(), &[(3, Some(0.25)), (4, None)]);
    }
}
