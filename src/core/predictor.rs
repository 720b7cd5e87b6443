use crate::domain::model::{PredictionStatus, ProjectileState, TrajectoryRequest, TrajectoryResult};

/// Number of unit time steps simulated per prediction.
pub const PREDICTION_STEPS: usize = 25;

#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryPredictor;

impl TrajectoryPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, request: &TrajectoryRequest) -> TrajectoryResult {
        let end = self
            .trace(request)
            .last()
            .unwrap_or_else(|| ProjectileState::from(request));

        TrajectoryResult {
            predicted_x: end.x,
            predicted_y: end.y,
            status: PredictionStatus::Success,
        }
    }

    /// States after each of the `PREDICTION_STEPS` steps, in order.
    pub fn trace(&self, request: &TrajectoryRequest) -> Trajectory {
        Trajectory {
            state: ProjectileState::from(request),
            gravity: request.gravity(),
            remaining: PREDICTION_STEPS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trajectory {
    state: ProjectileState,
    gravity: f64,
    remaining: usize,
}

impl Iterator for Trajectory {
    type Item = ProjectileState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // 半隱式歐拉: 先更新速度, 再更新位置
        self.state.vy += self.gravity;
        self.state.x += self.state.vx;
        self.state.y += self.state.vy;

        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Trajectory {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DEFAULT_GRAVITY, DEFAULT_X};

    fn request(x: f64, y: f64, vx: f64, vy: f64, gravity: f64) -> TrajectoryRequest {
        TrajectoryRequest {
            x: Some(x),
            y: Some(y),
            vx: Some(vx),
            vy: Some(vy),
            gravity: Some(gravity),
        }
    }

    #[test]
    fn test_known_value_scenario() {
        let result = TrajectoryPredictor::new().predict(&request(0.0, 0.0, 1.0, 0.0, 1.0));

        assert_eq!(result.predicted_x, 25.0);
        assert_eq!(result.predicted_y, 5525.0);
        assert_eq!(result.status, PredictionStatus::Success);
    }

    #[test]
    fn test_defaults_match_explicit_values() {
        let predictor = TrajectoryPredictor::new();
        let implicit = predictor.predict(&TrajectoryRequest::default());
        let explicit = predictor.predict(&request(DEFAULT_X, 0.0, 0.0, 0.0, DEFAULT_GRAVITY));

        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_pure_horizontal_motion() {
        let result = TrajectoryPredictor::new().predict(&request(-3.5, 12.0, 0.75, 0.0, 0.0));

        assert_eq!(result.predicted_y, 12.0);
        assert_eq!(result.predicted_x, -3.5 + 0.75 * 25.0);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let predictor = TrajectoryPredictor::new();
        let input = request(50.0, 3.0, 0.37, -4.1, 0.15);
        let first = predictor.predict(&input);

        for _ in 0..10 {
            let again = predictor.predict(&input);
            assert_eq!(again.predicted_x.to_bits(), first.predicted_x.to_bits());
            assert_eq!(again.predicted_y.to_bits(), first.predicted_y.to_bits());
        }
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let mut trace = TrajectoryPredictor::new().trace(&request(0.0, 0.0, 0.0, 0.0, 1.0));
        let first = trace.next().unwrap();

        // explicit Euler would leave y at 0 after the first step
        assert_eq!(first.vy, 1.0);
        assert_eq!(first.y, 1.0);
    }

    #[test]
    fn test_trace_ends_at_prediction() {
        let predictor = TrajectoryPredictor::new();
        let input = request(10.0, 5.0, 2.0, -3.0, 0.5);
        let states: Vec<_> = predictor.trace(&input).collect();
        let result = predictor.predict(&input);

        assert_eq!(states.len(), PREDICTION_STEPS);
        assert!(states.iter().all(|s| s.vx == 2.0));
        let last = states.last().unwrap();
        assert_eq!((last.x, last.y), (result.predicted_x, result.predicted_y));
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let predictor = TrajectoryPredictor::new();

        let result = predictor.predict(&request(f64::NAN, 0.0, 1.0, 0.0, 0.0));
        assert!(result.predicted_x.is_nan());
        assert_eq!(result.predicted_y, 0.0);

        let result = predictor.predict(&request(0.0, 0.0, 0.0, 0.0, f64::INFINITY));
        assert_eq!(result.predicted_y, f64::INFINITY);
    }
}
