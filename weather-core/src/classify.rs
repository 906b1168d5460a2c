use crate::{WeatherError, WeatherSnapshot, state::View};

/// Map the outcome of one lookup to what the widget shows.
///
/// Failure detail goes to the log only; the view carries the short user message.
pub fn classify(outcome: Result<WeatherSnapshot, WeatherError>) -> View {
    match outcome {
        Ok(snapshot) => View::Weather(snapshot),
        Err(err) => {
            match &err {
                WeatherError::Fetch(_) => tracing::error!(error = %err, "weather lookup failed"),
                _ => tracing::warn!(error = %err, "weather lookup rejected"),
            }
            View::Error(err.user_message().to_string())
        }
    }
}
