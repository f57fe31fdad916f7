use crate::domain::errors::Failure;

// Literal parsed by the index endpoint; it is never a valid integer.
pub const PROBE_LITERAL: &str = "10x";

// Parses a fixed literal and reports the outcome.
pub struct ParseProbeUseCase {
    pub literal: &'static str,
}

impl Default for ParseProbeUseCase {
    fn default() -> Self {
        Self {
            literal: PROBE_LITERAL,
        }
    }
}

impl ParseProbeUseCase {
    pub fn execute(&self) -> Result<i32, Failure> {
        self.literal
            .parse::<i32>()
            .map_err(|err| Failure::invalid_number(self.literal, &err))
    }
}
