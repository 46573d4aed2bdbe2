use super::report::Severity;

/// A (warn, error) limit pair for one metric kind. Both bounds are
/// exclusive: a value equal to the limit does not breach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPair {
    pub warn: usize,
    pub error: usize,
}

impl ThresholdPair {
    #[must_use]
    pub const fn new(warn: usize, error: usize) -> Self {
        Self { warn, error }
    }

    /// Classify an observed value against this pair.
    ///
    /// `value > error` yields `Error`; otherwise `value > warn` yields
    /// `Warning`; otherwise no issue. A value can never produce both.
    #[must_use]
    pub const fn evaluate(self, value: usize) -> Option<Severity> {
        if value > self.error {
            Some(Severity::Error)
        } else if value > self.warn {
            Some(Severity::Warning)
        } else {
            None
        }
    }

    /// The limit that was breached for the given severity.
    #[must_use]
    pub const fn limit_for(self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warn,
        }
    }
}

/// Threshold pairs for all three metrics, scoped to one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub file: ThresholdPair,
    pub function: ThresholdPair,
    pub nesting: ThresholdPair,
}

impl Thresholds {
    #[must_use]
    pub const fn new(
        file: ThresholdPair,
        function: ThresholdPair,
        nesting: ThresholdPair,
    ) -> Self {
        Self {
            file,
            function,
            nesting,
        }
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
