//! Collector for accumulating warnings during a decode.
//!
//! The [`WarningCollector`] lets the decoder report every problem it finds
//! instead of stopping at the first one, and keeps the per-category counters
//! that end up in [`DecodeStats`].

use log::warn;

use crate::{decode::DecodeStats, error::Warning};

#[derive(Debug, Default)]
pub(crate) struct WarningCollector {
    warnings: Vec<Warning>,
    stats: DecodeStats,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning, in encounter order.
    pub fn emit(&mut self, warning: Warning) {
        warn!(code = warning.code().as_str(); "{}", warning.message());
        self.warnings.push(warning);
    }

    /// Counters updated alongside the warnings.
    pub fn stats(&mut self) -> &mut DecodeStats {
        &mut self.stats
    }

    pub fn finish(self) -> (Vec<Warning>, DecodeStats) {
        (self.warnings, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WarningCode;

    #[test]
    fn test_collector_new_finish_empty() {
        let (warnings, stats) = WarningCollector::new().finish();
        assert!(warnings.is_empty());
        assert_eq!(stats, DecodeStats::default());
    }

    #[test]
    fn test_collector_keeps_order() {
        let mut collector = WarningCollector::new();
        collector.emit(Warning::new(WarningCode::W001, "first"));
        collector.emit(Warning::new(WarningCode::W102, "second"));
        collector.stats().missing_shape += 1;

        let (warnings, stats) = collector.finish();
        let messages: Vec<_> = warnings.iter().map(Warning::message).collect();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(stats.missing_shape, 1);
    }
}
